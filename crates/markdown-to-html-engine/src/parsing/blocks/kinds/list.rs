use crate::{parsing::cursor::Cursor, tree::ElementKind};

/// Which list container an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// The container element for items of this kind.
    pub fn container(self) -> ElementKind {
        match self {
            ListKind::Ordered => ElementKind::OrderedList,
            ListKind::Unordered => ElementKind::UnorderedList,
        }
    }
}

/// List item markers: `N. ` and `- `.
pub struct ListMarker;

impl ListMarker {
    pub const ORDERED_DELIM: &'static [u8; 2] = b". ";
    pub const BULLET: &'static [u8; 2] = b"- ";

    /// Consumes an ordered marker (`digits`, `.`, space).
    ///
    /// On failure the cursor is restored.
    pub fn scan_ordered(cur: &mut Cursor<'_>) -> bool {
        let saved = cur.clone();
        let mut digits = 0usize;
        while cur.peek().is_some_and(|b| b.is_ascii_digit()) {
            cur.bump();
            digits += 1;
        }
        if digits > 0 && cur.starts_with(Self::ORDERED_DELIM) {
            cur.bump_n(Self::ORDERED_DELIM.len());
            return true;
        }
        *cur = saved;
        false
    }

    /// Consumes an unordered marker (`-` then space).
    pub fn scan_unordered(cur: &mut Cursor<'_>) -> bool {
        if cur.starts_with(Self::BULLET) {
            cur.bump_n(Self::BULLET.len());
            return true;
        }
        false
    }
}
