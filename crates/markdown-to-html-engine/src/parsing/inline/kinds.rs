//! # Inline Kinds
//!
//! Inline markers and the element each one toggles. All delimiter constants
//! live here; the scanner never hardcodes `**` or `` ` ``.

use crate::{parsing::cursor::Cursor, tree::ElementKind};

/// A paired marker that toggles a formatting container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Strong,
    Emphasis,
    Code,
    Strikethrough,
}

impl Marker {
    /// Longest delimiters first, so `**` wins over `*`.
    const ALL: [Marker; 4] = [
        Marker::Strong,
        Marker::Emphasis,
        Marker::Code,
        Marker::Strikethrough,
    ];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Marker::Strong => b"**",
            Marker::Emphasis => b"*",
            Marker::Code => b"`",
            Marker::Strikethrough => b"~",
        }
    }

    /// The container this marker opens and closes.
    pub fn element(self) -> ElementKind {
        match self {
            Marker::Strong => ElementKind::Strong,
            Marker::Emphasis => ElementKind::Emphasis,
            Marker::Code => ElementKind::Code,
            Marker::Strikethrough => ElementKind::Strikethrough,
        }
    }

    /// The marker starting at the cursor, if any.
    pub fn at(cur: &Cursor<'_>) -> Option<Marker> {
        Self::ALL
            .into_iter()
            .find(|m| cur.starts_with(m.delimiter()))
    }
}

/// Two consecutive spaces force a `<br />`.
pub struct HardBreak;

impl HardBreak {
    pub const DELIM: &'static [u8; 2] = b"  ";
}
