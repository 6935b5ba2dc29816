use crate::{
    error::ParseError,
    parsing::{cursor::Cursor, lines::LineRef},
};

use super::kinds::{BlockQuote, Heading, ListKind, ListMarker, ThematicBreak};

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified on its own
/// leading characters, without reference to surrounding blocks. Variants
/// with inline content carry a cursor positioned just after the marker.
#[derive(Debug, Clone)]
pub enum LineClass<'a> {
    /// An empty line.
    Blank,
    Heading {
        level: u8,
        /// Anchor derived from the heading text.
        id: String,
        content: Cursor<'a>,
    },
    /// `---`; the rest of the line is discarded.
    Rule,
    ListItem {
        kind: ListKind,
        content: Cursor<'a>,
    },
    BlockQuote {
        content: Cursor<'a>,
    },
    /// Anything else: paragraph text.
    Text {
        content: Cursor<'a>,
    },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in priority order: blank, heading, rule, ordered
    /// item, unordered item, blockquote, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> Result<LineClass<'a>, ParseError> {
        if lr.text.is_empty() {
            return Ok(LineClass::Blank);
        }

        let mut cur = Cursor::new(lr.text, lr.number);

        if let Some(level) = Heading::scan(&mut cur)? {
            return Ok(LineClass::Heading {
                level,
                id: Heading::anchor_id(cur.rest()),
                content: cur,
            });
        }
        if ThematicBreak::matches(&cur) {
            return Ok(LineClass::Rule);
        }
        if ListMarker::scan_ordered(&mut cur) {
            return Ok(LineClass::ListItem {
                kind: ListKind::Ordered,
                content: cur,
            });
        }
        if ListMarker::scan_unordered(&mut cur) {
            return Ok(LineClass::ListItem {
                kind: ListKind::Unordered,
                content: cur,
            });
        }
        if BlockQuote::strip_prefix(&mut cur) {
            return Ok(LineClass::BlockQuote { content: cur });
        }
        Ok(LineClass::Text { content: cur })
    }
}
