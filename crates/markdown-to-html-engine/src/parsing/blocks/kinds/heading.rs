use crate::{error::ParseError, parsing::cursor::Cursor};

/// ATX heading (`#` … `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Consumes a heading marker run and its mandatory space.
    ///
    /// Returns `Ok(None)` when the line does not start with `#`. A run longer
    /// than [`Self::MAX_LEVEL`] or a missing space is a parse error.
    pub fn scan(cur: &mut Cursor<'_>) -> Result<Option<u8>, ParseError> {
        if cur.peek() != Some(Self::MARKER) {
            return Ok(None);
        }
        let mut level = 0u8;
        while level < Self::MAX_LEVEL && cur.peek() == Some(Self::MARKER) {
            cur.bump();
            level += 1;
        }
        cur.expect(b' ')?;
        Ok(Some(level))
    }

    /// Derives the anchor id from the heading text: lower-cased, spaces
    /// replaced by `-`, everything else verbatim.
    pub fn anchor_id(text: &str) -> String {
        text.to_lowercase().replace(' ', "-")
    }
}
