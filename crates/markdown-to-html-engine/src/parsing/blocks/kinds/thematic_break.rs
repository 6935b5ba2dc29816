use crate::parsing::cursor::Cursor;

/// Horizontal rule: exactly three dashes at line start.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static [u8; 3] = b"---";

    /// True for `---` not followed by a fourth dash. Anything after the
    /// marker is ignored.
    pub fn matches(cur: &Cursor<'_>) -> bool {
        cur.starts_with(Self::MARKER) && cur.peek_at(Self::MARKER.len()) != Some(b'-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(line: &str) -> bool {
        ThematicBreak::matches(&Cursor::new(line, 1))
    }

    #[test]
    fn three_dashes() {
        assert!(matches("---"));
        assert!(matches("--- trailing"));
    }

    #[test]
    fn other_dash_runs() {
        assert!(!matches("--"));
        assert!(!matches("----"));
        assert!(!matches("- item"));
        assert!(!matches(" ---"));
    }
}
