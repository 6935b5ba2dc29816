use crate::parsing::cursor::Cursor;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Consumes `>` and at most one following space.
    pub fn strip_prefix(cur: &mut Cursor<'_>) -> bool {
        if cur.peek() != Some(Self::PREFIX) {
            return false;
        }
        cur.bump();
        if cur.peek() == Some(b' ') {
            cur.bump();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(line: &str) -> Option<&str> {
        let mut cur = Cursor::new(line, 1);
        BlockQuote::strip_prefix(&mut cur).then(|| cur.rest())
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(strip("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(strip("> hello"), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(strip(">hello"), Some("hello"));
    }

    #[test]
    fn only_one_space_is_consumed() {
        assert_eq!(strip(">  hello"), Some(" hello"));
    }

    #[test]
    fn nested_marker_stays_literal() {
        assert_eq!(strip("> > hello"), Some("> hello"));
    }
}
