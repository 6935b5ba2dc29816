use crate::io::IoError;

/// Malformed block syntax. Aborts the whole conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "line {line}, column {column}: expected {expected:?} but got {}",
        describe_found(.found)
    )]
    UnexpectedChar {
        expected: char,
        /// `None` when the line ended first.
        found: Option<char>,
        line: usize,
        column: usize,
    },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of line".to_string(),
    }
}

/// Failure of a file-to-file conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] IoError),
}
