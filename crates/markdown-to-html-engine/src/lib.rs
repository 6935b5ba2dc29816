pub mod error;
pub mod io;
pub mod parsing;
pub mod tree;

use std::path::Path;

// Re-export key types for easier usage
pub use error::{ConvertError, ParseError};
pub use io::IoError;
pub use parsing::parse_document;
pub use tree::{Element, ElementKind, NodeId, Tree, render_html};

/// Converts a Markdown document to HTML.
pub fn convert(markdown: &str) -> Result<String, ParseError> {
    let tree = parse_document(markdown)?;
    Ok(render_html(&tree))
}

/// Reads `input`, converts it and writes the result to `output`.
///
/// Nothing is written when the input fails to parse.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let markdown = io::read_markdown(input)?;
    let html = convert(&markdown)?;
    io::write_html(output, &html)?;
    Ok(())
}
