//! Whole-document parsing tests.
//!
//! Every parsed tree is checked against the structural invariants before
//! its shape is inspected.


use crate::{
    error::ParseError,
    parsing::parse_document,
    tree::{ElementKind, Tree},
};

fn parse(md: &str) -> Tree {
    let tree = parse_document(md).unwrap();
    invariants::check(&tree);
    tree
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn every_construct_keeps_invariants() {
    let md = "# Title\n\
              intro **bold** *em* `code` ~gone~  break\n\
              continued\n\
              \n\
              ---\n\
              1. one\n\
              2. two\n\
              - bullet\n\
              > quote\n\
              > more\n\
              \n\
              \n\
              *dangling";
    let tree = parse(md);
    assert!(tree.len() > 20);
}

#[test]
fn overlapping_markers_keep_invariants() {
    parse("*a**b*c**\n~`x~`\n**`*~");
}

#[test]
fn heading_levels() {
    for level in 1..=6u8 {
        let md = format!("{} Title", "#".repeat(level as usize));
        let tree = parse(&md);
        let heading = tree.children(tree.root())[0];
        assert_eq!(tree.get(heading).kind, ElementKind::Heading(level));
    }
}

#[test]
fn malformed_heading_aborts() {
    let err = parse_document("fine\n#bad\nfine").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            expected: ' ',
            found: Some('b'),
            line: 2,
            column: 2,
        }
    );
}

#[test]
fn parsing_is_deterministic() {
    let md = "# A\n- x\n- *y*\n\n> q  r\n";
    assert_eq!(parse_document(md), parse_document(md));
}
