use crate::{
    parsing::cursor::Cursor,
    tree::{Element, ElementKind, NodeId, Tree},
};

use super::kinds::{HardBreak, Marker};

/// Scans the rest of `cur` into `tree` starting at insertion point `at`.
///
/// Returns the insertion point after the last character, which may be
/// inside a container that is still open. The caller decides whether the
/// next line continues from there.
pub fn scan_inline(tree: &mut Tree, mut at: NodeId, cur: &mut Cursor<'_>) -> NodeId {
    while !cur.eof() {
        if cur.starts_with(HardBreak::DELIM) {
            cur.bump_n(HardBreak::DELIM.len());
            tree.append(at, Element::new(ElementKind::LineBreak));
            continue;
        }
        if let Some(marker) = Marker::at(cur) {
            cur.bump_n(marker.delimiter().len());
            at = toggle(tree, at, marker);
            continue;
        }
        if let Some(c) = cur.bump_char() {
            let mut buf = [0u8; 4];
            tree.push_text(at, c.encode_utf8(&mut buf));
        }
    }
    at
}

/// Opens `marker`'s container under `at`, or steps out of the nearest open
/// one.
fn toggle(tree: &mut Tree, at: NodeId, marker: Marker) -> NodeId {
    let kind = marker.element();
    match tree.find_ancestor(at, kind) {
        Some(open) => {
            log::trace!("closing {kind:?}");
            tree.parent(open).unwrap_or(tree.root())
        }
        None => {
            log::trace!("opening {kind:?}");
            tree.append(at, Element::new(kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::render_html;
    use pretty_assertions::assert_eq;

    /// Scans `line` into a fresh paragraph and renders it.
    fn scan(line: &str) -> String {
        let mut tree = Tree::new();
        let p = tree.append(tree.root(), Element::new(ElementKind::Paragraph));
        let mut cur = Cursor::new(line, 1);
        scan_inline(&mut tree, p, &mut cur);
        render_html(&tree)
    }

    #[test]
    fn plain_text() {
        assert_eq!(scan("hello world"), "<p>hello world</p>");
    }

    #[test]
    fn strong() {
        assert_eq!(scan("**a**"), "<p><strong>a</strong></p>");
    }

    #[test]
    fn repeated_strong_closes_cleanly() {
        assert_eq!(
            scan("**a**b**c**"),
            "<p><strong>a</strong>b<strong>c</strong></p>"
        );
    }

    #[test]
    fn emphasis_code_strike() {
        assert_eq!(scan("*a*"), "<p><em>a</em></p>");
        assert_eq!(scan("`a`"), "<p><code>a</code></p>");
        assert_eq!(scan("~a~"), "<p><s>a</s></p>");
    }

    #[test]
    fn nested_distinct_markers() {
        assert_eq!(
            scan("*x **y** z*"),
            "<p><em>x <strong>y</strong> z</em></p>"
        );
    }

    #[test]
    fn overlapping_markers_are_not_validated() {
        assert_eq!(
            scan("*a**b*c**"),
            "<p><em>a<strong>b</strong></em>c<strong></strong></p>"
        );
    }

    #[test]
    fn unmatched_marker_stays_open() {
        assert_eq!(scan("**open"), "<p><strong>open</strong></p>");
    }

    #[test]
    fn code_content_is_still_scanned() {
        assert_eq!(scan("`a*b*`"), "<p><code>a<em>b</em></code></p>");
    }

    #[test]
    fn two_spaces_break_line() {
        assert_eq!(scan("a  b"), "<p>a<br />b</p>");
        assert_eq!(scan("a   b"), "<p>a<br /> b</p>");
        assert_eq!(scan("end  "), "<p>end<br /></p>");
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(scan("café *olé*"), "<p>café <em>olé</em></p>");
    }

    #[test]
    fn returns_open_insertion_point() {
        let mut tree = Tree::new();
        let p = tree.append(tree.root(), Element::new(ElementKind::Paragraph));
        let mut cur = Cursor::new("**bold", 1);
        let at = scan_inline(&mut tree, p, &mut cur);
        assert_eq!(tree.get(at).kind, ElementKind::Strong);
        assert_eq!(tree.parent(at), Some(p));
    }
}
