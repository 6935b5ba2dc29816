use super::{ElementKind, NodeId, Tree};

/// Serializes `tree` to HTML with a depth-first pre-order walk.
///
/// The root contributes only its children. Text is written verbatim; no
/// HTML escaping is applied.
pub fn render_html(tree: &Tree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), &mut out);
    out
}

fn render_node(tree: &Tree, id: NodeId, out: &mut String) {
    let el = tree.get(id);
    match el.kind {
        ElementKind::Root => render_children(tree, id, out),
        ElementKind::Text => out.push_str(el.text.as_deref().unwrap_or_default()),
        kind if kind.is_self_closing() => {
            open_tag(tree, id, out);
            out.push_str(" />");
        }
        kind => {
            open_tag(tree, id, out);
            out.push('>');
            if kind.is_list() {
                for &child in tree.children(id) {
                    out.push_str("\n\t");
                    render_node(tree, child, out);
                }
                out.push('\n');
            } else {
                render_children(tree, id, out);
            }
            out.push_str("</");
            out.push_str(kind.tag());
            out.push('>');
        }
    }
}

fn render_children(tree: &Tree, id: NodeId, out: &mut String) {
    for &child in tree.children(id) {
        render_node(tree, child, out);
    }
}

/// Writes `<tag` followed by every attribute, without the closing `>`.
fn open_tag(tree: &Tree, id: NodeId, out: &mut String) {
    let el = tree.get(id);
    out.push('<');
    out.push_str(el.kind.tag());
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
