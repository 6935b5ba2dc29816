use crate::{
    parsing::{cursor::Cursor, inline::scan_inline},
    tree::{Element, ElementKind, NodeId, Tree},
};

use super::{classify::LineClass, kinds::ListKind};

/// The root-level block that the next line may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveBlock {
    None,
    Paragraph,
    BlockQuote,
    List { kind: ListKind, container: NodeId },
}

/// Separator inserted between root-level blocks and for blank lines.
const NEWLINE: &str = "\n";

/// Builds the element tree from classified lines.
///
/// Holds the single insertion cursor. Inline scanning moves it within the
/// current block; closing a block resets it to the root.
pub struct BlockBuilder {
    tree: Tree,
    insertion: NodeId,
    active: ActiveBlock,
}

impl BlockBuilder {
    pub fn new() -> Self {
        let tree = Tree::new();
        let insertion = tree.root();
        Self {
            tree,
            insertion,
            active: ActiveBlock::None,
        }
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        match line {
            LineClass::Blank => {
                self.close_block();
                self.push_root_newline();
            }
            LineClass::Heading { level, id, content } => {
                self.close_block();
                self.insertion = self.open_root_block(
                    Element::new(ElementKind::Heading(level)).with_attribute("id", id),
                );
                self.scan(content);
                self.close_block();
            }
            LineClass::Rule => {
                self.close_block();
                self.open_root_block(Element::new(ElementKind::HorizontalRule));
            }
            LineClass::ListItem { kind, content } => {
                let container = match self.active {
                    ActiveBlock::List {
                        kind: open_kind,
                        container,
                    } if open_kind == kind => container,
                    _ => {
                        self.close_block();
                        let container = self.open_root_block(Element::new(kind.container()));
                        self.active = ActiveBlock::List { kind, container };
                        container
                    }
                };
                self.insertion = self
                    .tree
                    .append(container, Element::new(ElementKind::ListItem));
                self.scan(content);
            }
            LineClass::BlockQuote { content } => {
                self.continue_or_open(ActiveBlock::BlockQuote, ElementKind::BlockQuote);
                self.scan(content);
            }
            LineClass::Text { content } => {
                self.continue_or_open(ActiveBlock::Paragraph, ElementKind::Paragraph);
                self.scan(content);
            }
        }
    }

    /// Returns the finished tree.
    pub fn finish(mut self) -> Tree {
        self.close_block();
        self.tree
    }

    fn scan(&mut self, mut content: Cursor<'_>) {
        self.insertion = scan_inline(&mut self.tree, self.insertion, &mut content);
    }

    /// Continues `block` with a soft break if it is active, otherwise opens a
    /// new root-level `kind` element for it.
    fn continue_or_open(&mut self, block: ActiveBlock, kind: ElementKind) {
        if self.active == block {
            self.tree.push_text(self.insertion, NEWLINE);
            return;
        }
        self.close_block();
        self.insertion = self.open_root_block(Element::new(kind));
        self.active = block;
    }

    /// Appends a block to the root, separated from any previous block by a
    /// single newline.
    fn open_root_block(&mut self, element: Element) -> NodeId {
        log::debug!("opening {:?}", element.kind);
        let root = self.tree.root();
        if !self.tree.is_empty() {
            self.push_root_newline();
        }
        self.tree.append(root, element)
    }

    /// Appends a newline leaf to the root unless the root already ends with
    /// one, which collapses runs of blank lines.
    fn push_root_newline(&mut self) {
        let root = self.tree.root();
        let ends_with_newline = self
            .tree
            .last_child(root)
            .and_then(|last| self.tree.get(last).text.as_deref())
            .is_some_and(|text| text.ends_with(NEWLINE));
        if !ends_with_newline {
            self.tree.append(root, Element::text(NEWLINE));
        }
    }

    fn close_block(&mut self) {
        self.active = ActiveBlock::None;
        self.insertion = self.tree.root();
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
