//! # Element Tree
//!
//! Arena-backed tree of HTML elements produced by the parser.
//!
//! ## Ownership
//!
//! Every element lives in the [`Tree`] arena and is addressed by a [`NodeId`].
//! Owning edges run parent → child (`children`); each element also stores a
//! non-owning `parent` back-reference so the inline engine can ask "is this
//! marker already open above me?" without re-deriving structure.
//!
//! ## Modules
//!
//! - **`render`**: depth-first serializer producing the HTML string

pub mod render;

pub use render::render_html;

/// Index of an element inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The kind of an element, which determines its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Invisible document root; renders only its children.
    Root,
    /// Literal text with no children.
    Text,
    /// `<h1>` … `<h6>`; the level is always in `1..=6`.
    Heading(u8),
    Paragraph,
    Strong,
    Code,
    Strikethrough,
    Emphasis,
    LineBreak,
    HorizontalRule,
    OrderedList,
    UnorderedList,
    ListItem,
    BlockQuote,
}

impl ElementKind {
    /// Returns the HTML tag name (empty for root and text).
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Root | ElementKind::Text => "",
            ElementKind::Heading(1) => "h1",
            ElementKind::Heading(2) => "h2",
            ElementKind::Heading(3) => "h3",
            ElementKind::Heading(4) => "h4",
            ElementKind::Heading(5) => "h5",
            ElementKind::Heading(6) => "h6",
            ElementKind::Heading(level) => unreachable!("heading level {level} outside 1..=6"),
            ElementKind::Paragraph => "p",
            ElementKind::Strong => "strong",
            ElementKind::Code => "code",
            ElementKind::Strikethrough => "s",
            ElementKind::Emphasis => "em",
            ElementKind::LineBreak => "br",
            ElementKind::HorizontalRule => "hr",
            ElementKind::OrderedList => "ol",
            ElementKind::UnorderedList => "ul",
            ElementKind::ListItem => "li",
            ElementKind::BlockQuote => "blockquote",
        }
    }

    /// Elements rendered as `<tag />` with no closing tag.
    pub fn is_self_closing(self) -> bool {
        matches!(self, ElementKind::LineBreak | ElementKind::HorizontalRule)
    }

    /// List containers put each child on its own tab-indented line.
    pub fn is_list(self) -> bool {
        matches!(self, ElementKind::OrderedList | ElementKind::UnorderedList)
    }
}

/// A single node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Name/value pairs, rendered in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Payload of a [`ElementKind::Text`] leaf; `None` for every other kind.
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Element {
    /// Creates an empty element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            text: match kind {
                ElementKind::Text => Some(String::new()),
                _ => None,
            },
            children: Vec::new(),
            parent: None,
        }
    }

    /// Creates a text leaf holding `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(ElementKind::Text)
        }
    }

    /// Adds an attribute, keeping insertion order.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }
}

/// Arena holding every element of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Element>,
}

impl Tree {
    /// Creates a tree containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new(ElementKind::Root)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Total number of elements, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.children(self.root()).is_empty()
    }

    /// Appends `element` as the last child of `parent` and returns its id.
    ///
    /// Text leaves never own children; appending under one is a caller bug.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        debug_assert!(
            !self.get(parent).is_text(),
            "text leaves cannot own children"
        );
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        self.nodes.push(element);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Extends the trailing text leaf of `parent`, or appends a new one when
    /// the last child is not text.
    pub fn push_text(&mut self, parent: NodeId, text: &str) {
        if let Some(last) = self.last_child(parent)
            && let Some(payload) = self.nodes[last.0].text.as_mut()
        {
            payload.push_str(text);
            return;
        }
        self.append(parent, Element::text(text));
    }

    /// Iterates from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Nearest node of `kind` among `id` and its ancestors.
    pub fn find_ancestor(&self, id: NodeId, kind: ElementKind) -> Option<NodeId> {
        self.ancestors(id).find(|&n| self.get(n).kind == kind)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Tree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
