//! Tag tree data model
//!
//! A tree is made of [`Tag`]s (ordinary elements) and [`Section`]s (top-level
//! containers such as `head` and `body`). Both are wrapped in [`Node`] when
//! stored as a child, so every parent owns its children exclusively.

use indexmap::IndexMap;

use crate::options::RenderOptions;
use crate::render;

/// A child in the tag tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordinary element, rendered with a leading newline
    Tag(Tag),

    /// Top-level structural container, rendered on its own lines
    Section(Section),
}

impl Node {
    /// Element name of this node
    pub fn name(&self) -> &str {
        match self {
            Node::Tag(tag) => &tag.name,
            Node::Section(section) => &section.name,
        }
    }

    /// Children in insertion order
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Tag(tag) => &tag.children,
            Node::Section(section) => &section.children,
        }
    }

    /// Render at nesting level `depth` with default options
    pub fn render(&self, depth: usize) -> String {
        self.render_with(depth, &RenderOptions::default())
    }

    /// Render at nesting level `depth`
    pub fn render_with(&self, depth: usize, options: &RenderOptions) -> String {
        let mut out = String::new();
        render::render_node(self, depth, options, &mut out);
        out
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Tag(tag)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

/// An HTML element with classes, id, attributes, text and children.
///
/// Tag names and attribute names are never validated; whatever is given is
/// rendered verbatim. Attribute values are not escaped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    /// Element name, e.g. `div`
    pub name: String,

    /// CSS classes, rendered space-joined in insertion order
    pub classes: Vec<String>,

    /// Element id; `None` and `Some("")` both render nothing
    pub id: Option<String>,

    /// Literal content placed right after the opening tag, before children
    pub text: String,

    /// Child nodes
    pub children: Vec<Node>,

    /// Render only the opening tag, dropping text and children
    pub is_single: bool,

    /// Extra attributes, rendered in insertion order after `class` and `id`.
    ///
    /// `class` and `id` keys must not be used here.
    pub attributes: IndexMap<String, String>,
}

impl Tag {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an element with attributes
    pub fn with_attrs<K, V>(
        name: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut tag = Self::new(name);
        tag.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        tag
    }

    /// Add one CSS class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add several CSS classes, keeping their order
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Set the element id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute. Re-setting a name keeps its original position.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark as a single (self-closing) tag
    pub fn single(mut self) -> Self {
        self.is_single = true;
        self
    }

    /// Append a child, returning `self` for chaining
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Render at nesting level `depth` with default options
    pub fn render(&self, depth: usize) -> String {
        self.render_with(depth, &RenderOptions::default())
    }

    /// Render at nesting level `depth`
    pub fn render_with(&self, depth: usize, options: &RenderOptions) -> String {
        let mut out = String::new();
        render::render_tag(self, depth, options, &mut out);
        out
    }
}

/// A top-level structural container (`head`, `body`, ...).
///
/// Sections carry only a name and children. They always render as a pair of
/// tags, each on its own line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub name: String,
    pub children: Vec<Node>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, returning `self` for chaining
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Render at nesting level `depth` with default options
    pub fn render(&self, depth: usize) -> String {
        self.render_with(depth, &RenderOptions::default())
    }

    /// Render at nesting level `depth`
    pub fn render_with(&self, depth: usize, options: &RenderOptions) -> String {
        let mut out = String::new();
        render::render_section(self, depth, options, &mut out);
        out
    }
}
