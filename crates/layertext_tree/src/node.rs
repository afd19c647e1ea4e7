//! Document node definition.
//!
//! The core tree node type used throughout LayerText.

use serde::Serialize;

use crate::{Bounds, NodeKind};

/// A node in the document tree.
///
/// A node is one entry of a layered document: the document container itself,
/// a group, or a single layer. Groups carry an ordered child sequence; type
/// layers carry literal text. A group may also carry text of its own (a
/// caption on the folder); the two fields are independent.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use layertext_tree::{Bounds, Node, TreeArena};
///
/// let arena = TreeArena::new();
///
/// // A type layer inside a group
/// let children = arena.alloc_slice_copy(&[Node::new_text(
///     Some("price"),
///     Bounds::new(0, 0, 80, 24),
///     "$9.99",
/// )]);
/// let group = Node::new_group(Some("badge"), Bounds::new(0, 0, 80, 24), children);
///
/// assert!(group.has_children());
/// assert!(!group.is_text());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// Layer name, when the document carries one.
    pub name: Option<&'a str>,

    /// Stable layer id, when the document carries one.
    pub id: Option<u32>,

    /// Pixel rectangle covered by this layer.
    pub bounds: Bounds,

    /// Whether the layer is visible in the composite.
    pub visible: bool,

    /// Literal text content (type layers; a group caption is also valid).
    pub text: Option<&'a str>,

    /// Child nodes, ordered top of the layer panel first.
    pub children: &'a [Node<'a>],
}

impl<'a> Node<'a> {
    /// Creates the document root over the given top-level layers.
    #[inline]
    pub const fn document(children: &'a [Node<'a>]) -> Self {
        Self {
            kind: NodeKind::Document,
            name: None,
            id: None,
            bounds: Bounds::ZERO,
            visible: true,
            text: None,
            children,
        }
    }

    /// Creates a new group node with children.
    #[inline]
    pub const fn new_group(
        name: Option<&'a str>,
        bounds: Bounds,
        children: &'a [Node<'a>],
    ) -> Self {
        Self {
            kind: NodeKind::Group,
            name,
            id: None,
            bounds,
            visible: true,
            text: None,
            children,
        }
    }

    /// Creates a new type layer carrying text.
    #[inline]
    pub const fn new_text(name: Option<&'a str>, bounds: Bounds, text: &'a str) -> Self {
        Self {
            kind: NodeKind::Text,
            name,
            id: None,
            bounds,
            visible: true,
            text: Some(text),
            children: &[],
        }
    }

    /// Creates a new leaf layer of the given kind (no children, no text).
    #[inline]
    pub const fn new_leaf(kind: NodeKind, name: Option<&'a str>, bounds: Bounds) -> Self {
        Self {
            kind,
            name,
            id: None,
            bounds,
            visible: true,
            text: None,
            children: &[],
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node carries literal text.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Returns true if this node's kind holds a child sequence.
    #[inline]
    pub const fn is_container(&self) -> bool {
        self.kind.is_container()
    }
}

impl<'a> Serialize for Node<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 3; // type, visible, bounds
        if self.name.is_some() {
            len += 1;
        }
        if self.id.is_some() {
            len += 1;
        }
        if self.text.is_some() {
            len += 1;
        }
        if self.is_container() || !self.children.is_empty() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Node", len)?;

        state.serialize_field("type", &self.kind)?;
        if let Some(name) = self.name {
            state.serialize_field("name", name)?;
        }
        if let Some(id) = self.id {
            state.serialize_field("id", &id)?;
        }
        state.serialize_field("visible", &self.visible)?;
        state.serialize_field("bounds", &self.bounds)?;
        if let Some(text) = self.text {
            state.serialize_field("text", text)?;
        }

        if self.is_container() || !self.children.is_empty() {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}
