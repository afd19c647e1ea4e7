//! Visitor pattern for document-tree traversal.
//!
//! This module provides a read-only traversal over document trees. The tree is
//! immutable once built, so there is no mutating counterpart.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait with per-kind hooks
//! - [`walk_node`] - Dispatch function for kind-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! Dispatch is pre-order: a node is visited before its children. Returning
//! [`ControlFlow::Break`] from any hook stops the traversal.
//!
//! # Examples
//!
//! ## Collecting Type Layers
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use layertext_tree::visitor::{VisitResult, Visitor, walk_node};
//! use layertext_tree::{Bounds, Node, TreeArena};
//!
//! struct TypeLayerCollector<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TypeLayerCollector<'a> {
//!     fn visit_text(&mut self, node: &Node<'a>) -> VisitResult {
//!         if let Some(name) = node.name {
//!             self.names.push(name);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = TreeArena::new();
//! let children = arena.alloc_slice_copy(&[Node::new_text(
//!     Some("headline"),
//!     Bounds::ZERO,
//!     "Hello",
//! )]);
//! let root = Node::document(children);
//!
//! let mut collector = TypeLayerCollector { names: Vec::new() };
//! walk_node(&mut collector, &root);
//! assert_eq!(collector.names, vec!["headline"]);
//! ```

use std::ops::ControlFlow;

use crate::{Node, NodeKind};

/// Result of a visit step; `Break` stops the traversal.
pub type VisitResult = ControlFlow<()>;

/// Read-only traversal over a document tree.
///
/// Every hook defaults to continuing, so implementors only override the kinds
/// they care about.
pub trait Visitor<'a> {
    /// Called for the document root.
    fn visit_document(&mut self, _node: &Node<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for groups and artboards.
    fn visit_group(&mut self, _node: &Node<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for type layers.
    fn visit_text(&mut self, _node: &Node<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for raster layers.
    fn visit_image(&mut self, _node: &Node<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for vector shape layers.
    fn visit_shape(&mut self, _node: &Node<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}

/// Dispatches `node` to its kind-specific hook, then walks its children.
pub fn walk_node<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: &Node<'a>) -> VisitResult {
    match node.kind {
        NodeKind::Document => visitor.visit_document(node)?,
        NodeKind::Group | NodeKind::Artboard => visitor.visit_group(node)?,
        NodeKind::Text => visitor.visit_text(node)?,
        NodeKind::Image => visitor.visit_image(node)?,
        NodeKind::Shape => visitor.visit_shape(node)?,
    }
    walk_children(visitor, node)
}

/// Walks every child of `node` in sibling order.
pub fn walk_children<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: &Node<'a>) -> VisitResult {
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
