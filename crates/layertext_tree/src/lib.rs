//! # layertext_tree
//!
//! Document tree types for LayerText.
//!
//! This crate provides the in-memory tree model for layered design documents:
//! a document root whose children are the top-level layers, with groups
//! nesting further layers and type layers carrying literal text.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes of one document are allocated in a single arena
//! - Nodes are `Copy` and reference their children as arena slices
//! - The tree is immutable once built; memory is freed all at once when the
//!   arena is dropped
//!
//! ## Example
//!
//! ```rust
//! use layertext_tree::{Bounds, Node, TreeArena};
//!
//! let arena = TreeArena::new();
//!
//! let children = arena.alloc_slice_copy(&[Node::new_text(
//!     Some("headline"),
//!     Bounds::new(10, 10, 200, 40),
//!     "Summer Sale",
//! )]);
//! let root = Node::document(children);
//!
//! assert!(root.has_children());
//! ```

mod arena;
mod bounds;
mod kind;
mod node;
pub mod visitor;

pub use arena::TreeArena;
pub use bounds::Bounds;
pub use kind::NodeKind;
pub use node::Node;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
