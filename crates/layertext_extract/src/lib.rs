//! # layertext_extract
//!
//! Text extraction core for LayerText.
//!
//! This crate provides:
//! - [`extract_text`], the lazy traversal that yields every piece of text
//!   carried below a document root
//! - [`Extractor`], a configurable entry point with a depth guard for trees
//!   of dubious provenance
//!
//! The traversal is depth-first and emits a node's descendants before the
//! node's own text, so a group's caption surfaces after its contents. The
//! document root is the container for the whole file and its own text, if any,
//! is never emitted.
//!
//! ## Example
//!
//! ```rust
//! use layertext_extract::extract_text;
//! use layertext_tree::{Bounds, Node, TreeArena};
//!
//! let arena = TreeArena::new();
//!
//! let inner = arena.alloc_slice_copy(&[Node::new_text(None, Bounds::ZERO, "inner")]);
//! let mut group = Node::new_group(Some("folder"), Bounds::ZERO, inner);
//! group.text = Some("outer");
//!
//! let top = arena.alloc_slice_copy(&[group]);
//! let root = Node::document(top);
//!
//! let texts: Vec<&str> = extract_text(&root).collect();
//! assert_eq!(texts, vec!["inner", "outer"]);
//! ```

mod error;
mod extract;

pub use error::ExtractError;
pub use extract::{Extractor, TextFragments, extract_text};
