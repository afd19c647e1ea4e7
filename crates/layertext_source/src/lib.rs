//! # layertext_source
//!
//! Document source adapters for LayerText.
//!
//! This crate provides:
//! - A [`TreeSource`] trait for materializing document trees from external
//!   representations
//! - A built-in [`JsonSource`] for the exported layer-tree JSON shape
//! - [`assemble`], which folds a flat, divider-delimited layer list into a
//!   tree
//!
//! ## Architecture
//!
//! Sources convert an already-decoded representation into arena-allocated
//! [`Node`](layertext_tree::Node) trees. Decoding the binary file format
//! itself (chunk layout, compression, color modes) is a separate concern and
//! lives outside this crate; sources only reshape what such a decoder hands
//! over.
//!
//! ## Example
//!
//! ```rust,ignore
//! use layertext_source::{JsonSource, TreeSource};
//! use layertext_tree::TreeArena;
//!
//! let arena = TreeArena::new();
//! let root = JsonSource::new().load(&arena, &exported_json)?;
//! ```

mod error;
mod json;
mod layers;
mod traits;

pub use error::SourceError;
pub use json::JsonSource;
pub use layers::{LayerRecord, SectionMarker, assemble};
pub use traits::TreeSource;
