//! Node kind tags.

use serde::{Deserialize, Serialize};

/// The kind of a document-tree node.
///
/// Covers the layer vocabulary of layered design files: the document
/// container, grouping layers (folders and artboards), type layers, raster
/// layers, and vector shape layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The whole-document container; only ever the tree root.
    Document,
    /// A layer group (folder in the layer panel).
    Group,
    /// An artboard; groups its layers like a folder does.
    Artboard,
    /// A type layer carrying literal text.
    Text,
    /// A raster layer.
    Image,
    /// A vector shape layer.
    Shape,
}

impl NodeKind {
    /// Returns true for kinds that hold an ordered child sequence.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Group | NodeKind::Artboard)
    }

    /// The lowercase name used in exported documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Group => "group",
            NodeKind::Artboard => "artboard",
            NodeKind::Text => "text",
            NodeKind::Image => "image",
            NodeKind::Shape => "shape",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
