//! Flat layer-list assembly.
//!
//! Layered documents store the layer panel as a flat list in which group
//! boundaries are marked by section dividers: a folder record (open or
//! closed) starts a group and a bounding divider ends it. [`assemble`] folds
//! such a list, given in document order (top of the layer panel first), into
//! a tree rooted at a document node.

use layertext_tree::{Bounds, Node, NodeKind, TreeArena};
use tracing::debug;

use crate::SourceError;

/// Section marker carried by a layer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionMarker {
    /// An ordinary layer.
    #[default]
    None,
    /// Starts a group shown expanded in the layer panel.
    OpenFolder,
    /// Starts a group shown collapsed in the layer panel.
    ClosedFolder,
    /// Ends the group started by the nearest unclosed folder record.
    Divider,
}

impl SectionMarker {
    /// Returns true for the two folder markers.
    #[inline]
    pub const fn starts_group(self) -> bool {
        matches!(self, SectionMarker::OpenFolder | SectionMarker::ClosedFolder)
    }
}

/// One record of a flat layer list.
///
/// This is the shape a file decoder hands over: per-layer attributes plus the
/// section marker that encodes grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    /// Layer name.
    pub name: Option<String>,
    /// Stable layer id.
    pub id: Option<u32>,
    /// Whether the layer is visible.
    pub visible: bool,
    /// Pixel rectangle covered by the layer.
    pub bounds: Bounds,
    /// Literal text content, for type layers.
    pub text: Option<String>,
    /// Grouping marker.
    pub section: SectionMarker,
}

impl Default for LayerRecord {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            visible: true,
            bounds: Bounds::ZERO,
            text: None,
            section: SectionMarker::None,
        }
    }
}

impl LayerRecord {
    /// Creates a type-layer record.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Creates a raster-layer record.
    pub fn image(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a folder record starting an expanded group.
    pub fn open_folder(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            section: SectionMarker::OpenFolder,
            ..Self::default()
        }
    }

    /// Creates the divider record ending the current group.
    pub fn divider() -> Self {
        Self {
            section: SectionMarker::Divider,
            ..Self::default()
        }
    }

    /// Sets the pixel rectangle.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }
}

struct OpenSection<'a> {
    name: Option<&'a str>,
    id: Option<u32>,
    visible: bool,
    text: Option<&'a str>,
    children: Vec<Node<'a>>,
}

/// Folds a flat, document-ordered layer list into a tree.
///
/// A group's pixel extent is derived as the union of its children's bounds;
/// the folder record's own rectangle is ignored (decoders routinely leave it
/// zeroed). Folder records and dividers must pair up, otherwise an
/// [`SourceError::UnbalancedSection`] is returned.
pub fn assemble<'a>(
    arena: &'a TreeArena,
    records: &[LayerRecord],
) -> Result<Node<'a>, SourceError> {
    let mut open: Vec<OpenSection<'a>> = Vec::new();
    let mut top_level: Vec<Node<'a>> = Vec::new();

    for record in records {
        match record.section {
            marker if marker.starts_group() => {
                open.push(OpenSection {
                    name: record.name.as_deref().map(|s| &*arena.alloc_str(s)),
                    id: record.id,
                    visible: record.visible,
                    text: record.text.as_deref().map(|s| &*arena.alloc_str(s)),
                    children: Vec::new(),
                });
            }
            SectionMarker::Divider => match open.pop() {
                Some(section) => {
                    let node = close_section(arena, section);
                    push_child(&mut open, &mut top_level, node);
                }
                None => {
                    return Err(SourceError::unbalanced(
                        "section divider without a matching folder record",
                    ));
                }
            },
            _ => {
                let node = leaf_node(arena, record);
                push_child(&mut open, &mut top_level, node);
            }
        }
    }

    if let Some(section) = open.last() {
        return Err(SourceError::unbalanced(format!(
            "group {:?} is never closed",
            section.name.unwrap_or("<unnamed>")
        )));
    }

    let children = arena.alloc_slice_copy(&top_level);
    debug!(
        "Assembled {} records into {} top-level layers",
        records.len(),
        children.len()
    );
    Ok(Node::document(children))
}

fn push_child<'a>(
    open: &mut Vec<OpenSection<'a>>,
    top_level: &mut Vec<Node<'a>>,
    node: Node<'a>,
) {
    match open.last_mut() {
        Some(section) => section.children.push(node),
        None => top_level.push(node),
    }
}

fn close_section<'a>(arena: &'a TreeArena, section: OpenSection<'a>) -> Node<'a> {
    let bounds = section
        .children
        .iter()
        .fold(Bounds::ZERO, |acc, child| acc.union(&child.bounds));
    let children = arena.alloc_slice_copy(&section.children);

    Node {
        kind: NodeKind::Group,
        name: section.name,
        id: section.id,
        bounds,
        visible: section.visible,
        text: section.text,
        children,
    }
}

fn leaf_node<'a>(arena: &'a TreeArena, record: &LayerRecord) -> Node<'a> {
    let text = record.text.as_deref().map(|s| &*arena.alloc_str(s));

    Node {
        kind: if text.is_some() {
            NodeKind::Text
        } else {
            NodeKind::Image
        },
        name: record.name.as_deref().map(|s| &*arena.alloc_str(s)),
        id: record.id,
        bounds: record.bounds,
        visible: record.visible,
        text,
        children: &[],
    }
}
