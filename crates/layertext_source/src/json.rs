//! Exported-document JSON source.
//!
//! Layered-document tools commonly export their layer tree as JSON: one
//! object per layer with `type`, `name`, `id`, `visible`, the pixel edges,
//! an ordered `children` array on groups, and `text` on type layers. Some
//! exporters emit `text` as a plain string, others as an object whose
//! `value` field carries the string; both forms are accepted.

use layertext_tree::{Bounds, Node, NodeKind, TreeArena};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{SourceError, TreeSource};

/// Source for exported layer-tree JSON.
///
/// Lenient where the vocabulary allows it: unknown `type` strings are logged
/// and treated as raster layers, missing `visible` defaults to `true`, and
/// missing edges default to zero. Structural problems (a non-object layer
/// entry, a non-array `children`) are errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl JsonSource {
    /// Creates a new JSON source.
    pub fn new() -> Self {
        Self
    }

    fn convert_node<'a>(
        &self,
        arena: &'a TreeArena,
        value: &Value,
    ) -> Result<Node<'a>, SourceError> {
        let obj = value
            .as_object()
            .ok_or_else(|| SourceError::malformed("layer entry is not an object"))?;

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .map(|s| &*arena.alloc_str(s));
        let id = obj.get("id").and_then(Value::as_u64).map(|v| v as u32);
        let visible = obj.get("visible").and_then(Value::as_bool).unwrap_or(true);
        let bounds = read_bounds(obj)?;
        let text = read_text(arena, obj)?;

        let children: &'a [Node<'a>] = match obj.get("children") {
            Some(Value::Array(items)) => {
                let mut nodes = Vec::with_capacity(items.len());
                for item in items {
                    nodes.push(self.convert_node(arena, item)?);
                }
                arena.alloc_slice_copy(&nodes)
            }
            Some(Value::Null) | None => &[],
            Some(_) => return Err(SourceError::malformed("\"children\" is not an array")),
        };

        let has_children = matches!(obj.get("children"), Some(Value::Array(_)));
        let kind = read_kind(obj, has_children, text.is_some());

        Ok(Node {
            kind,
            name,
            id,
            bounds,
            visible,
            text,
            children,
        })
    }
}

fn read_kind(obj: &Map<String, Value>, has_children: bool, has_text: bool) -> NodeKind {
    match obj.get("type").and_then(Value::as_str) {
        Some("document") => NodeKind::Document,
        Some("group") => NodeKind::Group,
        Some("artboard") => NodeKind::Artboard,
        Some("text") => NodeKind::Text,
        Some("image") => NodeKind::Image,
        Some("shape") => NodeKind::Shape,
        // Exporters that only distinguish groups tag everything else "layer".
        Some("layer") => {
            if has_text {
                NodeKind::Text
            } else {
                NodeKind::Image
            }
        }
        Some(other) => {
            warn!("Unknown layer type {:?}, treating as a raster layer", other);
            NodeKind::Image
        }
        None => {
            if has_children {
                NodeKind::Group
            } else if has_text {
                NodeKind::Text
            } else {
                NodeKind::Image
            }
        }
    }
}

fn read_bounds(obj: &Map<String, Value>) -> Result<Bounds, SourceError> {
    if let Some(bounds) = obj.get("bounds") {
        let bounds: Bounds = serde_json::from_value(bounds.clone())?;
        return Ok(bounds);
    }

    let edge = |key: &str| obj.get(key).and_then(Value::as_i64).unwrap_or(0) as i32;
    Ok(Bounds::new(
        edge("left"),
        edge("top"),
        edge("right"),
        edge("bottom"),
    ))
}

fn read_text<'a>(
    arena: &'a TreeArena,
    obj: &Map<String, Value>,
) -> Result<Option<&'a str>, SourceError> {
    match obj.get("text") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(&*arena.alloc_str(s))),
        // Text-object form: the string sits in the "value" field.
        Some(Value::Object(map)) => match map.get("value") {
            Some(Value::String(s)) => Ok(Some(&*arena.alloc_str(s))),
            _ => Err(SourceError::malformed(
                "text object has no string \"value\" field",
            )),
        },
        Some(_) => Err(SourceError::malformed(
            "\"text\" is neither a string nor an object",
        )),
    }
}

impl TreeSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn load<'a>(&self, arena: &'a TreeArena, input: &str) -> Result<Node<'a>, SourceError> {
        let value: Value = serde_json::from_str(input)?;
        let mut root = self.convert_node(arena, &value)?;
        // The top-level entry is the whole-document container.
        root.kind = NodeKind::Document;
        Ok(root)
    }
}
