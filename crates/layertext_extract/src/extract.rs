//! Lazy text traversal over a document tree.

use std::slice;

use layertext_tree::Node;

use crate::ExtractError;

/// Returns the lazy sequence of all text carried below `root`.
///
/// The traversal is depth-first and preserves sibling order at every level.
/// For each node, the text of everything nested beneath it is emitted before
/// the node's own text, so a group's caption follows its contents. The root
/// itself stands for the whole document and its own text is never emitted.
///
/// The returned iterator borrows nothing mutable: extracting twice from the
/// same root yields identical sequences, and dropping the iterator early is
/// free.
///
/// # Example
///
/// ```rust
/// use layertext_extract::extract_text;
/// use layertext_tree::{Bounds, Node, TreeArena};
///
/// let arena = TreeArena::new();
/// let top = arena.alloc_slice_copy(&[
///     Node::new_text(None, Bounds::ZERO, "A"),
///     Node::new_text(None, Bounds::ZERO, "B"),
/// ]);
/// let root = Node::document(top);
///
/// assert_eq!(extract_text(&root).collect::<Vec<_>>(), vec!["A", "B"]);
/// ```
pub fn extract_text<'a>(root: &Node<'a>) -> TextFragments<'a> {
    TextFragments {
        stack: vec![Frame {
            children: root.children.iter(),
            after: None,
        }],
    }
}

/// Lazy iterator over the text below a document root.
///
/// Created by [`extract_text`] or [`Extractor::extract`]. Each pull advances
/// the traversal by at most one subtree descent, so stopping early never
/// walks the rest of the tree.
#[derive(Debug, Clone)]
pub struct TextFragments<'a> {
    stack: Vec<Frame<'a>>,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    children: slice::Iter<'a, Node<'a>>,
    /// Text the owning node emits once its children are exhausted. `None` for
    /// the root frame: the document container's text is not part of the
    /// sequence.
    after: Option<&'a str>,
}

impl<'a> Iterator for TextFragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let next_child = match self.stack.last_mut() {
                Some(frame) => frame.children.next(),
                None => return None,
            };

            match next_child {
                Some(node) => {
                    if !node.children.is_empty() {
                        // Descend; the node's own text waits for its subtree.
                        self.stack.push(Frame {
                            children: node.children.iter(),
                            after: node.text,
                        });
                    } else if let Some(text) = node.text {
                        return Some(text);
                    }
                }
                None => {
                    // Subtree exhausted; surface the owning node's text.
                    if let Some(text) = self.stack.pop().and_then(|frame| frame.after) {
                        return Some(text);
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for TextFragments<'_> {}

/// Configurable text-extraction entry point.
///
/// [`extract_text`] trusts its input to be a well-formed document tree. When
/// the tree comes from a source that might misbehave, an `Extractor` with a
/// depth limit refuses implausibly nested trees up front instead of walking
/// them.
///
/// # Example
///
/// ```rust
/// use layertext_extract::Extractor;
/// use layertext_tree::{Bounds, Node, TreeArena};
///
/// let arena = TreeArena::new();
/// let top = arena.alloc_slice_copy(&[Node::new_text(None, Bounds::ZERO, "ok")]);
/// let root = Node::document(top);
///
/// let texts: Vec<&str> = Extractor::new()
///     .max_depth(32)
///     .extract(&root)
///     .unwrap()
///     .collect();
/// assert_eq!(texts, vec!["ok"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    max_depth: Option<usize>,
}

impl Extractor {
    /// Creates an extractor with no limits configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest allowed layer nesting: layers may sit at most `depth`
    /// levels below the document root.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Checks `root` against the configured limits and returns the lazy text
    /// sequence.
    ///
    /// The check walks container nesting without touching any text, so it is
    /// cheap relative to a full extraction. With no limits configured this
    /// never fails and behaves exactly like [`extract_text`].
    pub fn extract<'a>(&self, root: &Node<'a>) -> Result<TextFragments<'a>, ExtractError> {
        if let Some(limit) = self.max_depth {
            check_depth(root, limit)?;
        }
        Ok(extract_text(root))
    }
}

fn check_depth<'a>(root: &Node<'a>, limit: usize) -> Result<(), ExtractError> {
    let mut stack: Vec<slice::Iter<'a, Node<'a>>> = vec![root.children.iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(child) if !child.children.is_empty() => {
                // Children of `child` would sit at stack.len() + 1 levels
                // below the root.
                if stack.len() >= limit {
                    return Err(ExtractError::DepthExceeded { limit });
                }
                stack.push(child.children.iter());
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}
