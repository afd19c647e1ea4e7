//! Source trait definition.

use layertext_tree::{Node, TreeArena};

use crate::SourceError;

/// Trait for materializing a document tree from an external representation.
///
/// Implementations convert one serialized tree shape into arena-allocated
/// nodes ready for traversal.
///
/// # Example
///
/// ```rust,ignore
/// use layertext_source::TreeSource;
/// use layertext_tree::TreeArena;
///
/// struct MySource;
///
/// impl TreeSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["mytree"]
///     }
///
///     fn load<'a>(
///         &self,
///         arena: &'a TreeArena,
///         input: &str,
///     ) -> Result<Node<'a>, SourceError> {
///         // Conversion implementation
///         todo!()
///     }
/// }
/// ```
pub trait TreeSource {
    /// Returns the name of this source.
    fn name(&self) -> &str;

    /// Returns the file extensions this source handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["json"]`).
    fn extensions(&self) -> &[&str];

    /// Materializes the document tree described by `input`.
    ///
    /// # Arguments
    ///
    /// * `arena` - The arena allocator for document nodes
    /// * `input` - The serialized tree
    ///
    /// # Returns
    ///
    /// The document root, or an error if the input is malformed.
    fn load<'a>(&self, arena: &'a TreeArena, input: &str) -> Result<Node<'a>, SourceError>;

    /// Returns true if this source can handle the given file extension.
    fn can_load(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
