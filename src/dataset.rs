use anyhow::Result;

/// A `DataSource` streams items (here, image file paths) lazily.
///
/// Sources yield `Result` items so that enumeration errors surface at the
/// point they occur rather than at stream construction. Implementations
/// must be `Send` so streams can be handed across threads.
pub trait DataSource<T> {
    /// Creates an iterator over all items in the source.
    fn stream(&self) -> Result<Box<dyn Iterator<Item = Result<T>> + Send>>;
}
