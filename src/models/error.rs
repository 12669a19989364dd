use thiserror::Error;

/// Failure reported by a [`PersistenceAdapter`](crate::models::PersistenceAdapter) write.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded { limit: usize, requested: usize },
}

/// Stored bytes under the collection key could not be decoded.
///
/// Recovered by starting from an empty collection; never returned from `load`.
#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("stored collection is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("stored collection is not a valid snippet array: {0}")]
    Format(#[from] serde_json::Error),
}

/// The collection could not be written back.
///
/// The in-memory collection keeps the mutation that triggered the write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: AdapterError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a snippet needs a title or some code")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no snippet at index {index} (collection holds {len})")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Error returned by the mutating [`SnippetStore`](crate::models::SnippetStore) operations.
///
/// | Variant | Raised when | Collection changed |
/// |---------|-------------|--------------------|
/// | `Validation` | `create` got neither title nor code | no |
/// | `Index` | index outside `0..len` | no |
/// | `Persistence` | the write after a mutation failed | yes |
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("change kept in memory but not saved: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// True when the collection was left untouched by the failed call.
    pub fn is_rejected(&self) -> bool {
        !matches!(self, StoreError::Persistence(_))
    }
}
