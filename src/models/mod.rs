pub mod error;
pub mod snippet;
pub mod snippet_store;
pub mod storage;

pub use error::{
    AdapterError, DeserializationError, IndexError, PersistenceError, StoreError, ValidationError,
};
pub use snippet::{Snippet, SnippetEntry, SnippetFields};
pub use snippet_store::{STORAGE_KEY, SnippetStore, decode_collection, encode_collection};
pub use storage::{FileStorage, MemoryStorage, PersistenceAdapter};
