//! snipcard - Local Snippet Manager
//!
//! Stores short code fragments (title, language, code, description) in a
//! single serialized collection and offers:
//! - A snippet store with positional identity and best-effort persistence
//! - A single-pass lexical highlighter producing escaped, span-tagged markup
//! - Case-insensitive search over titles, languages and descriptions
//! - Explicit view/edit/save/delete actions for front ends

pub mod actions;
pub mod cli;
pub mod config;
pub mod highlight;
pub mod logging;
pub mod models;
pub mod search;

pub use actions::{Action, ActionOutcome, SnippetView, dispatch};
pub use config::Config;
pub use highlight::{Category, Language, Token, highlight, tokenize};
pub use models::{
    AdapterError, DeserializationError, FileStorage, IndexError, MemoryStorage,
    PersistenceAdapter, PersistenceError, STORAGE_KEY, Snippet, SnippetEntry, SnippetFields,
    SnippetStore, StoreError, ValidationError,
};
pub use search::search;
