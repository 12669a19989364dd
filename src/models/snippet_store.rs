use crate::models::{
    DeserializationError, IndexError, PersistenceAdapter, PersistenceError, Snippet, SnippetEntry,
    SnippetFields, StoreError, ValidationError,
};
use tracing::{debug, error, warn};

/// Key the collection is stored under unless configured otherwise.
pub const STORAGE_KEY: &str = "codeSnippets";

/// Decodes a stored collection.
///
/// Absent, empty and `null` payloads all decode to an empty collection.
pub fn decode_collection(bytes: Option<&[u8]>) -> Result<Vec<Snippet>, DeserializationError> {
    let Some(bytes) = bytes else {
        return Ok(Vec::new());
    };

    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let snippets: Option<Vec<Snippet>> = serde_json::from_str(text)?;
    Ok(snippets.unwrap_or_default())
}

pub fn encode_collection(snippets: &[Snippet]) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(snippets).map_err(PersistenceError::Serialize)
}

/// Sole owner of the session's snippet collection.
///
/// Snippets are identified by their position. Deleting index `i` moves every
/// later snippet down by one, so an index captured before a delete refers to
/// whichever snippet now sits at that position. Callers that need a specific
/// snippet after a delete must re-read [`list`](Self::list).
///
/// Every successful mutation is followed by exactly one synchronous write.
#[derive(Debug)]
pub struct SnippetStore<A> {
    adapter: A,
    key: String,
    snippets: Vec<Snippet>,
    load_warning: Option<DeserializationError>,
}

impl<A: PersistenceAdapter> SnippetStore<A> {
    pub fn load(adapter: A) -> Self {
        Self::load_with_key(adapter, STORAGE_KEY)
    }

    /// Builds the store from whatever `adapter` holds under `key`.
    ///
    /// Corrupt data is logged and replaced by an empty collection; the
    /// decoding error stays available through [`load_warning`](Self::load_warning).
    pub fn load_with_key(adapter: A, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = adapter.get(&key);

        let (snippets, load_warning) = match decode_collection(raw.as_deref()) {
            Ok(snippets) => {
                debug!(key = %key, count = snippets.len(), "loaded snippet collection");
                (snippets, None)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to parse stored snippets, starting empty");
                (Vec::new(), Some(e))
            }
        };

        Self {
            adapter,
            key,
            snippets,
            load_warning,
        }
    }

    pub fn load_warning(&self) -> Option<&DeserializationError> {
        self.load_warning.as_ref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Writes the current collection back to the adapter.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let bytes = encode_collection(&self.snippets)?;
        self.adapter.set(&self.key, &bytes).map_err(|source| {
            error!(key = %self.key, error = %source, "failed to write snippets");
            PersistenceError::Write {
                key: self.key.clone(),
                source,
            }
        })
    }

    /// Appends a snippet and returns its index.
    pub fn create(&mut self, fields: SnippetFields) -> Result<usize, StoreError> {
        if fields.is_blank() {
            debug!("rejected snippet without title or code");
            return Err(ValidationError::MissingContent.into());
        }

        self.snippets.push(fields.into_snippet());
        let index = self.snippets.len() - 1;
        debug!(index, "created snippet");

        self.save()?;
        Ok(index)
    }

    /// Replaces only the code of the snippet at `index`.
    pub fn update_code(&mut self, index: usize, code: impl Into<String>) -> Result<(), StoreError> {
        let len = self.snippets.len();
        let snippet = self
            .snippets
            .get_mut(index)
            .ok_or(IndexError { index, len })?;

        snippet.code = code.into();
        debug!(index, "updated snippet code");

        self.save()?;
        Ok(())
    }

    /// Removes the snippet at `index`, shifting later snippets down by one.
    pub fn delete(&mut self, index: usize) -> Result<Snippet, StoreError> {
        let len = self.snippets.len();
        if index >= len {
            return Err(IndexError { index, len }.into());
        }

        let removed = self.snippets.remove(index);
        debug!(index, remaining = self.snippets.len(), "deleted snippet");

        self.save()?;
        Ok(removed)
    }

    /// Appends every snippet that has a title or code; returns how many were added.
    ///
    /// Writes once if anything was added.
    pub fn import(&mut self, snippets: impl IntoIterator<Item = Snippet>) -> Result<usize, StoreError> {
        let before = self.snippets.len();
        self.snippets.extend(
            snippets
                .into_iter()
                .map(SnippetFields::from)
                .filter(|fields| !fields.is_blank())
                .map(SnippetFields::into_snippet),
        );

        let added = self.snippets.len() - before;
        if added == 0 {
            return Ok(0);
        }
        debug!(added, "imported snippets");

        self.save()?;
        Ok(added)
    }
}

impl<A> SnippetStore<A> {
    pub fn list(&self) -> Vec<SnippetEntry<'_>> {
        self.snippets
            .iter()
            .enumerate()
            .map(|(index, snippet)| SnippetEntry { index, snippet })
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Snippet> {
        self.snippets.get(index)
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn search(&self, query: &str) -> Vec<SnippetEntry<'_>> {
        crate::search::search(&self.snippets, query)
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snippets)
    }
}
