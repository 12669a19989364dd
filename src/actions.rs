//! Explicit user actions dispatched against a [`SnippetStore`].
//!
//! Front ends translate their own events (clicks, key presses, CLI commands)
//! into an [`Action`] carrying the positional index it targets, rather than
//! storing indices in rendered output and parsing them back.

use crate::highlight;
use crate::models::{IndexError, PersistenceAdapter, Snippet, SnippetStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    View(usize),
    Edit(usize),
    Save { index: usize, code: String },
    Delete(usize),
}

/// Display-ready copy of a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetView {
    pub index: usize,
    pub title: String,
    pub language: String,
    pub description: String,
    /// Escaped, span-tagged markup of the code.
    pub markup: String,
}

impl SnippetView {
    pub fn from_snippet(index: usize, snippet: &Snippet) -> Self {
        Self {
            index,
            title: snippet.display_title().to_string(),
            language: snippet.display_language().to_string(),
            description: snippet.display_description().to_string(),
            markup: highlight::highlight(&snippet.code, &snippet.language),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Viewed(SnippetView),
    /// Copy of the code for an edit buffer; not a live reference.
    Editing { index: usize, code: String },
    Saved(usize),
    Deleted(Snippet),
}

pub fn dispatch<A: PersistenceAdapter>(
    store: &mut SnippetStore<A>,
    action: Action,
) -> Result<ActionOutcome, StoreError> {
    match action {
        Action::View(index) => {
            let snippet = lookup(store, index)?;
            Ok(ActionOutcome::Viewed(SnippetView::from_snippet(index, snippet)))
        }
        Action::Edit(index) => {
            let snippet = lookup(store, index)?;
            Ok(ActionOutcome::Editing {
                index,
                code: snippet.code.clone(),
            })
        }
        Action::Save { index, code } => {
            store.update_code(index, code)?;
            Ok(ActionOutcome::Saved(index))
        }
        Action::Delete(index) => store.delete(index).map(ActionOutcome::Deleted),
    }
}

fn lookup<A>(store: &SnippetStore<A>, index: usize) -> Result<&Snippet, IndexError> {
    store.get(index).ok_or(IndexError {
        index,
        len: store.len(),
    })
}
