use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_LANGUAGE: &str = "Unknown";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// A stored code fragment.
///
/// Every field may be empty. Stored payloads written by older front ends
/// omit fields or carry `null`, so both read back as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub language: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub code: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
}

impl Snippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn display_title(&self) -> &str {
        or_default(&self.title, DEFAULT_TITLE)
    }

    pub fn display_language(&self) -> &str {
        or_default(&self.language, DEFAULT_LANGUAGE)
    }

    pub fn display_description(&self) -> &str {
        or_default(&self.description, DEFAULT_DESCRIPTION)
    }

    pub fn get_line_count(&self) -> usize {
        self.code.lines().count()
    }
}

/// Input for creating a snippet. Values are trimmed before they are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFields {
    pub title: String,
    pub language: String,
    pub code: String,
    pub description: String,
}

impl SnippetFields {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True when neither a title nor any code survives trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.code.trim().is_empty()
    }

    pub fn into_snippet(self) -> Snippet {
        Snippet {
            title: self.title.trim().to_string(),
            language: self.language.trim().to_string(),
            code: self.code.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl From<Snippet> for SnippetFields {
    fn from(snippet: Snippet) -> Self {
        Self {
            title: snippet.title,
            language: snippet.language,
            code: snippet.code,
            description: snippet.description,
        }
    }
}

/// A snippet paired with its current positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetEntry<'a> {
    pub index: usize,
    pub snippet: &'a Snippet,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
