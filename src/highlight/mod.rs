//! Lexical highlighting for snippet code.
//!
//! Source text is tokenized once against a priority-ordered rule set, then
//! rendered. Escaping happens only in the renderer, so rules always match
//! against the original text and never against inserted markup.

pub mod colors;
pub mod java;
pub mod render;
pub mod rules;

use once_cell::sync::Lazy;
use rules::RuleSet;
use tracing::error;

pub use render::{escape_html, render_ansi, render_html};

static JAVA_RULES: Lazy<Option<RuleSet>> = Lazy::new(|| match java::rules() {
    Ok(rules) => Some(rules),
    Err(e) => {
        error!(error = %e, "java highlighting rules failed to compile");
        None
    }
});

/// Lexical class of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Comment,
    String,
    Number,
    Keyword,
    DataType,
    ClassName,
    Method,
}

impl Category {
    /// Class attribute used in rendered markup.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::DataType => "datatype",
            Category::ClassName => "class",
            Category::Method => "method",
        }
    }
}

/// A categorized byte range of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
    /// Anything without a grammar; rendered as escaped text.
    Plain,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("java") {
            Language::Java
        } else {
            Language::Plain
        }
    }

    fn rules(self) -> Option<&'static RuleSet> {
        match self {
            Language::Java => (*JAVA_RULES).as_ref(),
            Language::Plain => None,
        }
    }
}

pub fn tokenize(source: &str, language: &str) -> Vec<Token> {
    Language::from_tag(language)
        .rules()
        .map(|rules| rules.tokenize(source))
        .unwrap_or_default()
}

/// Returns `source` as escaped markup with `<span class="…">` around each token.
pub fn highlight(source: &str, language: &str) -> String {
    render_html(source, &tokenize(source, language))
}

/// Same tokens as [`highlight`], colored for a terminal.
pub fn highlight_ansi(source: &str, language: &str) -> String {
    render_ansi(source, &tokenize(source, language))
}
