//! Java grammar: comments, strings, numbers, keywords, common library types,
//! capitalized class names and call sites.

use crate::highlight::Category;
use crate::highlight::rules::{RegexRule, RuleSet};

pub const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
];

pub const TYPES: &[&str] = &[
    "String",
    "Integer",
    "Double",
    "Float",
    "Character",
    "Boolean",
    "Object",
    "System",
    "Math",
    "Thread",
];

/// ASCII word boundary. Non-ASCII letters and digits count as separators.
const B: &str = r"(?-u:\b)";

fn word_set(words: &[&str]) -> String {
    format!(r"{B}(?:{}){B}", words.join("|"))
}

/// Rules in priority order.
pub fn rules() -> Result<RuleSet, regex::Error> {
    Ok(RuleSet::new(vec![
        RegexRule::new(r"(?s)/\*.*?\*/", Category::Comment)?,
        RegexRule::new(r"//.*", Category::Comment)?,
        RegexRule::new(r#""(?:\\.|[^"\\])*""#, Category::String)?,
        RegexRule::new(r"'(?:\\.|[^'\\])*'", Category::String)?,
        RegexRule::new(r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)", Category::Number)?,
        RegexRule::new(&word_set(KEYWORDS), Category::Keyword)?,
        RegexRule::new(&word_set(TYPES), Category::DataType)?,
        RegexRule::new(r"(?-u:\b)[A-Z][a-zA-Z0-9_]*(?-u:\b)", Category::ClassName)?,
        RegexRule::new(r"(?-u:\b)([a-zA-Z_][a-zA-Z0-9_]*)\s*\(", Category::Method)?.with_capture_group(1),
    ]))
}
