use crate::highlight::{Category, Token};
use regex::Regex;

/// A single regex highlighting rule.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    category: Category,
    capture_group: Option<usize>,
}

impl RegexRule {
    pub fn new(pattern: &str, category: Category) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            category,
            capture_group: None,
        })
    }

    /// Tag only a capture group of each match; the rest of the match stays plain.
    ///
    /// Example (call site):
    /// - pattern: `\b([A-Za-z_]\w*)\s*\(`
    /// - capture_group: `1` (the name)
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Leftmost span this rule tags at or after `start`.
    fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        match self.capture_group {
            Some(group) => self
                .regex
                .captures_at(text, start)
                .and_then(|caps| caps.get(group))
                .map(|m| (m.start(), m.end())),
            None => self.regex.find_at(text, start).map(|m| (m.start(), m.end())),
        }
    }
}

/// Priority-ordered rule set scanned over the source in one pass.
///
/// At every step the leftmost match across all rules becomes the next token;
/// a tie on the start position goes to the rule listed first. Tokens never
/// overlap and are always taken from the original text, so no rule can see
/// another rule's output.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RegexRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RegexRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RegexRule] {
        &self.rules
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        // Per rule: not looked up yet, exhausted, or the next candidate span.
        let mut pending: Vec<Option<Option<(usize, usize)>>> = vec![None; self.rules.len()];
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let mut best: Option<(usize, (usize, usize))> = None;

            for (i, rule) in self.rules.iter().enumerate() {
                let stale = match pending[i] {
                    None => true,
                    Some(Some((start, _))) => start < pos,
                    Some(None) => false,
                };
                if stale {
                    pending[i] = Some(rule.find_at(text, pos));
                }

                if let Some(Some(span)) = pending[i] {
                    if span.1 > span.0 && best.is_none_or(|(_, b)| span.0 < b.0) {
                        best = Some((i, span));
                    }
                }
            }

            let Some((i, (start, end))) = best else {
                break;
            };
            tokens.push(Token {
                start,
                end,
                category: self.rules[i].category,
            });
            pos = end;
        }

        tokens
    }
}
