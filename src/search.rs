use crate::models::{Snippet, SnippetEntry};

/// Filters snippets by a case-insensitive substring of title, language or description.
///
/// Code is not searched. A blank query returns every snippet. Results keep
/// collection order and carry their original indices.
pub fn search<'a>(snippets: &'a [Snippet], query: &str) -> Vec<SnippetEntry<'a>> {
    let query = query.trim().to_lowercase();

    snippets
        .iter()
        .enumerate()
        .filter(|(_, snippet)| query.is_empty() || matches(snippet, &query))
        .map(|(index, snippet)| SnippetEntry { index, snippet })
        .collect()
}

/// `query` must already be lowercased.
fn matches(snippet: &Snippet, query: &str) -> bool {
    [&snippet.title, &snippet.language, &snippet.description]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(results: &[SnippetEntry<'_>]) -> Vec<usize> {
        results.iter().map(|entry| entry.index).collect()
    }

    #[test]
    fn matches_title_and_description_case_insensitively() {
        let snippets = vec![
            Snippet::new("Foo", "", "", ""),
            Snippet::new("bar", "", "", "contains Foo"),
        ];
        assert_eq!(indices(&search(&snippets, "foo")), vec![0, 1]);
        assert_eq!(indices(&search(&snippets, "FOO")), vec![0, 1]);
    }

    #[test]
    fn matches_language_but_not_code() {
        let snippets = vec![
            Snippet::new("a", "Java", "", ""),
            Snippet::new("b", "python", "class Java {}", ""),
        ];
        assert_eq!(indices(&search(&snippets, "java")), vec![0]);
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let snippets = vec![
            Snippet::new("a", "", "", ""),
            Snippet::new("b", "", "", ""),
            Snippet::new("c", "", "", ""),
        ];
        assert_eq!(indices(&search(&snippets, "")), vec![0, 1, 2]);
        assert_eq!(indices(&search(&snippets, "  \t")), vec![0, 1, 2]);
    }

    #[test]
    fn query_is_trimmed_and_keeps_original_indices() {
        let snippets = vec![
            Snippet::new("alpha", "", "", ""),
            Snippet::new("beta", "", "", ""),
            Snippet::new("alphabet", "", "", ""),
        ];
        let results = search(&snippets, "  ALPHA ");
        assert_eq!(indices(&results), vec![0, 2]);
        assert_eq!(results[1].snippet.title, "alphabet");
    }

    #[test]
    fn no_match_is_empty() {
        let snippets = vec![Snippet::new("a", "java", "foo", "bar")];
        assert!(search(&snippets, "zzz").is_empty());
    }
}
