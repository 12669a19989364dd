use crate::models::SnippetEntry;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 32;

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{text}{}", " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Prints one card per entry, labelled with its positional index.
pub fn print_cards(entries: &[SnippetEntry<'_>]) {
    for (i, entry) in entries.iter().enumerate() {
        let snippet = entry.snippet;
        let title = fit_width(snippet.display_title(), TITLE_WIDTH);

        println!(
            "{}  {} {} {}",
            "┃".bright_magenta(),
            format!("[{}]", entry.index).bright_yellow(),
            title.bright_white().bold(),
            snippet.display_language().bright_green()
        );
        println!(
            "{}      {}",
            "┃".bright_magenta(),
            snippet.display_description().bright_black()
        );

        if i < entries.len() - 1 {
            println!(
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_text() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("", 2), "  ");
    }

    #[test]
    fn truncates_long_text_with_ellipsis() {
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn counts_wide_characters_as_two_columns() {
        let fitted = fit_width("日本語テキスト", 6);
        assert_eq!(fitted, "日本… ");
        assert_eq!(fitted.width(), 6);
    }
}
