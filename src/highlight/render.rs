use crate::highlight::colors::RosePine;
use crate::highlight::{Category, Token};
use colored::{Color, Colorize};

/// Escapes `&`, `<` and `>` so `text` can be placed inside element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Renders `source` as escaped markup, wrapping each token in a category span.
///
/// `tokens` must be sorted, non-overlapping byte ranges of `source`.
pub fn render_html(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() + tokens.len() * 32);
    let mut cursor = 0;

    for token in tokens {
        push_escaped(&mut out, &source[cursor..token.start]);
        out.push_str("<span class=\"");
        out.push_str(token.category.css_class());
        out.push_str("\">");
        push_escaped(&mut out, &source[token.start..token.end]);
        out.push_str("</span>");
        cursor = token.end;
    }
    push_escaped(&mut out, &source[cursor..]);

    out
}

fn terminal_color(category: Category) -> Color {
    match category {
        Category::Comment => RosePine::MUTED,
        Category::String => RosePine::GOLD,
        Category::Number => RosePine::ROSE,
        Category::Keyword => RosePine::PINE,
        Category::DataType => RosePine::FOAM,
        Category::ClassName => RosePine::IRIS,
        Category::Method => RosePine::LOVE,
    }
}

/// Colors each line separately so line-based output keeps the color.
fn push_colored(out: &mut String, text: &str, color: Color, bold: bool) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.is_empty() {
            continue;
        }
        let painted = line.color(color);
        let painted = if bold { painted.bold() } else { painted };
        out.push_str(&painted.to_string());
    }
}

/// Renders `source` with terminal colors instead of markup.
pub fn render_ansi(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = 0;

    for token in tokens {
        push_colored(&mut out, &source[cursor..token.start], RosePine::TEXT, false);
        push_colored(
            &mut out,
            &source[token.start..token.end],
            terminal_color(token.category),
            token.category == Category::Keyword,
        );
        cursor = token.end;
    }
    push_colored(&mut out, &source[cursor..], RosePine::TEXT, false);

    out
}
