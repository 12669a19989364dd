use snipcard::highlight::{escape_html, highlight, tokenize};
use snipcard::{Category, MemoryStorage, SnippetFields, SnippetStore, search};

fn span(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{text}</span>")
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(highlight("", "java"), "");
}

#[test]
fn literal_content_is_never_altered() {
    let sources = [
        "public class Main { public static void main(String[] args) { int n = 42; } }",
        "/* a < b */ if (x > 0 && y < 1) { s = \"<b>&\"; } // done",
        "char c = '\\''; double d = 3.14; Foo.bar(baz);",
    ];
    for source in sources {
        let markup = highlight(source, "java");
        let stripped = regex::Regex::new(r#"<span class="[a-z]+">|</span>"#)
            .unwrap()
            .replace_all(&markup, "");
        assert_eq!(stripped, escape_html(source), "source: {source}");
    }
}

#[test]
fn keyword_inside_identifier_is_not_tagged() {
    let markup = highlight("intValue = 1;", "java");
    assert!(!markup.contains(&span("keyword", "int")));
    assert!(markup.starts_with("intValue"));
}

#[test]
fn comment_marker_inside_string_stays_a_string() {
    let markup = highlight(r#""// not a comment" // real comment"#, "java");
    assert_eq!(
        markup,
        format!(
            "{} {}",
            span("string", "\"// not a comment\""),
            span("comment", "// real comment")
        )
    );
}

#[test]
fn quotes_inside_comment_stay_a_comment() {
    let markup = highlight("// say \"hi\" to int\nint", "java");
    assert_eq!(
        markup,
        format!(
            "{}\n{}",
            span("comment", "// say \"hi\" to int"),
            span("keyword", "int")
        )
    );
}

#[test]
fn markup_characters_are_escaped_inside_tokens() {
    let markup = highlight("String s = \"<a&b>\"; // x < y", "java");
    assert_eq!(
        markup,
        format!(
            "{} s = {}; {}",
            span("datatype", "String"),
            span("string", "\"&lt;a&amp;b&gt;\""),
            span("comment", "// x &lt; y")
        )
    );
}

#[test]
fn typical_statement_gets_every_category() {
    let source = "List<String> xs = new ArrayList<>(); xs.add(\"a\"); /* n */ Math.max(1, 2.5);";
    let categories: Vec<Category> = tokenize(source, "java").iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::ClassName,
            Category::DataType,
            Category::Keyword,
            Category::ClassName,
            Category::Method,
            Category::String,
            Category::Comment,
            Category::DataType,
            Category::Method,
            Category::Number,
            Category::Number,
        ]
    );
}

#[test]
fn unsupported_language_only_escapes() {
    assert_eq!(highlight("fn main() { a < b }", "rust"), "fn main() { a &lt; b }");
}

#[test]
fn search_matches_title_or_description_with_original_indices() {
    let mut store = SnippetStore::load(MemoryStorage::new());
    store.create(SnippetFields::new("Foo", "")).unwrap();
    store
        .create(SnippetFields::new("bar", "").with_description("contains Foo"))
        .unwrap();
    store.create(SnippetFields::new("baz", "Foo code")).unwrap();

    let results = store.search("foo");
    let indices: Vec<_> = results.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1]);

    let direct: Vec<_> = search(store.snippets(), "FOO").iter().map(|e| e.index).collect();
    assert_eq!(direct, indices);
}

#[test]
fn word_rules_use_ascii_boundaries() {
    assert_eq!(
        highlight("int x = ٣;", "java"),
        format!("{} x = ٣;", span("keyword", "int"))
    );
    assert_eq!(
        highlight("éFoo é1", "java"),
        format!("é{} é{}", span("class", "Foo"), span("number", "1"))
    );
}
