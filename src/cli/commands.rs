use crate::actions::{self, Action, ActionOutcome};
use crate::cli::cards;
use crate::highlight;
use crate::models::{
    IndexError, PersistenceAdapter, Snippet, SnippetFields, SnippetStore, StoreError,
    decode_collection,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

fn gutter() -> colored::ColoredString {
    "┃".bright_magenta()
}

/// Reports a store error; persistence failures only warn since the change is kept.
fn report(err: &StoreError) {
    match err {
        StoreError::Persistence(e) => {
            println!(
                "{}  {} {}",
                gutter(),
                "Warning:".bright_yellow(),
                "changes might not survive a reload"
            );
            println!("{}  {}", gutter(), e.to_string().bright_black());
        }
        other => println!("{}  {} {}", gutter(), "Error:".bright_red(), other),
    }
}

fn read_stdin() -> Result<String> {
    let mut code = String::new();
    io::stdin()
        .read_to_string(&mut code)
        .context("Failed to read code from stdin")?;
    Ok(code)
}

/// Lists every snippet as a card
pub fn list_snippets<A>(store: &SnippetStore<A>) {
    if store.is_empty() {
        println!("{}  No snippets saved yet.", gutter());
        return;
    }

    println!("{}  {} snippets:", gutter(), store.len());
    println!("{}", "─".repeat(60).bright_magenta());
    cards::print_cards(&store.list());
}

fn find_snippet<A>(store: &SnippetStore<A>, index: usize) -> Result<&Snippet, StoreError> {
    store.get(index).ok_or_else(|| {
        StoreError::Index(IndexError {
            index,
            len: store.len(),
        })
    })
}

/// Shows a snippet with its code highlighted for the terminal
pub fn show_snippet<A>(store: &SnippetStore<A>, index: usize) {
    let snippet = match find_snippet(store, index) {
        Ok(snippet) => snippet,
        Err(e) => return report(&e),
    };

    println!(
        "{}  {} {}",
        gutter(),
        "SNIPPET".bright_green().bold(),
        snippet.display_title().bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!(
        "{}  {}: {}",
        gutter(),
        "Language".bright_yellow(),
        snippet.display_language()
    );
    println!(
        "{}  {}: {}",
        gutter(),
        "Description".bright_cyan(),
        snippet.display_description()
    );
    println!(
        "{}  {}: {}",
        gutter(),
        "Lines".bright_blue(),
        snippet.get_line_count()
    );
    println!("{}  {}: {}", gutter(), "Index".bright_black(), index);
    println!("{}", "─".repeat(60).bright_magenta());

    if snippet.code.is_empty() {
        println!("{}  {}", gutter(), "No code found.".bright_black());
        return;
    }

    let colored = highlight::highlight_ansi(&snippet.code, &snippet.language);
    for line in colored.lines() {
        println!("{}  {}", gutter(), line);
    }
}

/// Prints the highlighted markup of a snippet's code
pub fn print_markup<A: PersistenceAdapter>(store: &mut SnippetStore<A>, index: usize) {
    match actions::dispatch(store, Action::View(index)) {
        Ok(ActionOutcome::Viewed(view)) => println!("{}", view.markup),
        Ok(_) => {}
        Err(e) => report(&e),
    }
}

/// Creates a snippet from the given fields and code read from stdin
pub fn add_snippet<A: PersistenceAdapter>(
    store: &mut SnippetStore<A>,
    title: &str,
    language: &str,
    description: &str,
) -> Result<()> {
    let code = read_stdin()?;
    let fields = SnippetFields::new(title, code)
        .with_language(language)
        .with_description(description);

    match store.create(fields) {
        Ok(index) => println!(
            "{}  {} saved at index {}",
            gutter(),
            "Snippet".bright_green(),
            index.to_string().bright_yellow()
        ),
        Err(e) => report(&e),
    }
    Ok(())
}

/// Replaces a snippet's code with stdin
pub fn edit_snippet<A: PersistenceAdapter>(store: &mut SnippetStore<A>, index: usize) -> Result<()> {
    if let Err(e) = find_snippet(store, index) {
        report(&e);
        return Ok(());
    }

    let code = read_stdin()?;
    match actions::dispatch(store, Action::Save { index, code }) {
        Ok(_) => println!("{}  Changes saved successfully!", gutter()),
        Err(e) => report(&e),
    }
    Ok(())
}

/// Deletes the snippet at `index`. When only the write fails, the error comes
/// back with the title of the snippet that is already gone from memory.
fn delete_at<A: PersistenceAdapter>(
    store: &mut SnippetStore<A>,
    index: usize,
) -> std::result::Result<Snippet, (StoreError, Option<String>)> {
    let title = store.get(index).map(|s| s.display_title().to_owned());
    store.delete(index).map_err(|e| {
        let removed = if e.is_rejected() { None } else { title };
        (e, removed)
    })
}

pub fn delete_snippet<A: PersistenceAdapter>(store: &mut SnippetStore<A>, index: usize) {
    match delete_at(store, index) {
        Ok(snippet) => println!(
            "{}  \"{}\" deleted successfully.",
            gutter(),
            snippet.display_title()
        ),
        Err((e, removed)) => {
            if let Some(title) = removed {
                println!(
                    "{}  \"{}\" was removed for this session but may reappear after a reload.",
                    gutter(),
                    title
                );
            }
            report(&e);
        }
    }
}

/// Searches titles, languages and descriptions
pub fn search_snippets<A>(store: &SnippetStore<A>, query: &str) {
    let results = store.search(query);

    println!(
        "{}  {} '{}'",
        gutter(),
        "SEARCH RESULTS FOR".bold(),
        query.bright_white()
    );

    if results.is_empty() {
        println!("{}  No snippets found.", gutter());
        return;
    }

    println!(
        "{}  Found {} snippets matching '{}':",
        gutter(),
        results.len(),
        query
    );
    println!("{}", "─".repeat(60).bright_magenta());
    cards::print_cards(&results);
}

pub fn export_snippets<A>(store: &SnippetStore<A>, path: &Path) -> Result<()> {
    let json = store.export_json().context("Failed to serialize snippets")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}  Exported {} snippets to {}",
        gutter(),
        store.len(),
        path.display()
    );
    Ok(())
}

pub fn import_snippets<A: PersistenceAdapter>(store: &mut SnippetStore<A>, path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let snippets = decode_collection(Some(bytes.as_slice()))
        .with_context(|| format!("{} is not a snippet export", path.display()))?;
    let offered = snippets.len();

    match store.import(snippets) {
        Ok(added) => println!(
            "{}  Imported {} of {} snippets",
            gutter(),
            added.to_string().bright_yellow(),
            offered
        ),
        Err(e) => report(&e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemoryStorage, PersistenceError};

    fn store_with(titles: &[&str]) -> SnippetStore<MemoryStorage> {
        let mut store = SnippetStore::load(MemoryStorage::new());
        for title in titles {
            store.create(SnippetFields::new(*title, "int x = 1;")).unwrap();
        }
        store
    }

    #[test]
    fn find_snippet_reports_bounds() {
        let store = store_with(&["a", "b"]);
        assert_eq!(find_snippet(&store, 1).unwrap().title, "b");
        assert!(matches!(
            find_snippet(&store, 2),
            Err(StoreError::Index(IndexError { index: 2, len: 2 }))
        ));
    }

    #[test]
    fn delete_at_returns_removed_snippet() {
        let mut store = store_with(&["a", "b"]);
        let removed = delete_at(&mut store, 0).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_delete_write_names_the_removed_snippet() {
        let store = store_with(&["a", "b"]);
        let mut storage = store.into_adapter();
        storage.set_quota(Some(4));
        let mut store = SnippetStore::load(storage);

        let (err, removed) = delete_at(&mut store, 1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Persistence(PersistenceError::Write { .. })
        ));
        assert_eq!(removed.as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejected_delete_names_nothing() {
        let mut store = store_with(&["a"]);
        let (err, removed) = delete_at(&mut store, 3).unwrap_err();
        assert!(matches!(err, StoreError::Index(_)));
        assert!(removed.is_none());
        assert_eq!(store.len(), 1);
    }
}
