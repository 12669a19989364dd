//! CLI Module for snipcard
//! Parses sub-commands and dispatches them against the snippet store. All
//! output goes to stdout with the same `┃` gutter used throughout.

pub mod cards;
pub mod commands;

use crate::config::Config;
use crate::models::{FileStorage, SnippetStore};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// Opens the file-backed store described by `config`.
pub fn open_store(config: &Config) -> Result<SnippetStore<FileStorage>> {
    let storage = match &config.data_dir {
        Some(dir) => FileStorage::at(dir)?,
        None => FileStorage::new()?,
    }
    .with_quota(config.quota_bytes);
    debug!(data_dir = %storage.data_dir().display(), key = %config.storage_key, "opening snippet store");

    let store = SnippetStore::load_with_key(storage, config.storage_key.as_str());
    if store.load_warning().is_some() {
        println!(
            "{}  {} stored snippets were unreadable, starting with an empty collection",
            "┃".bright_magenta(),
            "Warning:".bright_yellow()
        );
    }
    Ok(store)
}

fn parse_index(arg: Option<&String>, usage: &str) -> Option<usize> {
    let parsed = arg.and_then(|raw| raw.trim().parse::<usize>().ok());
    if parsed.is_none() {
        println!(
            "{}  Error: Missing or invalid snippet index",
            "┃".bright_magenta()
        );
        println!("{}  Usage: snipcard {}", "┃".bright_magenta(), usage);
    }
    parsed
}

fn arg_or_empty(args: &[String], i: usize) -> &str {
    args.get(i).map(String::as_str).unwrap_or("")
}

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String], config: &Config) -> Result<()> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "list" | "ls" => {
            let store = open_store(config)?;
            commands::list_snippets(&store);
        }
        "show" | "view" | "cat" => {
            if let Some(index) = parse_index(args.get(1), "show <INDEX>") {
                let store = open_store(config)?;
                commands::show_snippet(&store, index);
            }
        }
        "html" => {
            if let Some(index) = parse_index(args.get(1), "html <INDEX>") {
                let mut store = open_store(config)?;
                commands::print_markup(&mut store, index);
            }
        }
        "add" | "new" => {
            let mut store = open_store(config)?;
            commands::add_snippet(
                &mut store,
                arg_or_empty(args, 1),
                arg_or_empty(args, 2),
                arg_or_empty(args, 3),
            )?;
        }
        "edit" => {
            if let Some(index) = parse_index(args.get(1), "edit <INDEX> < code") {
                let mut store = open_store(config)?;
                commands::edit_snippet(&mut store, index)?;
            }
        }
        "delete" | "rm" => {
            if let Some(index) = parse_index(args.get(1), "delete <INDEX>") {
                let mut store = open_store(config)?;
                commands::delete_snippet(&mut store, index);
            }
        }
        "search" | "find" => {
            let store = open_store(config)?;
            commands::search_snippets(&store, &args[1..].join(" "));
        }
        "export" => match args.get(1) {
            Some(path) => {
                let store = open_store(config)?;
                commands::export_snippets(&store, Path::new(path))?;
            }
            None => println!("{}  Usage: snipcard export <PATH>", "┃".bright_magenta()),
        },
        "import" => match args.get(1) {
            Some(path) => {
                let mut store = open_store(config)?;
                commands::import_snippets(&mut store, Path::new(path))?;
            }
            None => println!("{}  Usage: snipcard import <PATH>", "┃".bright_magenta()),
        },
        "help" | "--help" | "-h" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPCARD - SNIPPET MANAGER".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipcard [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let entries = [
        ("list, ls", "List all snippets as cards"),
        ("show, view <INDEX>", "Display a snippet with highlighted code"),
        ("html <INDEX>", "Print the highlighted markup of a snippet"),
        ("add <TITLE> [LANG] [DESC]", "Create a snippet, code read from stdin"),
        ("edit <INDEX>", "Replace a snippet's code with stdin"),
        ("delete, rm <INDEX>", "Delete a snippet (later indices shift down)"),
        ("search, find <QUERY>", "Search titles, languages and descriptions"),
        ("export <PATH>", "Write all snippets to a JSON file"),
        ("import <PATH>", "Append snippets from a JSON export"),
        ("help", "Display this help message"),
    ];
    for (usage, about) in entries {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            usage.bright_white(),
            about
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Indices change after a delete; run `snipcard list` to refresh them",
        "┃".bright_magenta()
    );
}
