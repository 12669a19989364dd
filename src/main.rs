//! snipcard - Local Snippet Manager
//!
//! Command-line front end over the snippet store, highlighter and search.
//! Run without arguments for the list of commands.

use color_eyre::Result;
use snipcard::{Config, cli, logging};

/// Application entry point and initialization
/// Loads configuration, installs error reporting and logging, then hands the
/// remaining arguments to the command dispatcher.
fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load().map_err(|e| color_eyre::eyre::eyre!("{e:#}"))?;
    logging::init(&config.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::execute_cli(&args, &config).map_err(|e| color_eyre::eyre::eyre!("{e:#}"))?;

    Ok(())
}
