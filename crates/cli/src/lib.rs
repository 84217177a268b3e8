//! `stockkeep` command-line front end.

pub mod args;
pub mod commands;
pub mod config;

use std::io::Write;

use anyhow::Context;
use clap::CommandFactory;

pub use args::{Cli, Command};
pub use commands::{Outcome, execute};
pub use config::Config;

/// Run one parsed invocation against the configured catalog.
///
/// Without a subcommand the help text is written to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<Outcome> {
    let config = Config::from_cli(&cli);
    let Some(command) = cli.command else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(Outcome::Completed);
    };

    let mut catalog = config
        .open_catalog()
        .with_context(|| format!("failed to open catalog {}", config.data_file.display()))?;
    let renderer = config.renderer();

    tracing::debug!(
        data_file = %config.data_file.display(),
        items = catalog.len(),
        "catalog opened"
    );
    execute(command, &mut catalog, &renderer, out)
}
