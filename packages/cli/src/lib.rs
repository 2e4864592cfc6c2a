//! Command line front end for the keyforge generators
//!
//! Commands write to any [`std::io::Write`], so they can be driven from
//! tests as well as from `main`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use cli::{Cli, Commands, GenArgs};
pub use config::Config;

use keyforge_common::Result;
use std::io::Write;

/// Load configuration and execute the parsed command
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, options are
/// invalid, or output cannot be written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::List => commands::list::handle_list(cli.json, out),
        Commands::Gen(args) => commands::generate::handle_gen(&config, args, cli.json, out),
        Commands::Quick => commands::quick::handle_quick(&config, cli.json, out),
    }
}
