//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use keyforge_key::GeneratorOptions;
use std::path::PathBuf;

/// Largest `--count` accepted by `keyforge gen`
pub const MAX_COUNT: usize = 10_000;

/// Generate random passwords, keys and identifiers
#[derive(Debug, Parser)]
#[command(name = "keyforge")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON config file (default: $XDG_CONFIG_HOME/keyforge/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List available generators with their defaults
    List,

    /// Generate values with one generator
    ///
    /// Options are layered: built-in defaults, then the config file, then
    /// flags given here.
    ///
    /// Example usage:
    ///   keyforge gen password --length 24 --no-symbols
    ///   keyforge gen api-key --prefix sk_live
    ///   keyforge gen uuid --format v1 --count 5
    Gen(GenArgs),

    /// Generate one value from every generator with its defaults
    Quick,
}

/// Arguments for `keyforge gen`
#[derive(Debug, Clone, Args)]
pub struct GenArgs {
    /// Generator id (see `keyforge list`)
    pub generator: String,

    /// Output length (bytes for jwt-secret)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// API key prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Format: v1/v4, alphanumeric/letters/numbers/hex, colon/hyphen/dot
    #[arg(short, long)]
    pub format: Option<String>,

    /// Leave symbols out of passwords
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave digits out of passwords
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave upper-case letters out of passwords
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave lower-case letters out of passwords
    #[arg(long)]
    pub no_lowercase: bool,

    /// Number of values to generate (at most 10000)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible, non-secure output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the estimated entropy after the values
    #[arg(long)]
    pub show_strength: bool,
}

impl GenArgs {
    /// Options set explicitly on the command line
    #[must_use]
    pub fn overrides(&self) -> GeneratorOptions {
        let disabled = |flag: bool| flag.then_some(false);
        GeneratorOptions {
            length: self.length,
            include_symbols: disabled(self.no_symbols),
            include_numbers: disabled(self.no_numbers),
            include_uppercase: disabled(self.no_uppercase),
            include_lowercase: disabled(self.no_lowercase),
            prefix: self.prefix.clone(),
            format: self.format.clone(),
        }
    }
}
