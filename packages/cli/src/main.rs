//! Main entry point for the keyforge CLI

use clap::Parser;
use keyforge_cli::Cli;
use keyforge_common::LoggingTransformer;
use std::process::ExitCode;

fn main() -> ExitCode {
    LoggingTransformer::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match keyforge_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
