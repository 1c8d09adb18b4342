//! CLI entry point for the tile texture generator

use clap::Parser;
use std::process::ExitCode;
use texture_generator::io::cli::{Cli, TextureGenerator};
use texture_generator::io::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match TextureGenerator::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
