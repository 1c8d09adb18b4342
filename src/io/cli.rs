//! Command-line interface and run orchestration

use crate::io::configuration::TextureConfig;
use crate::io::error::Result;
use crate::io::image::{ExportedFiles, export_texture};
use crate::io::progress::RenderProgress;
use crate::pipeline::synthesize;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "texture-generator")]
#[command(
    author,
    version,
    about = "Generate a staggered tile texture and bump map from tile face photos"
)]
/// Command-line arguments for the texture generator
pub struct Cli {
    /// JSON configuration document
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Random seed for reproducible layouts (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Random generator for this run
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Runs one generation: load configuration, synthesize, export
pub struct TextureGenerator {
    cli: Cli,
    progress: RenderProgress,
}

impl TextureGenerator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = RenderProgress::for_quiet(cli.quiet);
        Self { cli, progress }
    }

    /// Execute the full run and return the written files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, synthesis or export fails;
    /// no file is written unless both buffers were rendered
    pub fn run(&self) -> Result<ExportedFiles> {
        let start_time = Instant::now();

        let config = TextureConfig::load(&self.cli.config)?;
        info!("Using configuration:\n{config:#?}");

        let mut rng = self.cli.rng();
        let synthesis = synthesize(&config, &mut rng, &self.progress)?;
        let files = export_texture(&synthesis.texture, &synthesis.canvas, &config.output_filename)?;

        info!(elapsed = ?start_time.elapsed(), "All done");
        Ok(files)
    }
}
