//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "texture_generator=info";
/// Directive used with `--quiet` when `RUST_LOG` is unset
pub const QUIET_DIRECTIVE: &str = "texture_generator=warn";

/// Filter from `RUST_LOG`, falling back to the default for the verbosity
pub fn build_filter(quiet: bool) -> EnvFilter {
    let fallback = if quiet {
        QUIET_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logging(quiet: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(error) = installed {
        tracing::debug!("Keeping existing subscriber: {error}");
    }
}
