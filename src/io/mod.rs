//! Input/output operations and error handling

/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults and configuration document loading
pub mod configuration;
/// Error types
pub mod error;
/// JPEG export of finished textures
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Rendering progress display
pub mod progress;
