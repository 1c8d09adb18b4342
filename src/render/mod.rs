//! Rasterization of tile placements into the output buffers

/// Gap color parsing
pub mod color;
/// Color and bump compositing
pub mod compositor;

pub use compositor::{BUMP_HIGH, BUMP_LOW, Texture, render};
