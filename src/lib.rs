//! Tile texture synthesis from photographed tile faces
//!
//! Source faces are normalized into a landscape pool, laid out in
//! running-bond rows with randomized stagger, and composited into a color
//! texture plus a matching bump map.

#![forbid(unsafe_code)]

/// Face image loading and the face pool
pub mod faces;
/// Input/output operations, configuration and error handling
pub mod io;
/// Canvas sizing and tile placement
pub mod layout;
/// Physical unit conversion
pub mod math;
/// End-to-end synthesis pipeline
pub mod pipeline;
/// Compositing into color and bump buffers
pub mod render;

pub use io::error::{ErrorKind, Result, TextureError};
