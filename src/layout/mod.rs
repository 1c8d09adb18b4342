//! Canvas sizing and tile placement
//!
//! This module contains:
//! - Canvas dimension computation from physical sizes
//! - The running-bond placement sequence

/// Staggered row layout
pub mod bond;
/// Whole-tile canvas sizing
pub mod canvas;

pub use bond::{RowState, RunningBond, TilePlacement, TileRect, layout_tiles};
pub use canvas::{CanvasDimensions, compute_canvas};
