//! Mathematical utilities for physical unit handling

/// Millimetre and pixel conversions at a fixed DPI
pub mod units;

pub use units::{TileMetrics, Units};
