//! Canvas sizing: the smallest whole-tile canvas covering the requested physical size

use crate::io::configuration::{MAX_JPEG_DIMENSION_PX, TextureConfig};
use crate::io::error::{Result, computation_error, invalid_config};
use crate::math::TileMetrics;
use num_traits::ToPrimitive;

/// Pixel and millimetre size of the output canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasDimensions {
    /// Tile pitch and unit conversion the canvas was derived from
    pub metrics: TileMetrics,
    /// Whole tile + gap units along the horizontal axis
    pub x_tiles: u32,
    /// Whole tile + gap units along the vertical axis
    pub y_tiles: u32,
    /// Canvas width in pixels
    pub width_px: u32,
    /// Canvas height in pixels
    pub height_px: u32,
    /// Canvas width rounded to whole millimetres
    pub width_mm: u32,
    /// Canvas height rounded to whole millimetres
    pub height_mm: u32,
}

impl CanvasDimensions {
    /// Compute the canvas for a configuration
    ///
    /// The requested output size is a minimum: tile counts are rounded up so
    /// each axis holds a whole number of tile + gap units.
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI or a tile dimension is not positive, or the
    /// resulting canvas does not fit in `u32` pixels
    pub fn compute(config: &TextureConfig) -> Result<Self> {
        let metrics = TileMetrics::from_config(config)?;

        let x_tiles = whole_units(
            config.output_width_mm,
            config.tile_length_mm.saturating_add(config.gap_width_mm),
        );
        let y_tiles = whole_units(
            config.output_height_mm,
            config.tile_width_mm.saturating_add(config.gap_width_mm),
        );

        let width_px = round_to_u32("canvas width", f64::from(x_tiles) * metrics.column_step())?;
        let height_px = round_to_u32("canvas height", f64::from(y_tiles) * metrics.row_step())?;
        let width_mm = round_to_u32("canvas width", metrics.units.px_to_mm(f64::from(width_px)))?;
        let height_mm = round_to_u32("canvas height", metrics.units.px_to_mm(f64::from(height_px)))?;

        Ok(Self {
            metrics,
            x_tiles,
            y_tiles,
            width_px,
            height_px,
            width_mm,
            height_mm,
        })
    }

    /// Reject canvases the exporter could not encode
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the output side that exceeds
    /// [`MAX_JPEG_DIMENSION_PX`]
    pub fn ensure_exportable(&self) -> Result<()> {
        for (field, px, mm) in [
            ("OutputWidth", self.width_px, self.width_mm),
            ("OutputHeight", self.height_px, self.height_mm),
        ] {
            if px > MAX_JPEG_DIMENSION_PX {
                return Err(invalid_config(
                    field,
                    &mm,
                    &format!("canvas side of {px} px exceeds the JPEG limit of {MAX_JPEG_DIMENSION_PX} px"),
                ));
            }
        }
        Ok(())
    }

    /// Total pixel count of one buffer
    pub fn area(&self) -> u64 {
        u64::from(self.width_px) * u64::from(self.height_px)
    }
}

/// Compute the canvas for a configuration
///
/// # Errors
///
/// See [`CanvasDimensions::compute`]
pub fn compute_canvas(config: &TextureConfig) -> Result<CanvasDimensions> {
    CanvasDimensions::compute(config)
}

// Callers guarantee a positive unit
const fn whole_units(length_mm: u32, unit_mm: u32) -> u32 {
    length_mm.div_ceil(unit_mm)
}

fn round_to_u32(operation: &'static str, value: f64) -> Result<u32> {
    value
        .round()
        .to_u32()
        .ok_or_else(|| computation_error(operation, &format!("{value} does not fit in u32")))
}
