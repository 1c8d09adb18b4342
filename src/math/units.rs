//! Millimetre to pixel conversion and the per-run tile metrics

use crate::io::configuration::TextureConfig;
use crate::io::error::{Result, invalid_config};

/// Millimetres in one inch
pub const MM_PER_INCH: f64 = 25.4;

/// Converts physical millimetre measurements to pixels for a fixed DPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    px_per_mm: f64,
}

impl Units {
    /// Create a converter for the given output density
    ///
    /// # Errors
    ///
    /// Returns an error if `dpi` is not positive
    pub fn new(dpi: f64) -> Result<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(invalid_config("OutputDPI", &dpi, &"must be positive"));
        }
        Ok(Self {
            px_per_mm: dpi / MM_PER_INCH,
        })
    }

    /// Pixels per millimetre
    pub const fn px_per_mm(&self) -> f64 {
        self.px_per_mm
    }

    /// Millimetres to (fractional) pixels
    pub fn mm_to_px(&self, mm: f64) -> f64 {
        mm * self.px_per_mm
    }

    /// Pixels to millimetres
    pub fn px_to_mm(&self, px: f64) -> f64 {
        px / self.px_per_mm
    }
}

/// Tile geometry in pixels, derived once from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMetrics {
    /// Conversion used to derive the pixel values
    pub units: Units,
    /// Horizontal tile extent (the physical tile length)
    pub tile_length_px: f64,
    /// Vertical tile extent (the physical tile width)
    pub tile_width_px: f64,
    /// Mortar gap between neighbouring tiles
    pub gap_px: f64,
}

impl TileMetrics {
    /// Derive the metrics from tile and gap sizes
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI or a tile dimension is not positive
    pub fn from_config(config: &TextureConfig) -> Result<Self> {
        let units = Units::new(f64::from(config.output_dpi))?;
        if config.tile_length_mm == 0 {
            return Err(invalid_config("TileLength", &0, &"must be positive"));
        }
        if config.tile_width_mm == 0 {
            return Err(invalid_config("TileWidth", &0, &"must be positive"));
        }

        Ok(Self {
            units,
            tile_length_px: units.mm_to_px(f64::from(config.tile_length_mm)),
            tile_width_px: units.mm_to_px(f64::from(config.tile_width_mm)),
            gap_px: units.mm_to_px(f64::from(config.gap_width_mm)),
        })
    }

    /// Horizontal distance from one tile origin to the next
    pub fn column_step(&self) -> f64 {
        self.tile_length_px + self.gap_px
    }

    /// Vertical distance from one row origin to the next
    pub fn row_step(&self) -> f64 {
        self.tile_width_px + self.gap_px
    }
}
