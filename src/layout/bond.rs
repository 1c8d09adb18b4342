//! Running-bond row layout with randomized per-row stagger
//!
//! Rows are laid left to right from the current row start. After each row the
//! start shifts right by a random percentage of the tile length and wraps back
//! by one tile length whenever it passes the canvas origin, so every row
//! begins at or left of `x = 0`.

use crate::io::configuration::{OFFSET_JITTER_THRESHOLD, TextureConfig};
use crate::io::error::{Result, TextureError};
use crate::layout::canvas::CanvasDimensions;
use crate::math::TileMetrics;
use rand::Rng;

/// Axis-aligned rectangle in fractional pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

/// One tile to draw: where, and with which face of the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Target rectangle on the canvas
    pub rect: TileRect,
    /// Index into the face pool
    pub face: usize,
}

/// Position of the row currently being laid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowState {
    /// Top edge of the row
    pub y: f64,
    /// Left edge of the first tile in the row, within `(-tile_length_px, 0]`
    pub start_x: f64,
}

/// Lazy sequence of tile placements covering the canvas
///
/// Draws from `rng` in a fixed order (one face index per tile, then one offset
/// per row), so a seeded generator reproduces the same layout.
pub struct RunningBond<'r, R: Rng + ?Sized> {
    metrics: TileMetrics,
    canvas_width: f64,
    canvas_height: f64,
    offset_min: f64,
    offset_max: f64,
    face_count: usize,
    row: RowState,
    next_x: f64,
    rows_completed: usize,
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> RunningBond<'r, R> {
    /// Start a layout at the canvas origin
    ///
    /// # Errors
    ///
    /// Returns an error if `face_count` is zero
    pub fn new(
        config: &TextureConfig,
        canvas: &CanvasDimensions,
        face_count: usize,
        rng: &'r mut R,
    ) -> Result<Self> {
        if face_count == 0 {
            return Err(TextureError::EmptyFacePool);
        }

        Ok(Self {
            metrics: canvas.metrics,
            canvas_width: f64::from(canvas.width_px),
            canvas_height: f64::from(canvas.height_px),
            offset_min: config.offset_min,
            offset_max: config.offset_max,
            face_count,
            row: RowState {
                y: 0.0,
                start_x: 0.0,
            },
            next_x: 0.0,
            rows_completed: 0,
            rng,
        })
    }

    /// Row currently being laid
    pub const fn row_state(&self) -> RowState {
        self.row
    }

    /// Number of finished rows
    pub const fn rows_completed(&self) -> usize {
        self.rows_completed
    }

    /// Stagger for the next row in percent of tile length
    fn next_offset(&mut self) -> f64 {
        if self.offset_max - self.offset_min > OFFSET_JITTER_THRESHOLD {
            self.rng.random_range(self.offset_min..=self.offset_max)
        } else {
            self.offset_min
        }
    }

    fn advance_row(&mut self) {
        let tile_length = self.metrics.tile_length_px;

        self.row.y += self.metrics.row_step();
        let offset = self.next_offset();
        self.row.start_x += tile_length * offset / 100.0;
        if self.row.start_x > 0.0 {
            self.row.start_x -= tile_length;
        }

        self.next_x = self.row.start_x;
        self.rows_completed += 1;
    }
}

impl<R: Rng + ?Sized> Iterator for RunningBond<'_, R> {
    type Item = TilePlacement;

    fn next(&mut self) -> Option<Self::Item> {
        // Each row emits at least one tile because start_x <= 0 < canvas_width
        while self.row.y < self.canvas_height {
            if self.next_x < self.canvas_width {
                let placement = TilePlacement {
                    rect: TileRect {
                        x: self.next_x,
                        y: self.row.y,
                        width: self.metrics.tile_length_px,
                        height: self.metrics.tile_width_px,
                    },
                    face: self.rng.random_range(0..self.face_count),
                };
                self.next_x += self.metrics.column_step();
                return Some(placement);
            }
            self.advance_row();
        }
        None
    }
}

/// Lay out tiles over the canvas in staggered rows
///
/// # Errors
///
/// Returns an error if `face_count` is zero; nothing is emitted in that case
pub fn layout_tiles<'r, R: Rng + ?Sized>(
    config: &TextureConfig,
    canvas: &CanvasDimensions,
    face_count: usize,
    rng: &'r mut R,
) -> Result<RunningBond<'r, R>> {
    RunningBond::new(config, canvas, face_count, rng)
}
