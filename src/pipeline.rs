//! End-to-end synthesis: faces, canvas sizing, layout and rendering

use crate::faces::FacePool;
use crate::io::configuration::TextureConfig;
use crate::io::error::Result;
use crate::io::progress::RenderProgress;
use crate::layout::{CanvasDimensions, layout_tiles};
use crate::render::{Texture, render};
use rand::Rng;
use tracing::info;

/// Finished texture together with the canvas it was rendered on
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Canvas size in pixels and millimetres
    pub canvas: CanvasDimensions,
    /// Color and bump buffers
    pub texture: Texture,
}

/// Load faces from the configured directory and synthesize the texture
///
/// Faces are loaded before any canvas is allocated.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the faces cannot be
/// loaded, or layout and rendering fail
pub fn synthesize<R: Rng + ?Sized>(
    config: &TextureConfig,
    rng: &mut R,
    progress: &RenderProgress,
) -> Result<Synthesis> {
    config.validate()?;
    let pool = FacePool::load(&config.tile_faces_directory, config.allow_face_flip)?;
    synthesize_with_pool(config, &pool, rng, progress)
}

/// Synthesize the texture from an already built face pool
///
/// # Errors
///
/// Returns an error if the canvas cannot be sized or is too large to export,
/// the pool is empty, or a placement cannot be rendered
pub fn synthesize_with_pool<R: Rng + ?Sized>(
    config: &TextureConfig,
    pool: &FacePool,
    rng: &mut R,
    progress: &RenderProgress,
) -> Result<Synthesis> {
    let canvas = CanvasDimensions::compute(config)?;
    canvas.ensure_exportable()?;
    info!("Maximum tiles: {}x{}", canvas.x_tiles, canvas.y_tiles);
    info!(
        "Result image size: {}x{} px ({}x{} mm)",
        canvas.width_px, canvas.height_px, canvas.width_mm, canvas.height_mm
    );

    let placements = layout_tiles(config, &canvas, pool.len(), rng)?;
    info!("Rendering ...");
    let texture = render(&canvas, pool, config.gap_color, placements, progress)?;

    Ok(Synthesis { canvas, texture })
}
