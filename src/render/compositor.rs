//! Compositing tile placements into the color texture and bump map
//!
//! Placements are grouped into courses (consecutive runs sharing a row
//! origin). Each output row is painted by every course whose pixel band
//! covers it, in emission order, so rows render in parallel and later
//! placements still overwrite earlier ones.

use crate::faces::{Face, FacePool};
use crate::io::error::{Result, TextureError};
use crate::io::progress::RenderProgress;
use crate::layout::{CanvasDimensions, TilePlacement};
use image::{GrayImage, Luma, Rgb, RgbImage};
use rayon::prelude::*;
use std::ops::Range;
use tracing::debug;

/// Bump value for mortar and background
pub const BUMP_LOW: Luma<u8> = Luma([0]);
/// Bump value for tile surfaces
pub const BUMP_HIGH: Luma<u8> = Luma([255]);

const RGB_CHANNELS: usize = 3;

/// Finished color texture and matching bump map of identical size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Color image: stretched faces over the gap color
    pub color: RgbImage,
    /// Grayscale height mask: high on tiles, low on gaps
    pub bump: GrayImage,
}

impl Texture {
    /// Buffers pre-filled with the gap color and the low bump value
    pub fn blank(width: u32, height: u32, gap_color: Rgb<u8>) -> Self {
        Self {
            color: RgbImage::from_pixel(width, height, gap_color),
            bump: GrayImage::from_pixel(width, height, BUMP_LOW),
        }
    }

    /// Width and height shared by both buffers
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }
}

/// Consecutive placements sharing one row origin, with their resolved pixel band
struct Course<'f> {
    rows: Range<u32>,
    tiles: Vec<(TilePlacement, &'f Face)>,
}

/// Draw every placement into fresh buffers
///
/// # Errors
///
/// Returns an error if a placement references a face outside the pool
pub fn render<I>(
    canvas: &CanvasDimensions,
    pool: &FacePool,
    gap_color: Rgb<u8>,
    placements: I,
    progress: &RenderProgress,
) -> Result<Texture>
where
    I: IntoIterator<Item = TilePlacement>,
{
    let courses = group_courses(canvas, pool, placements)?;
    let tile_count: usize = courses.iter().map(|course| course.tiles.len()).sum();
    debug!(
        courses = courses.len(),
        tiles = tile_count,
        "Placements grouped"
    );

    let mut texture = Texture::blank(canvas.width_px, canvas.height_px, gap_color);
    let width = canvas.width_px as usize;
    if width == 0 {
        return Ok(texture);
    }

    progress.start(u64::from(canvas.height_px));
    let color_rows: &mut [u8] = &mut texture.color;
    let bump_rows: &mut [u8] = &mut texture.bump;

    color_rows
        .par_chunks_mut(width * RGB_CHANNELS)
        .zip(bump_rows.par_chunks_mut(width))
        .enumerate()
        .for_each(|(row_index, (color_row, bump_row))| {
            let py = row_index as u32;
            for course in courses.iter().filter(|course| course.rows.contains(&py)) {
                paint_row(course, py, canvas.width_px, color_row, bump_row);
            }
            progress.advance();
        });

    progress.finish();
    Ok(texture)
}

fn group_courses<'f, I>(
    canvas: &CanvasDimensions,
    pool: &'f FacePool,
    placements: I,
) -> Result<Vec<Course<'f>>>
where
    I: IntoIterator<Item = TilePlacement>,
{
    let mut courses: Vec<Course<'f>> = Vec::new();
    let mut current_y = None;

    for placement in placements {
        let face = pool
            .get(placement.face)
            .ok_or(TextureError::InvalidFaceIndex {
                index: placement.face,
                pool_size: pool.len(),
            })?;

        let rect = placement.rect;
        if current_y != Some(rect.y) {
            current_y = Some(rect.y);
            courses.push(Course {
                rows: pixel_span(rect.y, rect.height, canvas.height_px),
                tiles: Vec::new(),
            });
        }
        if let Some(course) = courses.last_mut() {
            course.tiles.push((placement, face));
        }
    }

    // Courses below the bottom edge cover no pixel rows
    courses.retain(|course| !course.rows.is_empty());
    Ok(courses)
}

fn paint_row(
    course: &Course<'_>,
    py: u32,
    canvas_width: u32,
    color_row: &mut [u8],
    bump_row: &mut [u8],
) {
    for (placement, face) in &course.tiles {
        if face.width() == 0 || face.height() == 0 {
            continue;
        }
        let rect = placement.rect;
        let source_y = sample_index(py, rect.y, rect.height, face.height());

        for px in pixel_span(rect.x, rect.width, canvas_width) {
            let source_x = sample_index(px, rect.x, rect.width, face.width());
            let Rgb(channels) = *face.image().get_pixel(source_x, source_y);
            let offset = px as usize * RGB_CHANNELS;

            if let Some(target) = color_row.get_mut(offset..offset + RGB_CHANNELS) {
                target.copy_from_slice(&channels);
            }
            if let Some(target) = bump_row.get_mut(px as usize) {
                *target = BUMP_HIGH.0[0];
            }
        }
    }
}

/// Pixel indices covered by `[start, start + extent)`, clipped to `[0, limit)`
///
/// A pixel is covered when its centre lies inside the interval.
pub fn pixel_span(start: f64, extent: f64, limit: u32) -> Range<u32> {
    let limit_f = f64::from(limit);
    let first = start.round().clamp(0.0, limit_f) as u32;
    let last = (start + extent).round().clamp(0.0, limit_f) as u32;
    first..last.max(first)
}

/// Nearest source pixel when stretching `size` pixels over `[origin, origin + extent)`
pub fn sample_index(target: u32, origin: f64, extent: f64, size: u32) -> u32 {
    if size == 0 || extent <= 0.0 {
        return 0;
    }
    let relative = (f64::from(target) + 0.5 - origin) / extent;
    let index = (relative * f64::from(size)).floor();
    index.clamp(0.0, f64::from(size - 1)) as u32
}
