//! JPEG export of the finished texture with dimension-annotated file names

use crate::io::configuration::{BUMP_SUFFIX, JPEG_QUALITY};
use crate::io::error::{Result, TextureError};
use crate::layout::CanvasDimensions;
use crate::render::Texture;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the two written images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    /// Color texture
    pub color: PathBuf,
    /// Bump map
    pub bump: PathBuf,
}

/// Insert `suffix` between the file stem and its extension
pub fn add_filename_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(extension) => format!("{stem}{suffix}.{}", extension.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// Output paths for a canvas: `<stem>_<W>x<H>px_<Wmm>x<Hmm>mm.<ext>` and its `_bump` sibling
pub fn output_paths(base: &Path, canvas: &CanvasDimensions) -> ExportedFiles {
    let dimensions = format!(
        "_{}x{}px_{}x{}mm",
        canvas.width_px, canvas.height_px, canvas.width_mm, canvas.height_mm
    );
    let color = add_filename_suffix(base, &dimensions);
    let bump = add_filename_suffix(&color, BUMP_SUFFIX);
    ExportedFiles { color, bump }
}

/// Encode both buffers as quality-95 JPEG files next to `base`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - A file cannot be created or flushed
/// - JPEG encoding fails (for example, a side longer than 65535 pixels)
pub fn export_texture(
    texture: &Texture,
    canvas: &CanvasDimensions,
    base: &Path,
) -> Result<ExportedFiles> {
    let files = output_paths(base, canvas);

    if let Some(parent) = files.color.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    info!(path = %files.color.display(), "Saving texture");
    let (width, height) = texture.dimensions();
    write_jpeg(&files.color, &texture.color, width, height, ExtendedColorType::Rgb8)?;

    info!(path = %files.bump.display(), "Saving bump map");
    write_jpeg(&files.bump, &texture.bump, width, height, ExtendedColorType::L8)?;

    Ok(files)
}

fn write_jpeg(
    path: &Path,
    pixels: &[u8],
    width: u32,
    height: u32,
    color_type: ExtendedColorType,
) -> Result<()> {
    let file = File::create(path).map_err(|e| TextureError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .write_image(pixels, width, height, color_type)
        .map_err(|e| TextureError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| TextureError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush file",
        source: e,
    })
}
