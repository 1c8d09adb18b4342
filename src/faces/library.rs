//! Tile face loading, landscape normalization and mirrored variants

use crate::io::error::{Result, TextureError};
use image::{DynamicImage, ImageFormat, RgbImage, imageops};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One photographed tile surface, always landscape (`width >= height`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    image: RgbImage,
}

impl Face {
    /// Wrap an image, rotating it 90° clockwise when it is portrait
    pub fn new(image: RgbImage) -> Self {
        let image = if image.height() > image.width() {
            imageops::rotate90(&image)
        } else {
            image
        };
        Self { image }
    }

    /// Point reflection of this face with identical dimensions
    pub fn flipped(&self) -> Self {
        Self {
            image: imageops::rotate180(&self.image),
        }
    }

    /// Pixel width
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel data
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// Ordered, non-empty collection of equally oriented faces
///
/// Each source image contributes its landscape face, followed by the
/// 180° rotated variant when flipping is allowed.
#[derive(Debug, Clone)]
pub struct FacePool {
    faces: Vec<Face>,
}

impl FacePool {
    /// Build the pool from every image in `directory`, in file name order
    ///
    /// Files whose extension is not a known image format are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory is missing or cannot be listed
    /// - It contains no image files
    /// - Any image file fails to decode
    pub fn load(directory: &Path, allow_flip: bool) -> Result<Self> {
        let files = collect_image_files(directory)?;
        if files.is_empty() {
            return Err(TextureError::NoFaces {
                path: directory.to_path_buf(),
            });
        }

        let mut images = Vec::with_capacity(files.len());
        for path in files {
            let image = image::open(&path).map_err(|e| TextureError::FaceDecode {
                path: path.clone(),
                source: e,
            })?;
            debug!(
                path = %path.display(),
                width = image.width(),
                height = image.height(),
                "Loaded tile face"
            );
            images.push(image);
        }

        let pool = Self::from_images(images, allow_flip)?;
        info!(
            directory = %directory.display(),
            faces = pool.len(),
            allow_flip,
            "Face pool ready"
        );
        Ok(pool)
    }

    /// Build the pool from already decoded images
    ///
    /// # Errors
    ///
    /// Returns an error if `images` is empty
    pub fn from_images(images: Vec<DynamicImage>, allow_flip: bool) -> Result<Self> {
        if images.is_empty() {
            return Err(TextureError::NoFaces {
                path: PathBuf::from("<memory>"),
            });
        }

        let per_image = if allow_flip { 2 } else { 1 };
        let mut faces = Vec::with_capacity(images.len() * per_image);
        for image in images {
            let face = Face::new(image.to_rgb8());
            let flipped = allow_flip.then(|| face.flipped());
            faces.push(face);
            faces.extend(flipped);
        }

        Ok(Self { faces })
    }

    /// Number of faces, including flipped variants
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always false for a constructed pool
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face at `index`
    pub fn get(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    /// All faces in pool order
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

fn collect_image_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e| TextureError::FaceDirectory {
        path: directory.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if !path.is_file() {
            continue;
        }
        if ImageFormat::from_path(&path).is_ok() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-image file");
        }
    }

    // Directory order is platform dependent
    files.sort();
    Ok(files)
}
