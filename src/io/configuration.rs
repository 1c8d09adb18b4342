//! Configuration defaults, document loading and validation

use crate::io::error::{Result, TextureError, invalid_config};
use crate::layout::CanvasDimensions;
use crate::render::color::parse_hex_color;
use image::Rgb;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

// Physical defaults in millimetres
/// Default tile width (vertical extent)
pub const DEFAULT_TILE_WIDTH_MM: u32 = 1200;
/// Default tile length (horizontal extent)
pub const DEFAULT_TILE_LENGTH_MM: u32 = 200;
/// Default mortar gap width
pub const DEFAULT_GAP_WIDTH_MM: u32 = 0;
/// Default minimum output width
pub const DEFAULT_OUTPUT_WIDTH_MM: u32 = 7000;
/// Default minimum output height
pub const DEFAULT_OUTPUT_HEIGHT_MM: u32 = 4000;

/// Default row offset bounds, in percent of tile length
pub const DEFAULT_OFFSET_PERCENT: f64 = 30.0;
/// Offset ranges narrower than this are treated as a fixed offset
pub const OFFSET_JITTER_THRESHOLD: f64 = 0.01;
/// Largest allowed row offset in percent
pub const MAX_OFFSET_PERCENT: f64 = 100.0;

/// Default mortar color
pub const DEFAULT_GAP_COLOR: &str = "#3e3e3e";
/// Default output pixel density
pub const DEFAULT_OUTPUT_DPI: u32 = 96;
/// Mirrored face variants are enabled unless switched off
pub const DEFAULT_ALLOW_FACE_FLIP: bool = true;

// Output settings
/// JPEG quality used for both exported images
pub const JPEG_QUALITY: u8 = 95;
/// Largest side length, in pixels, a JPEG file can record
pub const MAX_JPEG_DIMENSION_PX: u32 = 65535;
/// Suffix appended to the bump map file name
pub const BUMP_SUFFIX: &str = "_bump";
/// Output extensions the exporter can encode
pub const SUPPORTED_OUTPUT_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    /// Directory with photographs of tile faces
    pub tile_faces_directory: PathBuf,
    /// Physical tile width (vertical extent) in mm
    pub tile_width_mm: u32,
    /// Physical tile length (horizontal extent) in mm
    pub tile_length_mm: u32,
    /// Lower bound of the per-row stagger in percent of tile length
    pub offset_min: f64,
    /// Upper bound of the per-row stagger in percent of tile length
    pub offset_max: f64,
    /// Mortar gap width in mm
    pub gap_width_mm: u32,
    /// Mortar and background color
    pub gap_color: Rgb<u8>,
    /// Whether 180° rotated face variants join the pool
    pub allow_face_flip: bool,
    /// Output pixel density
    pub output_dpi: u32,
    /// Minimum output width in mm
    pub output_width_mm: u32,
    /// Minimum output height in mm
    pub output_height_mm: u32,
    /// Base name of the exported files
    pub output_filename: PathBuf,
}

impl TextureConfig {
    /// Configuration with every optional field at its default
    pub fn new(tile_faces_directory: impl Into<PathBuf>, output_filename: impl Into<PathBuf>) -> Self {
        Self {
            tile_faces_directory: tile_faces_directory.into(),
            tile_width_mm: DEFAULT_TILE_WIDTH_MM,
            tile_length_mm: DEFAULT_TILE_LENGTH_MM,
            offset_min: DEFAULT_OFFSET_PERCENT,
            offset_max: DEFAULT_OFFSET_PERCENT,
            gap_width_mm: DEFAULT_GAP_WIDTH_MM,
            gap_color: Rgb([0x3e, 0x3e, 0x3e]),
            allow_face_flip: DEFAULT_ALLOW_FACE_FLIP,
            output_dpi: DEFAULT_OUTPUT_DPI,
            output_width_mm: DEFAULT_OUTPUT_WIDTH_MM,
            output_height_mm: DEFAULT_OUTPUT_HEIGHT_MM,
            output_filename: output_filename.into(),
        }
    }

    /// Load a configuration document, resolving relative paths against its directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// or any field fails validation
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TextureError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&contents, base_dir).map_err(|error| match error {
            TextureError::ConfigParse { source, .. } => TextureError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse a configuration document; property names match case-insensitively
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document or any field fails validation
    pub fn from_json(contents: &str, base_dir: &Path) -> Result<Self> {
        let parse_error = |source| TextureError::ConfigParse {
            path: PathBuf::from("<inline>"),
            source,
        };
        let document: Value = serde_json::from_str(contents).map_err(parse_error)?;
        let raw: RawConfig = serde_json::from_value(lowercase_keys(document)).map_err(parse_error)?;
        let config = raw.resolve(base_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range
    ///
    /// The resulting canvas must also fit in a JPEG file.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation
    pub fn validate(&self) -> Result<()> {
        if self.tile_faces_directory.as_os_str().is_empty() {
            return Err(invalid_config("TileFacesDirectory", &"", &"is required"));
        }
        if self.output_filename.as_os_str().is_empty() {
            return Err(invalid_config("OutputFilename", &"", &"is required"));
        }

        let extension = self
            .output_filename
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !SUPPORTED_OUTPUT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(invalid_config(
                "OutputFilename",
                &self.output_filename.display(),
                &"only .jpg output is supported",
            ));
        }

        for (field, value) in [
            ("TileWidth", self.tile_width_mm),
            ("TileLength", self.tile_length_mm),
            ("OutputDPI", self.output_dpi),
            ("OutputWidth", self.output_width_mm),
            ("OutputHeight", self.output_height_mm),
        ] {
            if value == 0 {
                return Err(invalid_config(field, &value, &"must be positive"));
            }
        }

        for (field, value) in [("OffsetMin", self.offset_min), ("OffsetMax", self.offset_max)] {
            if !(0.0..=MAX_OFFSET_PERCENT).contains(&value) {
                return Err(invalid_config(field, &value, &"must be within 0..=100 percent"));
            }
        }
        if self.offset_min > self.offset_max {
            return Err(invalid_config(
                "OffsetMax",
                &self.offset_max,
                &format!("must not be less than OffsetMin ({})", self.offset_min),
            ));
        }

        CanvasDimensions::compute(self)?.ensure_exportable()
    }
}

/// Configuration document as written by the user, before validation
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    #[serde(rename = "tilefacesdirectory")]
    tile_faces_directory: Option<String>,
    #[serde(rename = "tilewidth")]
    tile_width: i64,
    #[serde(rename = "tilelength")]
    tile_length: i64,
    #[serde(rename = "offsetmin")]
    offset_min: f64,
    #[serde(rename = "offsetmax")]
    offset_max: f64,
    #[serde(rename = "gapwidth")]
    gap_width: i64,
    #[serde(rename = "gapcolor")]
    gap_color: String,
    #[serde(rename = "allowfaceflip")]
    allow_face_flip: bool,
    #[serde(rename = "outputdpi")]
    output_dpi: i64,
    #[serde(rename = "outputwidth")]
    output_width: i64,
    #[serde(rename = "outputheight")]
    output_height: i64,
    #[serde(rename = "outputfilename")]
    output_filename: Option<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            tile_faces_directory: None,
            tile_width: i64::from(DEFAULT_TILE_WIDTH_MM),
            tile_length: i64::from(DEFAULT_TILE_LENGTH_MM),
            offset_min: DEFAULT_OFFSET_PERCENT,
            offset_max: DEFAULT_OFFSET_PERCENT,
            gap_width: i64::from(DEFAULT_GAP_WIDTH_MM),
            gap_color: DEFAULT_GAP_COLOR.to_string(),
            allow_face_flip: DEFAULT_ALLOW_FACE_FLIP,
            output_dpi: i64::from(DEFAULT_OUTPUT_DPI),
            output_width: i64::from(DEFAULT_OUTPUT_WIDTH_MM),
            output_height: i64::from(DEFAULT_OUTPUT_HEIGHT_MM),
            output_filename: None,
        }
    }
}

impl RawConfig {
    fn resolve(self, base_dir: &Path) -> Result<TextureConfig> {
        let tile_faces_directory =
            required_path("TileFacesDirectory", self.tile_faces_directory, base_dir)?;
        let output_filename = required_path("OutputFilename", self.output_filename, base_dir)?;
        let gap_color = parse_hex_color(&self.gap_color)
            .ok_or_else(|| invalid_config("GapColor", &self.gap_color, &"expected #rgb or #rrggbb"))?;

        Ok(TextureConfig {
            tile_faces_directory,
            tile_width_mm: non_negative("TileWidth", self.tile_width)?,
            tile_length_mm: non_negative("TileLength", self.tile_length)?,
            offset_min: self.offset_min,
            offset_max: self.offset_max,
            gap_width_mm: non_negative("GapWidth", self.gap_width)?,
            gap_color,
            allow_face_flip: self.allow_face_flip,
            output_dpi: non_negative("OutputDPI", self.output_dpi)?,
            output_width_mm: non_negative("OutputWidth", self.output_width)?,
            output_height_mm: non_negative("OutputHeight", self.output_height)?,
            output_filename,
        })
    }
}

fn required_path(field: &'static str, value: Option<String>, base_dir: &Path) -> Result<PathBuf> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| invalid_config(field, &"", &"is required"))?;
    let path = PathBuf::from(value.trim());
    if path.is_absolute() {
        Ok(path)
    } else {
        debug!(field, base = %base_dir.display(), "Resolving relative path");
        Ok(base_dir.join(path))
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|error| {
        invalid_config(
            field,
            &value,
            &format!("must be a non-negative integer ({error})"),
        )
    })
}

// Top-level keys only, nested values are never inspected
fn lowercase_keys(document: Value) -> Value {
    match document {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), value))
                .collect(),
        ),
        other => other,
    }
}
