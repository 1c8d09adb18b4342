//! Error types and error-kind classification for texture generation

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of failures, used by callers that only care about the stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid configuration value
    Config,
    /// Face directory missing, empty or holding undecodable images
    Load,
    /// Tile layout could not be produced from the available faces
    Layout,
    /// Encoding or writing the finished images failed
    Export,
}

/// Main error type for all texture generation operations
#[derive(Debug, Error)]
pub enum TextureError {
    /// Configuration value failed validation
    #[error("Invalid configuration field '{field}' = '{value}': {reason}")]
    InvalidConfig {
        /// Name of the configuration field
        field: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Configuration document could not be read
    #[error("Failed to read configuration '{}': {source}", path.display())]
    ConfigRead {
        /// Path to the configuration document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration '{}': {source}", path.display())]
    ConfigParse {
        /// Path to the configuration document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Face directory missing or unreadable
    #[error("Cannot read face directory '{}': {source}", path.display())]
    FaceDirectory {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Face directory holds no image files
    #[error("No tile face images found in '{}'", path.display())]
    NoFaces {
        /// Directory that was scanned
        path: PathBuf,
    },

    /// A face image could not be decoded
    #[error("Failed to decode tile face '{}': {source}", path.display())]
    FaceDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Layout was requested with nothing to place
    #[error("Face pool is empty, no tiles can be laid out")]
    EmptyFacePool,

    /// Placement refers to a face the pool does not have
    #[error("Face index {index} is out of bounds (pool size: {pool_size})")]
    InvalidFaceIndex {
        /// The invalid face index
        index: usize,
        /// Number of faces in the pool
        pool_size: usize,
    },

    /// Numerical computation produced an unusable result
    #[error("Computation error in {operation}: {reason}")]
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode a finished image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TextureError {
    /// Stage classification of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig { .. } | Self::ConfigRead { .. } | Self::ConfigParse { .. } => {
                ErrorKind::Config
            }
            Self::FaceDirectory { .. } | Self::NoFaces { .. } | Self::FaceDecode { .. } => {
                ErrorKind::Load
            }
            Self::EmptyFacePool | Self::InvalidFaceIndex { .. } | Self::Computation { .. } => {
                ErrorKind::Layout
            }
            Self::ImageExport { .. } | Self::FileSystem { .. } => ErrorKind::Export,
        }
    }
}

/// Convenience type alias for texture generation results
pub type Result<T> = std::result::Result<T, TextureError>;

/// Create an invalid configuration error
pub fn invalid_config(
    field: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidConfig {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TextureError {
    TextureError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
