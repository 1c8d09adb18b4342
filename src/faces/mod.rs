//! Source face images and the pool they are drawn from

/// Face loading, orientation and the face pool
pub mod library;

pub use library::{Face, FacePool};
