//! Error types for the Artwork Gallery

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// An artwork image could not be loaded by the image primitive.
    ///
    /// Cards never propagate this; it only describes the failure in traces.
    #[error("Image failed to load for '{title}': {url}")]
    ImageLoad { title: String, url: String },

    /// Catalog file does not exist
    #[error("Catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    /// Catalog entry failed validation
    #[error("Invalid artwork at index {index}: {reason}")]
    InvalidArtwork { index: usize, reason: String },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
