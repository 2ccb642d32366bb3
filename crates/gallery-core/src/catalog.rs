//! Artwork catalog
//!
//! The list of artworks the gallery page renders, loaded from a JSON
//! array on disk or taken from the built-in sample set.

use std::path::Path;

use tracing::info;

use crate::artwork::Artwork;
use crate::error::{GalleryError, GalleryResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Builds a catalog, rejecting artworks with a blank title.
    pub fn new(artworks: Vec<Artwork>) -> GalleryResult<Self> {
        for (index, artwork) in artworks.iter().enumerate() {
            if artwork.title.trim().is_empty() {
                return Err(GalleryError::InvalidArtwork {
                    index,
                    reason: "title is empty".to_string(),
                });
            }
        }
        Ok(Self { artworks })
    }

    /// Parses a JSON array of artworks
    pub fn from_json(json: &str) -> GalleryResult<Self> {
        let artworks: Vec<Artwork> = serde_json::from_str(json)?;
        Self::new(artworks)
    }

    pub fn load(path: &Path) -> GalleryResult<Self> {
        if !path.exists() {
            return Err(GalleryError::CatalogNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), count = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Small built-in catalog used when no catalog file is present.
    pub fn sample() -> Self {
        Self {
            artworks: vec![
                Artwork::new(
                    "Sunset over the Harbor 1998",
                    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee",
                )
                .with_size("60 x 90 cm"),
                Artwork::new(
                    "Morning Fog 2004",
                    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
                )
                .with_sold(true),
                Artwork::new(
                    "Untitled Study",
                    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
                )
                .with_size("30 x 40 cm"),
                Artwork::new(
                    "Archive Scan 2011",
                    "https://console.aws.amazon.com/s3/object/gallery-archive?prefix=scan-2011.jpg",
                ),
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }
}
