//! Catalog context for the Artwork Gallery.
//!
//! The catalog is loaded in `main` before the window launches and shared
//! with every page via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_catalog);
//!
//! // In pages
//! let catalog = use_catalog();
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use gallery_core::Catalog;

/// Catalog handed over from the command line
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Shared catalog type for context.
///
/// The catalog lives for the whole process, so pages borrow it directly.
pub type SharedCatalog = &'static Catalog;

/// Store the catalog loaded at startup. Later calls are ignored.
pub fn set_catalog(catalog: Catalog) {
    if CATALOG.set(catalog).is_err() {
        tracing::warn!("Catalog already set, keeping the first one");
    }
}

/// Get the startup catalog, falling back to the sample artworks.
pub fn get_catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::sample)
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> SharedCatalog {
    use_context::<SharedCatalog>()
}
