//! Artwork Gallery Core Library
//!
//! Domain logic behind the gallery's artwork cards, free of any UI
//! framework so it can be tested directly.
//!
//! ## Overview
//!
//! - **Resolver**: maps stored image URLs to displayable ones, swapping
//!   known non-image sources for a generated placeholder
//! - **Metadata**: pulls a 4-digit year out of free-text titles
//! - **Card**: the per-card state machine (image phase x modal open)
//!   and click routing by viewport width
//! - **Catalog**: the list of artworks a gallery page renders
//!
//! ## Quick Start
//!
//! ```
//! use gallery_core::{Artwork, CardEvent, CardModel, CardState};
//!
//! let artwork = Artwork::new("Sunset 1998", "https://img.example.com/a.jpg");
//! let card = CardModel::new(&artwork);
//! let mut state = CardState::new();
//!
//! assert!(state.spinner_visible());
//! state.apply(CardEvent::ImageLoaded, &card);
//! assert!(!state.spinner_visible());
//! assert_eq!(card.availability.label(), "Available");
//! ```

pub mod artwork;
pub mod card;
pub mod catalog;
pub mod error;
pub mod metadata;
pub mod resolver;
pub mod viewport;

// Re-exports
pub use artwork::{Artwork, Availability, MetadataLine};
pub use card::{
    route_card_click, CardEvent, CardModel, CardState, ClickOutcome, ClickRoute, ClickTarget,
    ImagePhase, IMAGE_SIZES,
};
pub use catalog::Catalog;
pub use error::{GalleryError, GalleryResult};
pub use metadata::extract_year;
pub use resolver::resolve_image_url;
pub use viewport::{FixedViewport, ViewportClass, ViewportProbe, NARROW_BREAKPOINT};
