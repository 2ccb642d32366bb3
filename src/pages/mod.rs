//! Page components for the Artwork Gallery.

mod artwork_detail;
mod gallery;

pub use artwork_detail::ArtworkDetail;
pub use gallery::Gallery;
