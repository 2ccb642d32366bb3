//! Visual theme for the Artwork Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
