//! Reusable gallery components
//!
//! `ArtworkCard` is the entry point; the rest are its collaborators and
//! can be used on their own.

mod artwork_card;
mod artwork_modal;
mod availability_badge;
mod button;
mod card_image;
mod loading_spinner;

pub use artwork_card::*;
pub use artwork_modal::*;
pub use availability_badge::*;
pub use button::*;
pub use card_image::*;
pub use loading_spinner::*;
