//! Artwork Gallery UI Components
//!
//! Dioxus components for rendering artwork cards in the desktop gallery.
//! Domain decisions (URL resolution, year extraction, card state) live in
//! `gallery-core`; this crate only turns them into markup and wires user
//! events back into the card state machine.
//!
//! Class names follow the stylesheet shipped with the desktop app:
//! - `artwork-card__*` for card parts
//! - `badge--sold` / `badge--available` for the sales badge
//! - `opacity-0` / `opacity-100` for the image fade-in

pub mod components;
pub mod viewport;

pub use components::*;
pub use viewport::{use_viewport, DesktopViewport, ViewportHandle};
