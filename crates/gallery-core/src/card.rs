//! Artwork card model and state machine
//!
//! A card has two independent axes of state:
//!
//! - image: `Loading` until the image primitive reports exactly one of
//!   `ImageLoaded` / `ImageFailed`, after which the phase is final
//! - modal: closed or open, toggled by `ViewDetails` / `CloseModal`
//!
//! [`CardModel`] holds everything derived from the artwork for one render
//! (resolved URL, badge, metadata line). [`CardState`] holds what changes
//! in response to events. Neither outlives the card instance.

use tracing::{debug, warn};

use crate::artwork::{Artwork, Availability, MetadataLine};
use crate::error::GalleryError;
use crate::resolver::resolve_image_url;
use crate::viewport::{ViewportClass, ViewportProbe};

/// Responsive size hint passed to the image primitive
pub const IMAGE_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 25vw";

/// Values derived from an [`Artwork`] for rendering a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub artwork: Artwork,
    /// URL handed to the image primitive, possibly a placeholder
    pub resolved_url: String,
    pub availability: Availability,
    pub metadata: Option<MetadataLine>,
}

impl CardModel {
    pub fn new(artwork: &Artwork) -> Self {
        Self {
            resolved_url: resolve_image_url(&artwork.url, &artwork.title),
            availability: artwork.availability(),
            metadata: artwork.metadata_line(),
            artwork: artwork.clone(),
        }
    }

    /// URL shown in the detail modal.
    ///
    /// Always the stored artwork URL, never the placeholder substitute.
    pub fn modal_image_url(&self) -> &str {
        &self.artwork.url
    }

    pub fn title(&self) -> &str {
        &self.artwork.title
    }
}

/// Image loading phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePhase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImagePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImagePhase::Loading)
    }
}

/// Events delivered to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Image primitive reported success
    ImageLoaded,
    /// Image primitive reported failure
    ImageFailed,
    /// "View details" activated (or narrow-viewport card tap)
    ViewDetails,
    /// Modal's own close control
    CloseModal,
}

/// Visual state owned by one card instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    phase: ImagePhase,
    modal_open: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ImagePhase {
        self.phase
    }

    /// True once the image either loaded or failed
    pub fn image_loaded(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn image_error(&self) -> bool {
        self.phase == ImagePhase::Failed
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn spinner_visible(&self) -> bool {
        !self.image_loaded()
    }

    /// Whether the image element is mounted (it is replaced on failure)
    pub fn image_mounted(&self) -> bool {
        !self.image_error()
    }

    /// Opacity class for the image; it fades in once loaded
    pub fn image_opacity_class(&self) -> &'static str {
        if self.image_loaded() {
            "opacity-100"
        } else {
            "opacity-0"
        }
    }

    /// Applies `event`, returning whether the state changed.
    ///
    /// Image events after the first one are ignored.
    pub fn apply(&mut self, event: CardEvent, card: &CardModel) -> bool {
        match event {
            CardEvent::ImageLoaded | CardEvent::ImageFailed if self.phase.is_terminal() => {
                debug!(
                    title = %card.title(),
                    phase = ?self.phase,
                    ?event,
                    "Ignoring image event after completion"
                );
                false
            }
            CardEvent::ImageLoaded => {
                debug!(title = %card.title(), "Image loaded successfully");
                self.phase = ImagePhase::Loaded;
                true
            }
            CardEvent::ImageFailed => {
                let error = GalleryError::ImageLoad {
                    title: card.artwork.title.clone(),
                    url: card.artwork.url.clone(),
                };
                warn!(
                    title = %card.title(),
                    original_url = %card.artwork.url,
                    resolved_url = %card.resolved_url,
                    %error,
                    "Image failed to load"
                );
                self.phase = ImagePhase::Failed;
                true
            }
            CardEvent::ViewDetails => !std::mem::replace(&mut self.modal_open, true),
            CardEvent::CloseModal => std::mem::replace(&mut self.modal_open, false),
        }
    }
}

/// Where a click on the card body goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    /// Open the detail modal directly
    OpenModal,
    /// Hand the click to the card's `on_click` callback
    Delegate,
}

/// Decides the click route from the viewport width at click time.
pub fn route_card_click<P: ViewportProbe + ?Sized>(viewport: &P) -> ClickRoute {
    match viewport.class() {
        ViewportClass::Narrow => ClickRoute::OpenModal,
        ViewportClass::Wide => ClickRoute::Delegate,
    }
}

/// Element a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere on the card body
    Card,
    /// The "View details" button inside the card
    ViewDetails,
}

/// What the UI does with the event after the card handled a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Stop the event before it reaches enclosing click handlers
    pub stop_propagation: bool,
    /// Forward the event to the card's `on_click` callback
    pub delegate: bool,
}

impl CardState {
    /// Handles a click on `target`.
    ///
    /// A click that opens the modal is never forwarded and never bubbles,
    /// so "View details" cannot also trigger the card's `on_click`.
    pub fn click<P: ViewportProbe + ?Sized>(
        &mut self,
        target: ClickTarget,
        viewport: &P,
        card: &CardModel,
    ) -> ClickOutcome {
        let route = match target {
            ClickTarget::ViewDetails => ClickRoute::OpenModal,
            ClickTarget::Card => route_card_click(viewport),
        };
        match route {
            ClickRoute::OpenModal => {
                self.apply(CardEvent::ViewDetails, card);
                ClickOutcome {
                    stop_propagation: true,
                    delegate: false,
                }
            }
            ClickRoute::Delegate => ClickOutcome {
                stop_propagation: false,
                delegate: true,
            },
        }
    }
}
