//! Artwork Modal Component
//!
//! Full-size image overlay opened from an artwork card.

use dioxus::prelude::*;

use super::CloseButton;

/// Artwork Modal
///
/// Shows the artwork's original image at full size with its title.
/// Clicking the backdrop or the close button calls `on_close`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ArtworkModal {
///         is_open: state().modal_open(),
///         on_close: move |_| state.write().apply(CardEvent::CloseModal, &card),
///         image_url: card.modal_image_url().to_string(),
///         title: card.title().to_string(),
///     }
/// }
/// ```
#[component]
pub fn ArtworkModal(
    /// Show/hide modal
    is_open: bool,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
    /// Original artwork URL
    image_url: String,
    /// Artwork title shown as caption
    title: String,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "artwork-modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                onclick: move |e| e.stop_propagation(),

                div { class: "artwork-modal__header",
                    h2 { class: "artwork-modal__title", "{title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "artwork-modal__body",
                    img {
                        class: "artwork-modal__image",
                        src: "{image_url}",
                        alt: "{title}",
                    }
                }
            }
        }
    }
}
