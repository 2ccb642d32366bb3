//! Artwork Card
//!
//! Gallery preview tile: image with loading/error states, sales badge,
//! title, year/size line, and a detail modal.

use dioxus::prelude::*;
use gallery_core::{Artwork, CardEvent, CardModel, CardState, ClickTarget, MetadataLine, IMAGE_SIZES};

use super::{ArtworkModal, AvailabilityBadge, Button, ButtonVariant, CardImage, LoadingSpinner};
use crate::viewport::use_viewport;

/// Artwork preview card
///
/// On narrow viewports (< 768px) a click anywhere on the card opens the
/// detail modal. On wider viewports the click goes to `on_click` and the
/// modal opens from the hover-revealed "View details" button.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ArtworkCard {
///         artwork: Artwork::new("Sunset 1998", "https://img.example.com/a.jpg"),
///         on_click: move |_| navigator.push(Route::ArtworkDetail { index: 0 }),
///     }
/// }
/// ```
#[component]
pub fn ArtworkCard(
    /// Artwork to render
    artwork: Artwork,
    /// Click handler for wide viewports
    #[props(default)]
    on_click: Option<EventHandler<MouseEvent>>,
) -> Element {
    let card = CardModel::new(&artwork);
    let mut state = use_signal(CardState::new);
    let viewport = use_viewport();

    let handle_card_click = {
        let card = card.clone();
        let viewport = viewport.clone();
        move |evt: MouseEvent| {
            let outcome = state
                .write()
                .click(ClickTarget::Card, viewport.probe(), &card);
            if outcome.stop_propagation {
                evt.stop_propagation();
            }
            if outcome.delegate {
                if let Some(handler) = &on_click {
                    handler.call(evt);
                }
            }
        }
    };

    let handle_view_details = {
        let card = card.clone();
        move |evt: MouseEvent| {
            let outcome = state
                .write()
                .click(ClickTarget::ViewDetails, viewport.probe(), &card);
            if outcome.stop_propagation {
                evt.stop_propagation();
            }
        }
    };

    let handle_load = {
        let card = card.clone();
        move |_: ()| {
            state.write().apply(CardEvent::ImageLoaded, &card);
        }
    };

    let handle_error = {
        let card = card.clone();
        move |_: ()| {
            state.write().apply(CardEvent::ImageFailed, &card);
        }
    };

    let handle_close = {
        let card = card.clone();
        move |_: ()| {
            state.write().apply(CardEvent::CloseModal, &card);
        }
    };

    let current = state();

    rsx! {
        div {
            class: "artwork-card",
            onclick: handle_card_click,

            div { class: "artwork-card__media",
                if current.spinner_visible() {
                    LoadingSpinner {}
                }

                if current.image_error() {
                    ImageUnavailable {}
                } else {
                    CardImage {
                        src: card.resolved_url.clone(),
                        alt: card.title().to_string(),
                        sizes: IMAGE_SIZES.to_string(),
                        opacity_class: current.image_opacity_class().to_string(),
                        on_load: handle_load,
                        on_error: handle_error,
                    }
                }

                // Hover overlay; the button is hidden on narrow layouts
                div { class: "artwork-card__overlay",
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "view-details".to_string(),
                        onclick: handle_view_details,
                        "View Details"
                    }
                }

                AvailabilityBadge { availability: card.availability }
            }

            div { class: "artwork-card__info",
                h3 { class: "artwork-card__title", "{card.title()}" }
                if let Some(meta) = card.metadata.clone() {
                    MetadataRow { meta: meta }
                }
            }
        }

        ArtworkModal {
            is_open: current.modal_open(),
            on_close: handle_close,
            image_url: card.modal_image_url().to_string(),
            title: card.title().to_string(),
        }
    }
}

/// Stand-in shown when the image primitive reports a failure
#[component]
fn ImageUnavailable() -> Element {
    rsx! {
        div { class: "artwork-card__unavailable",
            div { class: "artwork-card__unavailable-body",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    class: "artwork-card__unavailable-icon",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z" }
                }
                p { class: "artwork-card__unavailable-text", "Image not available" }
                p { class: "artwork-card__unavailable-hint", "Click to view details" }
            }
        }
    }
}

/// Year and size under the title, separated by a middle dot
#[component]
fn MetadataRow(meta: MetadataLine) -> Element {
    rsx! {
        div { class: "artwork-card__meta",
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                class: "artwork-card__meta-icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" }
            }
            if let Some(year) = &meta.year {
                span { class: "artwork-card__year", "{year}" }
            }
            if let Some(size) = &meta.size {
                span { class: "artwork-card__meta-sep", "·" }
                span { class: "artwork-card__size", "{size}" }
            }
        }
    }
}
