//! Artwork Detail - full view of one catalog entry
//!
//! Target of a card click on wide layouts (`/artworks/:index`).

use dioxus::prelude::*;
use gallery_core::CardModel;
use gallery_ui::{AvailabilityBadge, ButtonVariant};

use crate::app::Route;
use crate::context::use_catalog;

#[component]
pub fn ArtworkDetail(index: usize) -> Element {
    let catalog = use_catalog();

    let Some(artwork) = catalog.get(index) else {
        tracing::debug!(index, "No artwork at index");
        return rsx! {
            main { class: "detail-page",
                p { class: "detail-missing", "Artwork not found." }
                Link { class: ButtonVariant::Ghost.class().to_string(), to: Route::Gallery {}, "Back to gallery" }
            }
        };
    };

    let card = CardModel::new(artwork);

    rsx! {
        main { class: "detail-page",
            Link { class: ButtonVariant::Ghost.class().to_string(), to: Route::Gallery {}, "\u{2190} Back to gallery" }

            article { class: "artwork-detail",
                div { class: "artwork-detail__media",
                    img {
                        class: "artwork-detail__image",
                        src: "{card.resolved_url}",
                        alt: "{card.title()}",
                    }
                    AvailabilityBadge { availability: card.availability }
                }

                div { class: "artwork-detail__info",
                    h1 { class: "artwork-detail__title", "{card.title()}" }
                    if let Some(meta) = &card.metadata {
                        dl { class: "artwork-detail__facts",
                            if let Some(year) = &meta.year {
                                dt { "Year" }
                                dd { "{year}" }
                            }
                            if let Some(size) = &meta.size {
                                dt { "Size" }
                                dd { "{size}" }
                            }
                        }
                    }
                    a {
                        class: "artwork-detail__source",
                        href: "{card.modal_image_url()}",
                        "Original image"
                    }
                }
            }
        }
    }
}
