//! Gallery - grid of artwork cards
//!
//! Wide layouts navigate to the detail page on card click; narrow layouts
//! open the card's own modal instead.

use dioxus::prelude::*;
use gallery_ui::ArtworkCard;

use crate::app::Route;
use crate::context::use_catalog;

#[component]
pub fn Gallery() -> Element {
    let catalog = use_catalog();
    let navigator = use_navigator();

    let count = catalog.len();
    let noun = if count == 1 { "work" } else { "works" };

    rsx! {
        main { class: "gallery-page",
            header { class: "gallery-header",
                h1 { class: "gallery-title", "Gallery" }
                p { class: "gallery-count", "{count} {noun}" }
            }

            if catalog.is_empty() {
                p { class: "gallery-empty", "No artworks in the catalog yet." }
            } else {
                div { class: "gallery-grid",
                    for (index, artwork) in catalog.iter().enumerate() {
                        ArtworkCard {
                            key: "{index}",
                            artwork: artwork.clone(),
                            on_click: move |_| {
                                navigator.push(Route::ArtworkDetail { index });
                            },
                        }
                    }
                }
            }
        }
    }
}
