//! Availability Badge
//!
//! Small pill in the card corner: red "Sold", green "Available".

use dioxus::prelude::*;
use gallery_core::Availability;

#[component]
pub fn AvailabilityBadge(availability: Availability) -> Element {
    rsx! {
        div { class: "artwork-card__badge-slot",
            span {
                class: "badge {availability.class()}",
                "{availability.label()}"
            }
        }
    }
}
