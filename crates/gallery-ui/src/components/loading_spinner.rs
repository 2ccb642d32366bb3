use dioxus::prelude::*;

/// Centered spinning ring shown while a card image is loading
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-spinner", role: "status", "aria-label": "Loading" }
        }
    }
}
