use dioxus::prelude::*;

use crate::context::get_catalog;
use crate::pages::{ArtworkDetail, Gallery};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Grid of artwork cards
/// - `/artworks/:index` - Full detail view for one catalog entry
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/artworks/:index")]
    ArtworkDetail { index: usize },
}

/// Root application component.
///
/// Provides global styles, catalog context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
