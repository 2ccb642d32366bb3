//! Card Image
//!
//! Image primitive for cards: fills its container, fades in via an
//! opacity class, and reports exactly one of load/error to the parent.

use dioxus::prelude::*;

/// Fill-layout image with load/error callbacks
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardImage {
///         src: card.resolved_url.clone(),
///         alt: card.title().to_string(),
///         sizes: IMAGE_SIZES,
///         opacity_class: state().image_opacity_class(),
///         on_load: move |_| state.write().apply(CardEvent::ImageLoaded, &card),
///         on_error: move |_| state.write().apply(CardEvent::ImageFailed, &card),
///     }
/// }
/// ```
#[component]
pub fn CardImage(
    /// Resolved image URL
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Responsive `sizes` hint
    #[props(default = String::new())]
    sizes: String,
    /// Opacity modifier, e.g. "opacity-0" while loading
    #[props(default = "opacity-100".to_string())]
    opacity_class: String,
    on_load: EventHandler<()>,
    on_error: EventHandler<()>,
) -> Element {
    rsx! {
        img {
            class: "card-image card-image--fill {opacity_class}",
            src: "{src}",
            alt: "{alt}",
            "sizes": "{sizes}",
            onload: move |_| on_load.call(()),
            onerror: move |_| on_error.call(()),
        }
    }
}
