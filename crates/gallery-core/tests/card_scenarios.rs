//! End-to-end card scenarios
//!
//! Drives the card model and state machine the way the UI does: derive
//! the model, feed image and interaction events, route clicks.

use gallery_core::{
    route_card_click, Artwork, CardEvent, CardModel, CardState, ClickRoute, FixedViewport,
    ImagePhase,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn sunset() -> Artwork {
    Artwork::new("Sunset 1998", "https://img.example.com/a.jpg")
}

#[test]
fn test_sunset_loads() {
    init_tracing();
    let card = CardModel::new(&sunset());
    let mut state = CardState::new();

    assert_eq!(card.availability.label(), "Available");
    let meta = card.metadata.clone().expect("metadata line");
    assert_eq!(meta.year.as_deref(), Some("1998"));
    assert_eq!(meta.size, None);
    assert_eq!(card.resolved_url, "https://img.example.com/a.jpg");

    assert!(state.spinner_visible());
    assert!(!state.modal_open());

    state.apply(CardEvent::ImageLoaded, &card);
    assert!(!state.spinner_visible());
    assert!(state.image_mounted());
    assert_eq!(state.image_opacity_class(), "opacity-100");
}

#[test]
fn test_sunset_fails() {
    init_tracing();
    let card = CardModel::new(&sunset());
    let mut state = CardState::new();

    state.apply(CardEvent::ImageFailed, &card);
    assert_eq!(state.phase(), ImagePhase::Failed);
    assert!(!state.spinner_visible());
    assert!(!state.image_mounted());

    // A late success report does not resurrect the image
    state.apply(CardEvent::ImageLoaded, &card);
    assert!(state.image_error());
}

#[test]
fn test_console_url_always_placeholder() {
    init_tracing();
    let artwork = Artwork::new("Sunset 1998", "https://console.aws.amazon.com/x");
    let card = CardModel::new(&artwork);
    assert!(card
        .resolved_url
        .starts_with("https://via.placeholder.com/400x300/"));
    assert!(card.resolved_url.ends_with("?text=Sunset%201998"));

    for event in [CardEvent::ImageLoaded, CardEvent::ImageFailed] {
        let mut state = CardState::new();
        state.apply(event, &card);
        assert_eq!(CardModel::new(&artwork).resolved_url, card.resolved_url);
    }
    assert_eq!(card.modal_image_url(), "https://console.aws.amazon.com/x");
}

#[test]
fn test_sold_with_size() {
    let artwork = Artwork::new("Untitled", "https://img.example.com/u.jpg")
        .with_size("60 x 90 cm")
        .with_sold(true);
    let card = CardModel::new(&artwork);
    assert_eq!(card.availability.label(), "Sold");
    let meta = card.metadata.expect("metadata line");
    assert_eq!(meta.year, None);
    assert_eq!(meta.size.as_deref(), Some("60 x 90 cm"));
}

#[test]
fn test_narrow_tap_opens_modal() {
    let card = CardModel::new(&sunset());
    let mut state = CardState::new();

    match route_card_click(&FixedViewport(390.0)) {
        ClickRoute::OpenModal => {
            state.apply(CardEvent::ViewDetails, &card);
        }
        ClickRoute::Delegate => panic!("narrow viewport should not delegate"),
    }
    assert!(state.modal_open());

    state.apply(CardEvent::CloseModal, &card);
    assert!(!state.modal_open());
}

#[test]
fn test_wide_click_delegates() {
    let card = CardModel::new(&sunset());
    let mut state = CardState::new();
    let mut delegated = 0;

    match route_card_click(&FixedViewport(1280.0)) {
        ClickRoute::OpenModal => {
            state.apply(CardEvent::ViewDetails, &card);
        }
        ClickRoute::Delegate => delegated += 1,
    }
    assert_eq!(delegated, 1);
    assert!(!state.modal_open());

    // Only the explicit control opens the modal on wide layouts
    state.apply(CardEvent::ViewDetails, &card);
    assert!(state.modal_open());
}
