//! Property-based tests for URL resolution and metadata extraction
//!
//! Uses proptest to verify the resolver and extractor over generated titles
//! and URLs.

use gallery_core::resolver::{encode_uri_component, placeholder_color, BLOCKED_SOURCE};
use gallery_core::{extract_year, resolve_image_url};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Digit-free text around a title's year
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ,.()]{0,20}").expect("valid regex")
}

/// Titles where digits never appear more than three in a row
fn yearless_title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-zA-Z .]{1,6}[0-9]{0,3}){1,8}").expect("valid regex")
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 &/?#éü🎨-]{1,60}").expect("valid regex")
}

fn image_url_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-z]{1,10}\\.example\\.com/[a-z0-9/]{1,20}\\.(jpg|png|webp)")
        .expect("valid regex")
}

fn blocked_url_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("https://([a-z0-9]{1,8}\\.)?").expect("valid regex"),
        prop::string::string_regex("/[a-z0-9/?=&]{0,30}").expect("valid regex"),
    )
        .prop_map(|(prefix, suffix)| format!("{prefix}{BLOCKED_SOURCE}{suffix}"))
}

/// Two different titles sharing one length
fn same_length_titles() -> impl Strategy<Value = (String, String)> {
    (0..60usize).prop_flat_map(|n| {
        (
            prop::string::string_regex(&format!("[a-z]{{{n}}}")).expect("valid regex"),
            prop::string::string_regex(&format!("[A-Z0-9 ]{{{n}}}")).expect("valid regex"),
        )
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A 4-digit run embedded in digit-free text is always found
    #[test]
    fn extracts_embedded_year(
        prefix in word_strategy(),
        year in "[0-9]{4}",
        suffix in word_strategy(),
    ) {
        let title = format!("{prefix}{year}{suffix}");
        prop_assert_eq!(extract_year(&title), Some(year));
    }

    /// Titles without four consecutive digits yield no year
    #[test]
    fn no_year_without_four_digit_run(title in yearless_title_strategy()) {
        prop_assert_eq!(extract_year(&title), None);
    }

    /// Extracted years are always four ASCII digits taken from the title
    #[test]
    fn extracted_year_is_substring(title in title_strategy()) {
        if let Some(year) = extract_year(&title) {
            prop_assert_eq!(year.len(), 4);
            prop_assert!(year.bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(title.contains(&year));
        }
    }

    /// Regular image URLs pass through untouched
    #[test]
    fn regular_urls_unchanged(url in image_url_strategy(), title in title_strategy()) {
        prop_assert_eq!(resolve_image_url(&url, &title), url);
    }

    /// Blocked sources always become a 400x300 placeholder carrying the title
    #[test]
    fn blocked_urls_become_placeholders(url in blocked_url_strategy(), title in title_strategy()) {
        let resolved = resolve_image_url(&url, &title);
        let expected_suffix = format!("?text={}", encode_uri_component(&title));
        prop_assert!(resolved.starts_with("https://via.placeholder.com/400x300/"));
        prop_assert!(resolved.ends_with(&expected_suffix));
        prop_assert!(!resolved.contains(BLOCKED_SOURCE));
    }

    /// Colour choice depends only on title length
    #[test]
    fn color_determined_by_length((a, b) in same_length_titles()) {
        prop_assert_eq!(placeholder_color(&a), placeholder_color(&b));
    }

    /// Encoded text contains only unreserved characters and escapes
    #[test]
    fn encoded_title_is_url_safe(title in title_strategy()) {
        let encoded = encode_uri_component(&title);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c)));
    }
}
