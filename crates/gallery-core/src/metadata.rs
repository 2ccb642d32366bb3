//! Metadata extraction from free-text titles

use std::sync::OnceLock;

use regex::Regex;

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode numerals
    PATTERN.get_or_init(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"))
}

/// Returns the first run of four digits in `title`, if any.
///
/// The match is unanchored and not range-checked, so "9999" is accepted.
/// Inside a longer run of digits the first four are returned.
pub fn extract_year(title: &str) -> Option<String> {
    year_pattern().find(title).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_year_anywhere() {
        assert_eq!(extract_year("Sunset 1998").as_deref(), Some("1998"));
        assert_eq!(extract_year("1872 Impression").as_deref(), Some("1872"));
        assert_eq!(extract_year("Study (c.1910), oil").as_deref(), Some("1910"));
    }

    #[test]
    fn returns_first_match() {
        assert_eq!(extract_year("Diptych 2001 / 2003").as_deref(), Some("2001"));
    }

    #[test]
    fn no_plausibility_check() {
        assert_eq!(extract_year("Code 9999").as_deref(), Some("9999"));
    }

    #[test]
    fn longer_runs_yield_first_four_digits() {
        assert_eq!(extract_year("Lot 123456").as_deref(), Some("1234"));
    }

    #[test]
    fn none_without_four_digit_run() {
        assert_eq!(extract_year("Untitled"), None);
        assert_eq!(extract_year("No. 5 in 3 parts"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(extract_year("Composition ١٩٩٨"), None);
    }
}
