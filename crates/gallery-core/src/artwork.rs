//! Artwork record
//!
//! The read-only input a card is rendered from.

use serde::{Deserialize, Serialize};

use crate::metadata::extract_year;

/// A single artwork in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Free-text title, may embed a 4-digit year ("Sunset 1998")
    pub title: String,
    /// Source image location
    pub url: String,
    /// Optional display string such as dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Whether the piece has been sold
    #[serde(default)]
    pub sold: bool,
}

impl Artwork {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            size: None,
            sold: false,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    /// Sales badge for this artwork
    pub fn availability(&self) -> Availability {
        if self.sold {
            Availability::Sold
        } else {
            Availability::Available
        }
    }

    /// Year and size line shown under the title.
    ///
    /// Returns `None` when the title carries no year and no size is set.
    pub fn metadata_line(&self) -> Option<MetadataLine> {
        let year = extract_year(&self.title);
        let size = self.size.clone().filter(|s| !s.is_empty());
        if year.is_none() && size.is_none() {
            return None;
        }
        Some(MetadataLine { year, size })
    }
}

/// Sold/available badge state
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Availability {
    Sold,
    Available,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Sold => "Sold",
            Availability::Available => "Available",
        }
    }

    /// Returns the CSS modifier class for the badge
    pub fn class(&self) -> &'static str {
        match self {
            Availability::Sold => "badge--sold",
            Availability::Available => "badge--available",
        }
    }
}

/// Extracted metadata shown on the card; at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataLine {
    pub year: Option<String>,
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_follows_sold_flag() {
        let art = Artwork::new("Harbor", "https://img.example.com/h.jpg");
        assert_eq!(art.availability(), Availability::Available);
        assert_eq!(art.availability().label(), "Available");

        let art = art.with_sold(true);
        assert_eq!(art.availability(), Availability::Sold);
        assert_eq!(art.availability().label(), "Sold");
        assert_eq!(art.availability().class(), "badge--sold");
    }

    #[test]
    fn metadata_line_absent_without_year_or_size() {
        let art = Artwork::new("Untitled", "https://img.example.com/u.jpg");
        assert_eq!(art.metadata_line(), None);
    }

    #[test]
    fn metadata_line_with_year_only() {
        let art = Artwork::new("Sunset 1998", "https://img.example.com/a.jpg");
        let line = art.metadata_line().unwrap();
        assert_eq!(line.year.as_deref(), Some("1998"));
        assert_eq!(line.size, None);
    }

    #[test]
    fn metadata_line_with_size_only() {
        let art = Artwork::new("Untitled", "https://img.example.com/u.jpg").with_size("60x90cm");
        let line = art.metadata_line().unwrap();
        assert_eq!(line.year, None);
        assert_eq!(line.size.as_deref(), Some("60x90cm"));
    }

    #[test]
    fn empty_size_counts_as_absent() {
        let art = Artwork::new("Untitled", "https://img.example.com/u.jpg").with_size("");
        assert_eq!(art.metadata_line(), None);
    }

    #[test]
    fn deserialize_with_defaults() {
        let art: Artwork =
            serde_json::from_str(r#"{"title":"Sea 2001","url":"https://img.example.com/s.jpg"}"#)
                .unwrap();
        assert_eq!(art.size, None);
        assert!(!art.sold);
    }
}
