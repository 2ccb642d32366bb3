//! Viewport classification
//!
//! Cards route clicks differently on narrow screens. The width is read
//! through [`ViewportProbe`] at click time so the routing can be driven
//! by a real window or by a fixed value in tests.

/// Widths strictly below this (logical px) count as narrow.
pub const NARROW_BREAKPOINT: f64 = 768.0;

/// Source of the current viewport width in logical pixels
pub trait ViewportProbe {
    fn logical_width(&self) -> f64;

    fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.logical_width())
    }
}

/// Viewport with a fixed width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f64);

impl ViewportProbe for FixedViewport {
    fn logical_width(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Phones and small windows: the whole card is the tap target
    Narrow,
    /// Hover-capable layouts with a separate "View details" control
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < NARROW_BREAKPOINT {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, ViewportClass::Narrow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn fixed_viewport_classifies() {
        assert!(FixedViewport(375.0).class().is_narrow());
        assert!(!FixedViewport(1024.0).class().is_narrow());
    }
}
