//! Viewport probe for the desktop window
//!
//! Cards ask for the viewport width at click time. By default the width
//! comes from the hosting desktop window; a parent can provide a
//! [`ViewportHandle`] context to override it.
//!
//! ```rust,ignore
//! // Force every card below this point into the narrow layout
//! use_context_provider(|| ViewportHandle::new(FixedViewport(390.0)));
//! ```

use std::rc::Rc;

use dioxus::desktop::DesktopContext;
use dioxus::prelude::*;
use gallery_core::ViewportProbe;

/// Reads the logical inner width of the desktop window
pub struct DesktopViewport {
    window: DesktopContext,
}

impl DesktopViewport {
    pub fn new(window: DesktopContext) -> Self {
        Self { window }
    }
}

impl ViewportProbe for DesktopViewport {
    fn logical_width(&self) -> f64 {
        let window = &self.window.window;
        window
            .inner_size()
            .to_logical::<f64>(window.scale_factor())
            .width
    }
}

/// Shared, clonable viewport probe used as context
#[derive(Clone)]
pub struct ViewportHandle(Rc<dyn ViewportProbe>);

impl ViewportHandle {
    pub fn new(probe: impl ViewportProbe + 'static) -> Self {
        Self(Rc::new(probe))
    }

    pub fn probe(&self) -> &dyn ViewportProbe {
        self.0.as_ref()
    }
}

/// Hook returning the viewport probe for the current component.
///
/// Uses a provided [`ViewportHandle`] context if present, otherwise the
/// desktop window.
pub fn use_viewport() -> ViewportHandle {
    use_hook(|| {
        try_consume_context::<ViewportHandle>()
            .unwrap_or_else(|| ViewportHandle::new(DesktopViewport::new(dioxus::desktop::window())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{FixedViewport, ViewportClass};

    #[test]
    fn handle_delegates_to_probe() {
        let handle = ViewportHandle::new(FixedViewport(500.0));
        assert_eq!(handle.probe().logical_width(), 500.0);
        assert_eq!(handle.probe().class(), ViewportClass::Narrow);

        let cloned = handle.clone();
        assert_eq!(cloned.probe().logical_width(), 500.0);
    }
}
