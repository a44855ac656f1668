//! Back To Top Control
//!
//! Shows the control once the page has scrolled deep enough and jumps
//! back to the origin on click.

use glide_dom::{DomSurface, NodeId, ScrollBehavior};

/// Document id of the control
pub const BACK_TO_TOP_ID: &str = "backToTop";
/// Class flag while the control is shown
pub const VISIBLE_CLASS: &str = "is-visible";

/// Scroll depth (strict) past which the control shows
const SHOW_THRESHOLD: f64 = 500.0;

/// Scroll-to-origin control
#[derive(Debug)]
pub struct BackToTop {
    button: NodeId,
}

impl BackToTop {
    /// Bind to the control; `None` when the page has none
    pub fn bind(surface: &dyn DomSurface) -> Option<Self> {
        let button = surface.element_by_id(BACK_TO_TOP_ID)?;
        Some(Self { button })
    }

    /// Reflect scroll depth into the visibility flag
    pub fn on_scroll(&self, surface: &mut dyn DomSurface) {
        let visible = surface.scroll_y() > SHOW_THRESHOLD;
        surface.set_class(self.button, VISIBLE_CLASS, visible);
    }

    /// Click: smooth scroll back to the top
    pub fn clicked(&self, surface: &mut dyn DomSurface) {
        surface.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}
