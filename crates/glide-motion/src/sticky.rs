//! Sticky Nav Toggle
//!
//! Single boolean class on the nav bar, driven by a strict scroll
//! threshold. Evaluated at init so a page restored mid-document starts
//! in the right state.

use glide_dom::{DomSurface, NodeId};

use crate::config::StickyConfig;

/// Class flag on the nav bar while stuck
pub const STICKY_CLASS: &str = "is-sticky";

/// Scroll-threshold toggle for the nav bar
#[derive(Debug)]
pub struct StickyNav {
    config: StickyConfig,
    nav: NodeId,
}

impl StickyNav {
    pub fn new(nav: NodeId, config: StickyConfig) -> Self {
        Self { config, nav }
    }

    /// Reflect the current scroll position into the class flag.
    /// The threshold is strict: exactly at the threshold is not sticky.
    pub fn update(&self, surface: &mut dyn DomSurface) {
        let sticky = surface.scroll_y() > self.config.threshold;
        surface.set_class(self.nav, STICKY_CLASS, sticky);
    }
}
