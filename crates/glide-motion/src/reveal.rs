//! Reveal Coordinator
//!
//! One-shot scroll reveals. Elements marked `data-animate` get the
//! `is-visible` class the first time enough of their box enters the
//! observation region (the viewport minus a bottom margin), and are then
//! dropped from the watch list for good. Under reduced motion every
//! marked element is revealed synchronously and nothing is watched.

use glide_dom::{DomSurface, NodeId};

use crate::config::RevealConfig;
use crate::motion_pref::MotionPreference;

/// Attribute marking an element for reveal treatment
pub const ANIMATE_MARKER: &str = "data-animate";
/// Class flag set on revealed elements
pub const VISIBLE_CLASS: &str = "is-visible";

/// One-shot reveal watcher
#[derive(Debug)]
pub struct RevealCoordinator {
    config: RevealConfig,
    pending: Vec<NodeId>,
}

impl RevealCoordinator {
    /// Snapshot marked elements and set up watching. Reduced motion
    /// reveals everything immediately; an empty marked set registers no
    /// watch state at all.
    pub fn init(
        surface: &mut dyn DomSurface,
        config: RevealConfig,
        motion: MotionPreference,
    ) -> Self {
        let marked = surface.query_marked(ANIMATE_MARKER);
        if marked.is_empty() {
            return Self {
                config,
                pending: Vec::new(),
            };
        }

        if motion.is_reduced() {
            for node in &marked {
                surface.add_class(*node, VISIBLE_CLASS);
            }
            return Self {
                config,
                pending: Vec::new(),
            };
        }

        tracing::debug!(count = marked.len(), "watching elements for reveal");
        Self {
            config,
            pending: marked,
        }
    }

    /// Elements still being watched
    pub fn watch_count(&self) -> usize {
        self.pending.len()
    }

    /// Evaluate every watched element against the current geometry,
    /// revealing and permanently unwatching those that qualify.
    pub fn check(&mut self, surface: &mut dyn DomSurface) {
        if self.pending.is_empty() {
            return;
        }

        let region = surface.viewport().shrunk_bottom(self.config.bottom_margin);
        let threshold = self.config.threshold;

        let mut revealed = Vec::new();
        self.pending.retain(|&node| {
            let rect = surface.bounding_rect(node);
            let visible = match rect.intersection(&region) {
                // Degenerate boxes count as fully visible while they
                // touch the region.
                Some(_) if rect.area() <= 0.0 => true,
                Some(overlap) => overlap.area() / rect.area() >= threshold,
                None => false,
            };
            if visible {
                revealed.push(node);
            }
            !visible
        });

        for node in revealed {
            surface.add_class(node, VISIBLE_CLASS);
        }
    }
}
