//! Active-Section Tracking
//!
//! Derives the single "current" navigation entry from the scroll
//! position: the lowest section the viewport has reached, biased by a
//! fixed lookahead. Nav items declare their section through the
//! `data-section` marker; the matching section element is resolved by id
//! on every tick so late layout changes are picked up.

use glide_dom::{DomSurface, NodeId, ScrollBehavior};

use crate::config::NavConfig;

/// Attribute naming the section a nav item controls
pub const SECTION_MARKER: &str = "data-section";
/// Class flag on the active nav item
pub const ACTIVE_CLASS: &str = "is-active";

/// One registered nav entry
#[derive(Debug, Clone)]
struct NavEntry {
    item: NodeId,
    section: String,
}

/// Scroll-derived active-nav tracker
#[derive(Debug)]
pub struct ActiveSectionTracker {
    config: NavConfig,
    entries: Vec<NavEntry>,
}

impl ActiveSectionTracker {
    /// Snapshot nav items in document order
    pub fn init(surface: &dyn DomSurface, config: NavConfig) -> Self {
        let entries = surface
            .query_marked(SECTION_MARKER)
            .into_iter()
            .filter_map(|item| {
                let section = surface.attribute(item, SECTION_MARKER)?;
                Some(NavEntry { item, section })
            })
            .collect();
        Self { config, entries }
    }

    /// True when no nav items carry the section marker
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recompute the active item from the current scroll position.
    /// At most one item carries the active flag afterwards.
    pub fn update(&self, surface: &mut dyn DomSurface) {
        let scroll_position = surface.scroll_y() + self.config.lookahead;

        // Last entry whose section has been reached wins; ties between
        // equal offsets resolve to the later entry.
        let mut current: Option<NodeId> = None;
        for entry in &self.entries {
            if let Some(section) = surface.element_by_id(&entry.section) {
                if surface.offset_top(section) <= scroll_position {
                    current = Some(entry.item);
                }
            }
        }

        for entry in &self.entries {
            surface.remove_class(entry.item, ACTIVE_CLASS);
        }
        if let Some(item) = current {
            surface.add_class(item, ACTIVE_CLASS);
        }
    }

    /// A nav item was clicked: activate it immediately and ask the host
    /// to scroll to its section. The next scroll tick recomputes from
    /// position and may override this.
    pub fn clicked(&self, surface: &mut dyn DomSurface, item: NodeId) {
        let Some(entry) = self.entries.iter().find(|e| e.item == item) else {
            return;
        };

        for e in &self.entries {
            surface.remove_class(e.item, ACTIVE_CLASS);
        }
        surface.add_class(item, ACTIVE_CLASS);

        if let Some(section) = surface.element_by_id(&entry.section) {
            let top = surface.offset_top(section);
            surface.scroll_to(top, ScrollBehavior::Smooth);
        }
    }

    /// The nav item currently flagged active, if any
    pub fn active_item(&self, surface: &dyn DomSurface) -> Option<NodeId> {
        self.entries
            .iter()
            .map(|e| e.item)
            .find(|&item| surface.has_class(item, ACTIVE_CLASS))
    }
}
