//! Document Surface Trait
//!
//! The capability set the engine needs from a host: query elements by
//! declarative marker, read/write class flags and attributes, read
//! geometry, write inline transforms, and drive scrolling. Everything is
//! best-effort; operations on stale handles are silently ignored.

use crate::{NodeId, Rect, ScrollBehavior, Translate3d, Viewport};

/// Host-provided document surface
pub trait DomSurface {
    /// Elements carrying the given attribute marker, in document order
    fn query_marked(&self, marker: &str) -> Vec<NodeId>;

    /// Element with the given id
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Read an attribute value
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Write an attribute value
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Remove an attribute
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    /// Check for a class flag
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Add a class flag (no-op if already present)
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove a class flag
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Force a class flag on or off
    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Text content
    fn text(&self, node: NodeId) -> Option<String>;

    /// Replace text content
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Bounding rect in viewport coordinates
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Vertical offset from the document top
    fn offset_top(&self, node: NodeId) -> f64;

    /// Write an inline transform
    fn set_transform(&mut self, node: NodeId, transform: Translate3d);

    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll position
    fn scroll_y(&self) -> f64;

    /// Request a scroll to the given vertical position
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);

    /// Reduced-motion preference; `None` when the capability is absent.
    /// Callers treat `None` as "motion allowed".
    fn prefers_reduced_motion(&self) -> Option<bool>;

    /// Detach an element from the document
    fn remove_element(&mut self, node: NodeId);
}
