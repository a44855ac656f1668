//! Headless Surface
//!
//! In-memory [`DomSurface`] implementation. Elements live in an arena in
//! document order; geometry is whatever the test or simulation assigns.
//! Scroll requests are applied instantly and the requested behavior is
//! recorded so callers can assert on it.

use std::collections::{HashMap, HashSet};

use crate::surface::DomSurface;
use crate::{NodeId, Rect, ScrollBehavior, Translate3d, Viewport};

/// One element in the headless arena
#[derive(Debug, Clone, Default)]
pub struct HeadlessElement {
    /// Document id (`<div id="...">`)
    pub id: Option<String>,
    pub classes: HashSet<String>,
    pub attributes: HashMap<String, String>,
    pub text: String,
    /// Bounding rect in viewport coordinates
    pub rect: Rect,
    /// Offset from the document top
    pub offset_top: f64,
    /// Last inline transform written, if any
    pub transform: Option<Translate3d>,
    /// Set once `remove_element` detaches the node
    pub detached: bool,
}

/// In-memory document surface
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    elements: Vec<HeadlessElement>,
    viewport: Viewport,
    scroll_y: f64,
    reduced_motion: Option<bool>,
    last_scroll_request: Option<(f64, ScrollBehavior)>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Append an element in document order
    pub fn insert(&mut self, element: HeadlessElement) -> NodeId {
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    /// Append an element carrying one marker attribute
    pub fn insert_marked(&mut self, marker: &str, value: &str, rect: Rect) -> NodeId {
        self.insert(HeadlessElement {
            attributes: [(marker.to_string(), value.to_string())].into(),
            rect,
            ..Default::default()
        })
    }

    /// Append an element with a document id and vertical offset
    pub fn insert_section(&mut self, id: &str, offset_top: f64) -> NodeId {
        self.insert(HeadlessElement {
            id: Some(id.to_string()),
            offset_top,
            ..Default::default()
        })
    }

    pub fn element(&self, node: NodeId) -> Option<&HeadlessElement> {
        self.elements.get(node.0 as usize).filter(|e| !e.detached)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut HeadlessElement> {
        self.elements
            .get_mut(node.0 as usize)
            .filter(|e| !e.detached)
    }

    /// Move the scroll position directly (simulating user scrolling)
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Configure the reduced-motion probe (`None` = capability absent)
    pub fn set_reduced_motion(&mut self, value: Option<bool>) {
        self.reduced_motion = value;
    }

    /// Last `scroll_to` request, if any
    pub fn last_scroll_request(&self) -> Option<(f64, ScrollBehavior)> {
        self.last_scroll_request
    }

    /// True once `remove_element` was called for the node
    pub fn is_detached(&self, node: NodeId) -> bool {
        self.elements
            .get(node.0 as usize)
            .is_some_and(|e| e.detached)
    }

    /// Apply a mutation, dropping it when the handle no longer resolves.
    fn write(&mut self, node: NodeId, op: &'static str, apply: impl FnOnce(&mut HeadlessElement)) {
        match self.element_mut(node) {
            Some(element) => apply(element),
            None => tracing::trace!(node = node.0, op, "write to stale handle dropped"),
        }
    }
}

impl DomSurface for HeadlessSurface {
    fn query_marked(&self, marker: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.detached && e.attributes.contains_key(marker))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|e| !e.detached && e.id.as_deref() == Some(id))
            .map(|i| NodeId(i as u32))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.write(node, "set_attribute", |e| {
            e.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        self.write(node, "remove_attribute", |e| {
            e.attributes.remove(name);
        });
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.write(node, "add_class", |e| {
            e.classes.insert(class.to_string());
        });
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.write(node, "remove_class", |e| {
            e.classes.remove(class);
        });
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|e| e.text.clone())
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.write(node, "set_text", |e| {
            e.text = text.to_string();
        });
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.element(node).map(|e| e.rect).unwrap_or_default()
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.element(node).map(|e| e.offset_top).unwrap_or(0.0)
    }

    fn set_transform(&mut self, node: NodeId, transform: Translate3d) {
        self.write(node, "set_transform", |e| {
            e.transform = Some(transform);
        });
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        self.last_scroll_request = Some((y, behavior));
        self.scroll_y = y;
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.reduced_motion
    }

    fn remove_element(&mut self, node: NodeId) {
        if let Some(e) = self.elements.get_mut(node.0 as usize) {
            e.detached = true;
        }
    }
}
