//! Pointer Parallax Loop
//!
//! A smoothed 2D offset eased toward the normalized pointer position,
//! rendered as an inline translation on every `data-depth` element each
//! frame. Input and render rates are decoupled: pointer events only move
//! the target, the per-frame step does the easing and the writes.

use glide_dom::{DomSurface, NodeId, Translate3d};

use crate::config::ParallaxConfig;
use crate::motion_pref::MotionPreference;

/// Attribute naming an element's parallax depth factor
pub const DEPTH_MARKER: &str = "data-depth";

/// Smoothed offset state, eased toward the pointer target every frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxState {
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
}

fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

/// Frame-paced parallax renderer
#[derive(Debug)]
pub struct ParallaxLoop {
    config: ParallaxConfig,
    state: ParallaxState,
    elements: Vec<NodeId>,
}

impl ParallaxLoop {
    /// Snapshot marked elements. Returns `None` when motion is reduced
    /// or nothing is marked; no loop exists in either case.
    pub fn init(
        surface: &dyn DomSurface,
        config: ParallaxConfig,
        motion: MotionPreference,
    ) -> Option<Self> {
        if motion.is_reduced() {
            return None;
        }
        let elements = surface.query_marked(DEPTH_MARKER);
        if elements.is_empty() {
            return None;
        }

        tracing::debug!(count = elements.len(), "parallax loop started");
        Some(Self {
            config,
            state: ParallaxState::default(),
            elements,
        })
    }

    /// Current eased state
    pub fn state(&self) -> ParallaxState {
        self.state
    }

    /// Pointer moved: retarget from viewport-normalized coordinates.
    /// Each axis lands in [-1, 1] across the viewport.
    pub fn pointer_moved(&mut self, surface: &dyn DomSurface, client_x: f64, client_y: f64) {
        let viewport = surface.viewport();
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.state.target_x = (client_x / viewport.width - 0.5) * 2.0;
        self.state.target_y = (client_y / viewport.height - 0.5) * 2.0;
    }

    /// One frame: ease toward the target, then render every element's
    /// translation. Depth is re-read from the attribute each frame;
    /// unparseable or missing values render as depth 0.
    pub fn step(&mut self, surface: &mut dyn DomSurface) {
        self.state.x = lerp(self.state.x, self.state.target_x, self.config.ease);
        self.state.y = lerp(self.state.y, self.state.target_y, self.config.ease);

        for &node in &self.elements {
            let depth = surface
                .attribute(node, DEPTH_MARKER)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0);
            surface.set_transform(
                node,
                Translate3d::new(
                    self.state.x * depth * self.config.range,
                    self.state.y * depth * self.config.range,
                    0.0,
                ),
            );
        }
    }
}
