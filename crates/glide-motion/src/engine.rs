//! Motion Engine
//!
//! Composition root for the animation core. Initializes every component
//! against the page-ready DOM snapshot and fans host events out to them.
//! The components never talk to each other; all recurring state lives
//! here.

use glide_dom::{DomSurface, NodeId};

use crate::config::MotionConfig;
use crate::motion_pref::MotionPreference;
use crate::nav::ActiveSectionTracker;
use crate::parallax::ParallaxLoop;
use crate::reveal::RevealCoordinator;
use crate::scheduler::FrameScheduler;
use crate::sticky::StickyNav;

/// Document id of the nav bar landmark
pub const NAV_ID: &str = "nav";

/// Page animation core
#[derive(Debug)]
pub struct MotionEngine {
    motion: MotionPreference,
    reveal: RevealCoordinator,
    tracker: ActiveSectionTracker,
    sticky: Option<StickyNav>,
    parallax: Option<ParallaxLoop>,
    frames_rendered: u64,
}

impl MotionEngine {
    /// Initialize against the current DOM snapshot. Runs the initial
    /// sticky/active-nav/reveal evaluation, and requests the first
    /// parallax frame if (and only if) a parallax loop exists.
    pub fn init(
        surface: &mut dyn DomSurface,
        config: MotionConfig,
        scheduler: &mut dyn FrameScheduler,
    ) -> Self {
        let motion = MotionPreference::probe(surface);
        tracing::debug!(?motion, "initializing motion engine");

        let reveal = RevealCoordinator::init(surface, config.reveal, motion);
        let tracker = ActiveSectionTracker::init(surface, config.nav);
        let sticky = surface
            .element_by_id(NAV_ID)
            .map(|nav| StickyNav::new(nav, config.sticky));
        let parallax = ParallaxLoop::init(surface, config.parallax, motion);

        let mut engine = Self {
            motion,
            reveal,
            tracker,
            sticky,
            parallax,
            frames_rendered: 0,
        };

        engine.evaluate_scroll_state(surface);
        if engine.parallax.is_some() {
            scheduler.request_frame();
        }
        engine
    }

    /// The gate evaluated at init
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// True while the frame chain should keep running
    pub fn wants_frames(&self) -> bool {
        self.parallax.is_some()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn reveal(&self) -> &RevealCoordinator {
        &self.reveal
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    /// Scroll event: sticky flag, active nav, and reveal checks
    pub fn on_scroll(&mut self, surface: &mut dyn DomSurface) {
        self.evaluate_scroll_state(surface);
    }

    /// Pointer moved in viewport coordinates
    pub fn on_pointer_move(&mut self, surface: &dyn DomSurface, client_x: f64, client_y: f64) {
        if let Some(parallax) = &mut self.parallax {
            parallax.pointer_moved(surface, client_x, client_y);
        }
    }

    /// Nav item clicked (host has already suppressed default navigation)
    pub fn on_nav_click(&mut self, surface: &mut dyn DomSurface, item: NodeId) {
        self.tracker.clicked(surface, item);
    }

    /// One animation frame: ease and render parallax, then request the
    /// next frame. Does nothing when no loop was started.
    pub fn on_frame(&mut self, surface: &mut dyn DomSurface, scheduler: &mut dyn FrameScheduler) {
        if let Some(parallax) = &mut self.parallax {
            parallax.step(surface);
            self.frames_rendered += 1;
            scheduler.request_frame();
        }
    }

    fn evaluate_scroll_state(&mut self, surface: &mut dyn DomSurface) {
        if let Some(sticky) = &self.sticky {
            sticky.update(surface);
        }
        self.tracker.update(surface);
        self.reveal.check(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use glide_dom::{HeadlessSurface, Rect, Viewport};

    #[test]
    fn test_init_without_any_markers_is_inert() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let mut scheduler = ManualScheduler::new();
        let mut engine =
            MotionEngine::init(&mut surface, MotionConfig::default(), &mut scheduler);

        assert!(!engine.wants_frames());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(engine.reveal().watch_count(), 0);
        assert!(engine.tracker().is_empty());

        // Events on an inert engine are harmless.
        engine.on_scroll(&mut surface);
        engine.on_frame(&mut surface, &mut scheduler);
        assert_eq!(engine.frames_rendered(), 0);
    }

    #[test]
    fn test_init_starts_frame_chain_only_with_parallax() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        surface.insert_marked("data-depth", "0.4", Rect::default());
        let mut scheduler = ManualScheduler::new();
        let mut engine =
            MotionEngine::init(&mut surface, MotionConfig::default(), &mut scheduler);

        assert!(engine.wants_frames());
        assert_eq!(scheduler.pending(), 1);

        // Each frame schedules exactly the next one.
        assert!(scheduler.take_pending());
        engine.on_frame(&mut surface, &mut scheduler);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(engine.frames_rendered(), 1);
    }

    #[test]
    fn test_reduced_motion_skips_parallax_entirely() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        surface.insert_marked("data-depth", "0.4", Rect::default());
        surface.set_reduced_motion(Some(true));

        let mut scheduler = ManualScheduler::new();
        let engine = MotionEngine::init(&mut surface, MotionConfig::default(), &mut scheduler);

        assert_eq!(engine.motion(), MotionPreference::Reduced);
        assert!(!engine.wants_frames());
        assert_eq!(scheduler.requested_total(), 0);
    }

    #[test]
    fn test_init_applies_current_scroll_state() {
        let mut surface = HeadlessSurface::new(Viewport::new(1000.0, 800.0));
        let nav = surface.insert_section(NAV_ID, 0.0);
        surface.set_scroll_y(200.0);

        let mut scheduler = ManualScheduler::new();
        MotionEngine::init(&mut surface, MotionConfig::default(), &mut scheduler);

        // Page restored mid-document starts sticky.
        assert!(surface.has_class(nav, "is-sticky"));
    }
}
