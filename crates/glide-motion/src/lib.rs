//! Glide Motion - Scroll and Pointer Animation Core
//!
//! The continuously-recurring half of the page behavior layer: one-shot
//! scroll reveals, scroll-derived active-nav tracking, the sticky nav
//! threshold, and a pointer-driven parallax loop paced by an explicit
//! frame scheduler. All state is owned by [`MotionEngine`]; the host
//! delivers events and steps frames.

mod config;
mod engine;
mod motion_pref;
mod nav;
mod parallax;
mod reveal;
mod scheduler;
mod sticky;

pub use config::{MotionConfig, NavConfig, ParallaxConfig, RevealConfig, StickyConfig};
pub use engine::{MotionEngine, NAV_ID};
pub use motion_pref::MotionPreference;
pub use nav::{ActiveSectionTracker, ACTIVE_CLASS, SECTION_MARKER};
pub use parallax::{ParallaxLoop, ParallaxState, DEPTH_MARKER};
pub use reveal::{RevealCoordinator, ANIMATE_MARKER, VISIBLE_CLASS};
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use sticky::{StickyNav, STICKY_CLASS};
