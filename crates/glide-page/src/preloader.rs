//! Preloader Teardown
//!
//! Fades the preloader out once the host reports the load event, then
//! detaches it on the transition end or a fallback timer, whichever
//! comes first. Reduced motion skips the fade delay.

use glide_dom::{DomSurface, NodeId};
use glide_motion::MotionPreference;

use crate::page::PageAction;
use crate::timers::{TimerId, TimerQueue};

/// Document id of the preloader element
pub const PRELOADER_ID: &str = "preloader";
/// Class flag on the body once the page is presentable
pub const LOADED_CLASS: &str = "is-loaded";
/// Class flag starting the preloader's fade-out transition
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Fade delay before the preloader starts hiding
const FADE_DELAY_MS: u64 = 280;
/// Fallback removal delay when no transition end arrives
const REMOVE_FALLBACK_MS: u64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Waiting,
    FadingOut,
    Removed,
}

/// Preloader lifecycle driver
#[derive(Debug)]
pub struct Preloader {
    element: NodeId,
    body: NodeId,
    state: State,
    fallback: Option<TimerId>,
}

impl Preloader {
    /// Bind to the preloader element; `None` when the page has none
    /// (the caller then marks the body loaded right away).
    pub fn bind(surface: &dyn DomSurface, body: NodeId) -> Option<Self> {
        let element = surface.element_by_id(PRELOADER_ID)?;
        Some(Self {
            element,
            body,
            state: State::Waiting,
            fallback: None,
        })
    }

    /// Host load event: start the fade, immediately under reduced motion
    pub fn on_load(
        &mut self,
        surface: &mut dyn DomSurface,
        motion: MotionPreference,
        timers: &mut TimerQueue<PageAction>,
    ) {
        if self.state != State::Waiting {
            return;
        }
        if motion.is_reduced() {
            self.finalize(surface, timers);
        } else {
            timers.schedule(FADE_DELAY_MS, PageAction::FinalizePreloader);
        }
    }

    /// Mark the body loaded, start the hide transition, and arm the
    /// fallback removal
    pub fn finalize(&mut self, surface: &mut dyn DomSurface, timers: &mut TimerQueue<PageAction>) {
        if self.state != State::Waiting {
            return;
        }
        surface.add_class(self.body, LOADED_CLASS);
        surface.add_class(self.element, HIDDEN_CLASS);
        self.fallback = Some(timers.schedule(REMOVE_FALLBACK_MS, PageAction::RemovePreloader));
        self.state = State::FadingOut;
    }

    /// Detach the preloader; idempotent across transition end and the
    /// fallback timer
    pub fn remove(&mut self, surface: &mut dyn DomSurface, timers: &mut TimerQueue<PageAction>) {
        if self.state != State::FadingOut {
            return;
        }
        if let Some(id) = self.fallback.take() {
            timers.cancel(id);
        }
        surface.remove_element(self.element);
        self.state = State::Removed;
        tracing::debug!("preloader removed");
    }

    pub fn is_removed(&self) -> bool {
        self.state == State::Removed
    }
}
