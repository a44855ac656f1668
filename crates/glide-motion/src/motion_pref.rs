//! Motion Preference Gate
//!
//! Evaluated once at engine init and immutable afterwards. A host that
//! cannot report the preference fails open to allowing motion.

use glide_dom::DomSurface;

/// User motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Allowed,
    Reduced,
}

impl MotionPreference {
    /// Probe the surface once; absence of the capability allows motion
    pub fn probe(surface: &dyn DomSurface) -> Self {
        match surface.prefers_reduced_motion() {
            Some(true) => Self::Reduced,
            Some(false) | None => Self::Allowed,
        }
    }

    pub fn is_reduced(&self) -> bool {
        *self == Self::Reduced
    }
}
