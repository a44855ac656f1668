//! Engine Tuning
//!
//! Thresholds and easing factors, loadable from JSON. Defaults match the
//! shipped page styling.

use serde::{Deserialize, Serialize};

/// Reveal coordinator tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element's own area that must be inside the
    /// observation region before it reveals
    pub threshold: f64,
    /// Fraction of the viewport height cut off the bottom of the
    /// observation region
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            bottom_margin: 0.10,
        }
    }
}

/// Active-section tracker tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Pixels of lookahead added to the scroll position
    pub lookahead: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { lookahead: 100.0 }
    }
}

/// Parallax loop tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Per-frame interpolation factor toward the pointer target
    pub ease: f64,
    /// Pixel range of a depth-1.0 element at full pointer deflection
    pub range: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            ease: 0.08,
            range: 30.0,
        }
    }
}

/// Sticky-nav tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Scroll position must exceed this (strictly) to stick
    pub threshold: f64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self { threshold: 32.0 }
    }
}

/// Complete engine tuning
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub parallax: ParallaxConfig,
    pub sticky: StickyConfig,
}
