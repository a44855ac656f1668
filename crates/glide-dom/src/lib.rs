//! Glide DOM - Abstract Document Surface
//!
//! Capability boundary between the interactivity engine and whatever
//! actually renders the page. Hosts implement [`DomSurface`]; the engine
//! only ever talks to the trait. `HeadlessSurface` is a complete in-memory
//! implementation for tests and simulations.

mod geometry;
mod headless;
mod surface;

pub use geometry::{Rect, ScrollBehavior, Translate3d, Viewport};
pub use headless::{HeadlessElement, HeadlessSurface};
pub use surface::DomSurface;

/// Node identifier (index into the host's element arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);
