//! Geometry Types
//!
//! Viewport-relative rectangles, viewport dimensions, and the inline
//! transform the parallax renderer writes.

/// Rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rect from its origin and size
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Y coordinate of the top edge
    pub fn top(&self) -> f64 {
        self.y
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// X coordinate of the left edge
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Width times height
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the rects overlap; touching edges count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Overlap of the two rects. Edge contact yields a degenerate rect
    /// with zero width or height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let width = self.right().min(other.right()) - x;
        let height = self.bottom().min(other.bottom()) - y;

        if width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Rect::from_xywh(x, y, width, height))
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport rect with a fraction of its height cut off the bottom
    pub fn shrunk_bottom(&self, fraction: f64) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width, self.height * (1.0 - fraction))
    }
}

/// Scroll behavior requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// 3D translation written as an inline transform
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translate3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Translate3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// CSS serialization, e.g. `translate3d(12px, -3px, 0px)`
    pub fn to_css(&self) -> String {
        format!("translate3d({}px, {}px, {}px)", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.area(), 1200.0);
    }

    #[test]
    fn test_intersection() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_xywh(50.0, 50.0, 100.0, 100.0);

        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::from_xywh(50.0, 50.0, 50.0, 50.0));

        let c = Rect::from_xywh(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_edge_contact_counts_as_intersection() {
        let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_xywh(100.0, 0.0, 50.0, 100.0);

        assert!(a.intersects(&b));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.width, 0.0);
        assert_eq!(i.area(), 0.0);
    }

    #[test]
    fn test_viewport_shrunk_bottom() {
        let vp = Viewport::new(1000.0, 800.0);
        let r = vp.shrunk_bottom(0.10);
        assert_eq!(r.width, 1000.0);
        assert!((r.height - 720.0).abs() < 1e-9);
    }

    #[test]
    fn test_translate_css() {
        let t = Translate3d::new(12.0, -3.0, 0.0);
        assert_eq!(t.to_css(), "translate3d(12px, -3px, 0px)");
    }
}
