//! Mobile Nav Menu
//!
//! Hamburger toggle for the nav bar. The open state lives on the nav as
//! a class flag and is mirrored into the toggle's `aria-expanded`.
//! Clicking a nav item or pressing Escape closes the menu.

use glide_dom::{DomSurface, NodeId};
use glide_motion::NAV_ID;

/// Document id of the toggle button
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// Class flag on the nav while the menu is open
pub const OPEN_CLASS: &str = "nav--open";

/// Hamburger menu driver
#[derive(Debug)]
pub struct NavMenu {
    nav: NodeId,
    toggle: NodeId,
}

impl NavMenu {
    /// Bind to the nav bar and its toggle button; both must exist
    pub fn bind(surface: &dyn DomSurface) -> Option<Self> {
        let nav = surface.element_by_id(NAV_ID)?;
        let toggle = surface.element_by_id(NAV_TOGGLE_ID)?;
        Some(Self { nav, toggle })
    }

    /// Toggle button clicked: flip the open state
    pub fn toggle_clicked(&self, surface: &mut dyn DomSurface) {
        let open = !surface.has_class(self.nav, OPEN_CLASS);
        self.set_open(surface, open);
    }

    /// A nav item was activated: collapse the menu
    pub fn nav_item_clicked(&self, surface: &mut dyn DomSurface) {
        self.set_open(surface, false);
    }

    /// Escape collapses the menu
    pub fn escape(&self, surface: &mut dyn DomSurface) {
        self.set_open(surface, false);
    }

    fn set_open(&self, surface: &mut dyn DomSurface, open: bool) {
        surface.set_class(self.nav, OPEN_CLASS, open);
        surface.set_attribute(self.toggle, "aria-expanded", if open { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_dom::{HeadlessSurface, Viewport};

    fn fixture() -> (HeadlessSurface, NavMenu, NodeId, NodeId) {
        let mut surface = HeadlessSurface::new(Viewport::new(420.0, 800.0));
        let nav = surface.insert_section(NAV_ID, 0.0);
        let toggle = surface.insert_section(NAV_TOGGLE_ID, 0.0);
        let menu = NavMenu::bind(&surface).unwrap();
        (surface, menu, nav, toggle)
    }

    #[test]
    fn test_toggle_flips_state_and_aria() {
        let (mut surface, menu, nav, toggle) = fixture();

        menu.toggle_clicked(&mut surface);
        assert!(surface.has_class(nav, OPEN_CLASS));
        assert_eq!(surface.attribute(toggle, "aria-expanded").unwrap(), "true");

        menu.toggle_clicked(&mut surface);
        assert!(!surface.has_class(nav, OPEN_CLASS));
        assert_eq!(surface.attribute(toggle, "aria-expanded").unwrap(), "false");
    }

    #[test]
    fn test_item_click_and_escape_close() {
        let (mut surface, menu, nav, _) = fixture();

        menu.toggle_clicked(&mut surface);
        menu.nav_item_clicked(&mut surface);
        assert!(!surface.has_class(nav, OPEN_CLASS));

        menu.toggle_clicked(&mut surface);
        menu.escape(&mut surface);
        assert!(!surface.has_class(nav, OPEN_CLASS));
    }

    #[test]
    fn test_bind_requires_both_elements() {
        let mut surface = HeadlessSurface::new(Viewport::new(420.0, 800.0));
        surface.insert_section(NAV_ID, 0.0);
        assert!(NavMenu::bind(&surface).is_none());
    }
}
