use crate::constants::MOBILE_BREAKPOINT_PX;

/// Open/closed state of the hamburger navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Clicks on the hamburger or inside the menu are handled by their own
    /// listeners; anything else closes it.
    pub fn on_document_click(&mut self, inside_menu_or_toggle: bool) -> bool {
        if inside_menu_or_toggle {
            return false;
        }
        self.close()
    }

    /// The desktop layout shows links inline, so a wide viewport closes the menu.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            return self.close();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut m = NavMenu::new();
        assert!(m.toggle());
        assert!(!m.toggle());
    }

    #[test]
    fn outside_click_closes() {
        let mut m = NavMenu::new();
        m.toggle();
        assert!(!m.on_document_click(true));
        assert!(m.is_open());
        assert!(m.on_document_click(false));
        assert!(!m.is_open());
    }

    #[test]
    fn wide_resize_closes_narrow_keeps() {
        let mut m = NavMenu::new();
        m.toggle();
        assert!(!m.on_resize(768.0));
        assert!(m.is_open());
        assert!(m.on_resize(1024.0));
        assert!(!m.is_open());
    }
}
