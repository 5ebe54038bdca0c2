pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    scroll_offset: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link or the logo was followed: the menu closes and the page
    /// returns to the top.
    pub fn navigate(&mut self) {
        self.menu_open = false;
        self.on_scroll(0.0);
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_follows_offset() {
        let mut nav = NavState::default();
        assert!(!nav.scrolled());
        nav.on_scroll(0.0);
        assert!(!nav.scrolled());
        nav.on_scroll(51.0);
        assert!(nav.scrolled());
        nav.on_scroll(10.0);
        assert!(!nav.scrolled());
        nav.on_scroll(50.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_menu_toggles() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_navigation_closes_menu_and_resets_scroll() {
        let mut nav = NavState::default();
        nav.on_scroll(420.0);
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.navigate();
        assert!(!nav.menu_open());
        assert_eq!(nav.scroll_offset(), 0.0);
        assert!(!nav.scrolled());

        let mut closed = NavState::default();
        closed.navigate();
        assert!(!closed.menu_open());
    }
}
