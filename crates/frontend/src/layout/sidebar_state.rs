//! Sidebar visibility, driven by the viewport width.

/// Open/closed state of the sidebar plus the viewport class it was decided for.
///
/// Desktop viewports always show the sidebar. Mobile viewports start collapsed
/// and expose a toggle button; a sidebar the user opened on mobile stays open
/// across resizes that remain below the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    open: bool,
    mobile: bool,
    breakpoint: f64,
}

impl SidebarState {
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        let mobile = width < breakpoint;
        Self {
            open: !mobile,
            mobile,
            breakpoint,
        }
    }

    /// Re-evaluate after a load or `resize`
    pub fn handle_mobile_view(&mut self, width: f64) {
        self.mobile = width < self.breakpoint;
        if !self.mobile {
            self.open = true;
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// The content area widens while the sidebar is hidden
    pub fn content_collapsed(&self) -> bool {
        !self.open
    }

    pub fn show_toggle(&self) -> bool {
        self.mobile
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.open {
            "x-lg"
        } else {
            "list"
        }
    }
}

/// Current `window.innerWidth`, if a window exists
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: f64 = 768.0;

    #[test]
    fn test_desktop_is_forced_open() {
        for width in [768.0, 1024.0, 1920.0] {
            let mut state = SidebarState::for_viewport(400.0, BREAKPOINT);
            state.toggle();
            state.toggle();
            state.handle_mobile_view(width);
            assert!(state.is_open(), "closed at {}", width);
            assert!(!state.content_collapsed());
            assert!(!state.show_toggle());
        }
    }

    #[test]
    fn test_desktop_ignores_previous_toggle() {
        let mut state = SidebarState::for_viewport(1280.0, BREAKPOINT);
        state.toggle();
        assert!(!state.is_open());
        state.handle_mobile_view(1280.0);
        assert!(state.is_open());
    }

    #[test]
    fn test_mobile_starts_collapsed() {
        let state = SidebarState::for_viewport(375.0, BREAKPOINT);
        assert!(!state.is_open());
        assert!(state.content_collapsed());
        assert!(state.show_toggle());
        assert_eq!(state.toggle_icon(), "list");
    }

    #[test]
    fn test_toggle_pair_is_reversible() {
        let mut state = SidebarState::for_viewport(375.0, BREAKPOINT);
        let original = state;

        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.toggle_icon(), "x-lg");

        state.toggle();
        assert_eq!(state, original);
    }

    #[test]
    fn test_open_sidebar_survives_mobile_resize() {
        let mut state = SidebarState::for_viewport(375.0, BREAKPOINT);
        state.toggle();
        state.handle_mobile_view(500.0);
        assert!(state.is_open());

        let mut closed = SidebarState::for_viewport(375.0, BREAKPOINT);
        closed.handle_mobile_view(500.0);
        assert!(!closed.is_open());
    }

    #[test]
    fn test_shrinking_from_desktop_keeps_it_open() {
        let mut state = SidebarState::for_viewport(1280.0, BREAKPOINT);
        state.handle_mobile_view(600.0);
        assert!(state.is_mobile());
        assert!(state.is_open());
    }
}
