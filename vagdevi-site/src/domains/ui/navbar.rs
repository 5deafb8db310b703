//! Navbar state: compact style after scrolling, collapsible menu on narrow
//! windows.

use std::time::{Duration, Instant};

use crate::domains::ui::transitions::{EasingFunction, Transition};
use crate::infra::constants::layout::navbar::{
    MOBILE_BREAKPOINT, SCROLLED_THRESHOLD,
};

const ELEVATION_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct NavbarState {
    scrolled: bool,
    menu_open: bool,
    window_width: f32,
    elevation: Transition<f32>,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(crate::infra::constants::layout::WINDOW_WIDTH)
    }
}

impl NavbarState {
    pub fn new(window_width: f32) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            window_width,
            elevation: Transition::new(
                0.0,
                ELEVATION_DURATION,
                EasingFunction::EaseOutCubic,
            ),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Narrow windows swap the link row for a toggle button.
    pub fn is_mobile(&self) -> bool {
        self.window_width < MOBILE_BREAKPOINT
    }

    pub fn elevation(&self) -> f32 {
        self.elevation.interpolated()
    }

    pub fn is_animating(&self) -> bool {
        self.elevation.is_transitioning()
    }

    /// Track the page scroll offset. Returns whether the compact style flipped.
    pub fn on_scroll(&mut self, offset_y: f32, now: Instant) -> bool {
        let scrolled = offset_y > SCROLLED_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }

        self.scrolled = scrolled;
        self.elevation
            .transition_to_at(if scrolled { 1.0 } else { 0.0 }, now);
        true
    }

    pub fn on_resize(&mut self, width: f32) {
        self.window_width = width;
        if !self.is_mobile() {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Reset to the top-of-page style without animating.
    pub fn reset_scroll(&mut self) {
        self.scrolled = false;
        self.elevation.to = 0.0;
        self.elevation.settle();
    }

    pub fn tick(&mut self, now: Instant) {
        self.elevation.update_at(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_style_follows_scroll_threshold() {
        let now = Instant::now();
        let mut navbar = NavbarState::new(1280.0);

        assert!(!navbar.on_scroll(20.0, now));
        assert!(!navbar.is_scrolled());

        assert!(navbar.on_scroll(21.0, now));
        assert!(navbar.is_scrolled());
        assert!(navbar.is_animating());

        navbar.tick(now + ELEVATION_DURATION);
        assert_eq!(navbar.elevation(), 1.0);

        assert!(navbar.on_scroll(0.0, now + ELEVATION_DURATION));
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut navbar = NavbarState::new(600.0);
        assert!(navbar.is_mobile());

        navbar.toggle_menu();
        assert!(navbar.is_menu_open());

        navbar.on_resize(700.0);
        assert!(navbar.is_menu_open());

        navbar.on_resize(1024.0);
        assert!(!navbar.is_mobile());
        assert!(!navbar.is_menu_open());
    }
}
