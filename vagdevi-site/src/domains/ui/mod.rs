//! UI domain
//!
//! Routing between pages, the navbar, scroll reveals, theming and the
//! widgets that compose every page.

pub mod messages;
pub mod navbar;
pub mod reveal;
pub mod theme;
pub mod transitions;
pub mod update;
pub mod views;

use std::time::Instant;

use iced::Size;
use iced::Task;
use iced::widget::scrollable::Id as ScrollableId;
use vagdevi_core::catalog::Page;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::ui::navbar::NavbarState;
use crate::domains::ui::reveal::RevealTracker;
use crate::domains::ui::transitions::interpolate_f32;
use crate::infra::constants::layout::{WINDOW_HEIGHT, WINDOW_WIDTH, navbar};

#[derive(Debug)]
pub struct UiDomainState {
    pub page: Page,
    pub navbar: NavbarState,
    pub reveal: RevealTracker,
    pub window_size: Size,
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub page_scrollable_id: ScrollableId,
    /// Time of the latest animation frame; views render against it.
    pub clock: Instant,
}

impl Default for UiDomainState {
    fn default() -> Self {
        let window_size = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        Self {
            page: Page::default(),
            navbar: NavbarState::new(window_size.width),
            reveal: RevealTracker::new(Page::default()),
            window_size,
            scroll_offset: 0.0,
            viewport_height: window_size.height - navbar::HEIGHT,
            page_scrollable_id: ScrollableId::unique(),
            clock: Instant::now(),
        }
    }
}

impl UiDomainState {
    /// Reveal whatever is on screen for the current scroll position.
    pub fn observe_viewport(&mut self, now: Instant) {
        self.clock = now;
        self.reveal
            .observe(self.scroll_offset, self.viewport_height, now);
    }

    /// Current navbar height, shrinking as the page scrolls.
    pub fn navbar_height(&self) -> f32 {
        interpolate_f32(
            navbar::HEIGHT,
            navbar::COMPACT_HEIGHT,
            self.navbar.elevation(),
        )
    }

    /// Switch pages, starting the new one scrolled to the top.
    pub fn show_page(&mut self, page: Page, now: Instant) {
        self.page = page;
        self.scroll_offset = 0.0;
        self.navbar.reset_scroll();
        self.navbar.close_menu();
        self.reveal.reset(page);
        self.observe_viewport(now);
    }
}

#[derive(Debug, Default)]
pub struct UiDomain {
    pub state: UiDomainState,
}

impl UiDomain {
    pub fn new(state: UiDomainState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::LayoutChanged { width } => {
                self.state.navbar.on_resize(*width);
                Task::none()
            }
            CrossDomainEvent::PageChanged(page) => {
                log::debug!("UI domain showing {}", page);
                Task::none()
            }
        }
    }
}
