use std::time::Instant;

use iced::Task;
use iced::widget::{operation::scroll_to, scrollable::AbsoluteOffset};

use crate::{
    common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult},
    domains::contact::messages::Message as ContactMessage,
    domains::ui::messages as ui,
    infra::constants::layout::navbar,
    state::State,
};
use vagdevi_core::catalog::Page;

/// Handle UI domain messages
/// Returns a DomainUpdateResult containing both the task and any events to emit
pub fn update_ui(state: &mut State, message: ui::Message) -> DomainUpdateResult {
    match message {
        ui::Message::Navigate(page) => navigate(state, page),
        ui::Message::Enquire(subject) => {
            log::info!("Enquiry started: {}", subject);
            let result = navigate(state, Page::Contact);
            let prefill = Task::done(DomainMessage::Contact(
                ContactMessage::PrefillSubject(subject),
            ));
            DomainUpdateResult::with_events(
                Task::batch([result.task, prefill]),
                result.events,
            )
        }
        ui::Message::ToggleMenu => {
            state.domains.ui.state.navbar.toggle_menu();
            DomainUpdateResult::none()
        }
        ui::Message::PageScrolled(viewport) => {
            let now = Instant::now();
            let ui_state = &mut state.domains.ui.state;
            ui_state.scroll_offset = viewport.absolute_offset().y;
            ui_state.viewport_height = viewport.bounds().height;

            if ui_state.navbar.on_scroll(ui_state.scroll_offset, now) {
                log::trace!(
                    "Navbar scrolled style: {}",
                    ui_state.navbar.is_scrolled()
                );
            }
            ui_state.observe_viewport(now);
            DomainUpdateResult::none()
        }
        ui::Message::WindowResized(size) => {
            let ui_state = &mut state.domains.ui.state;
            ui_state.window_size = size;
            ui_state.viewport_height = (size.height - navbar::HEIGHT).max(0.0);
            ui_state.observe_viewport(Instant::now());

            DomainUpdateResult::with_events(
                Task::none(),
                vec![CrossDomainEvent::LayoutChanged { width: size.width }],
            )
        }
        ui::Message::UpdateTransitions => {
            let now = Instant::now();
            let ui_state = &mut state.domains.ui.state;
            ui_state.clock = now;
            ui_state.navbar.tick(now);
            DomainUpdateResult::none()
        }
        ui::Message::ImageLoaded(key, result) => {
            match result {
                Ok(bytes) => {
                    log::debug!("Image loaded: {} ({} bytes)", key, bytes.len());
                    state.images.set_loaded(key, bytes);
                }
                Err(err) => {
                    log::warn!("Image failed to load: {} - {}", key, err);
                    state.images.set_failed(key);
                }
            }
            DomainUpdateResult::none()
        }
    }
}

fn navigate(state: &mut State, page: Page) -> DomainUpdateResult {
    let ui_state = &mut state.domains.ui.state;
    if ui_state.page == page {
        ui_state.navbar.close_menu();
        return DomainUpdateResult::none();
    }

    log::info!("Navigating {} -> {}", ui_state.page, page);
    ui_state.show_page(page, Instant::now());

    let scroll_top = scroll_to::<DomainMessage>(
        ui_state.page_scrollable_id.clone(),
        AbsoluteOffset { x: 0.0, y: 0.0 },
    );

    DomainUpdateResult::with_events(
        scroll_top,
        vec![CrossDomainEvent::PageChanged(page)],
    )
}
