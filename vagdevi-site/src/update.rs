//! Root-level message routing

use iced::Task;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::carousel::update::update_carousel;
use crate::domains::contact::update::update_contact;
use crate::domains::ui::update::update_ui;
use crate::state::State;

/// Route a message to its domain, then broadcast the events it raised.
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("update: {}", message.name());

    let DomainUpdateResult { task, events } = match message {
        DomainMessage::Ui(msg) => update_ui(state, msg),
        DomainMessage::Carousel(msg) => update_carousel(state, msg),
        DomainMessage::Contact(msg) => update_contact(state, msg),
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    for event in events {
        log::debug!("Broadcasting {:?}", event);
        tasks.push(state.domains.handle_event(event));
    }

    Task::batch(tasks)
}
