//! Contact domain
//!
//! Holds the contact form session and hands validated messages to the
//! mail relay service.

pub mod messages;
pub mod update;

use iced::Task;
use iced::widget::text_editor;
use vagdevi_config::ContactConfig;
use vagdevi_core::{ContactSession, Field};

use crate::common::messages::{CrossDomainEvent, DomainMessage};

#[derive(Debug, Default)]
pub struct ContactDomainState {
    pub session: ContactSession,
    /// Multi-line buffer behind the message field.
    pub message_editor: text_editor::Content,
}

impl ContactDomainState {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            session: ContactSession::new(config.reset_delay),
            message_editor: text_editor::Content::new(),
        }
    }

    /// Replace the editor buffer with the session's message text.
    pub fn reload_message_editor(&mut self) {
        self.message_editor =
            text_editor::Content::with_text(self.session.form().get(Field::Message));
    }
}

#[derive(Debug, Default)]
pub struct ContactDomain {
    pub state: ContactDomainState,
}

impl ContactDomain {
    pub fn new(state: ContactDomainState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            // Leaving the page keeps typed input but drops a stale banner.
            CrossDomainEvent::PageChanged(_) => {
                self.state.session.dismiss_error();
                Task::none()
            }
            CrossDomainEvent::LayoutChanged { .. } => Task::none(),
        }
    }
}
