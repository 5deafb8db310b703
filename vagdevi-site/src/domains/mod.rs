//! Domain modules for the Vagdevi showcase
//!
//! Each domain owns its slice of state, its messages and its update logic.
//! Domains talk to each other through [`CrossDomainEvent`]s.

pub mod carousel;
pub mod contact;
pub mod ui;

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use iced::Task;

/// Domain registry that manages all domain states
#[derive(Debug, Default)]
pub struct DomainRegistry {
    pub ui: ui::UiDomain,
    pub carousel: carousel::CarouselDomain,
    pub contact: contact::ContactDomain,
}

impl DomainRegistry {
    /// Handle a cross-domain event by notifying all relevant domains
    pub fn handle_event(
        &mut self,
        event: CrossDomainEvent,
    ) -> Task<DomainMessage> {
        let tasks = vec![
            self.ui.handle_event(&event),
            self.carousel.handle_event(&event),
            self.contact.handle_event(&event),
        ];

        Task::batch(tasks)
    }
}
