use crate::domains::carousel;
use crate::domains::contact;
use crate::domains::ui;

use iced::Task;
use vagdevi_core::catalog::Page;

/// Events one domain raises for the others to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossDomainEvent {
    /// The visible page changed.
    PageChanged(Page),
    /// The window was resized to the given width.
    LayoutChanged { width: f32 },
}

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl DomainUpdateResult {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// The main domain message router
#[derive(Debug, Clone)]
pub enum DomainMessage {
    /// Routing, navbar, scroll reveal and images
    Ui(ui::messages::Message),

    /// Hero carousel
    Carousel(carousel::messages::Message),

    /// Contact form
    Contact(contact::messages::Message),

    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            DomainMessage::Ui(msg) => msg.name(),
            DomainMessage::Carousel(msg) => msg.name(),
            DomainMessage::Contact(msg) => msg.name(),
            DomainMessage::NoOp => "DomainMessage::NoOp",
        }
    }
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl From<carousel::messages::Message> for DomainMessage {
    fn from(msg: carousel::messages::Message) -> Self {
        DomainMessage::Carousel(msg)
    }
}

impl From<contact::messages::Message> for DomainMessage {
    fn from(msg: contact::messages::Message) -> Self {
        DomainMessage::Contact(msg)
    }
}
