use super::Message;
use crate::common::messages::DomainMessage;
use crate::infra::constants::layout::CONTACT_TICK;
use crate::state::State;
use iced::Subscription;

/// Polls the confirmation timer only while a message was just sent.
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    if state.domains.contact.state.session.is_submitted() {
        iced::time::every(CONTACT_TICK)
            .map(|_| DomainMessage::Contact(Message::Tick))
    } else {
        Subscription::none()
    }
}
