use super::Message;
use crate::common::messages::DomainMessage;
use crate::infra::constants::layout::ANIMATION_FRAME;
use crate::state::State;
use iced::Subscription;
use std::time::Instant;

/// Creates all UI-related subscriptions
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![];

    // Always subscribe to window resize events
    subscriptions.push(
        iced::window::resize_events()
            .map(|(_id, size)| DomainMessage::Ui(Message::WindowResized(size))),
    );

    let ui = &state.domains.ui.state;
    if ui.navbar.is_animating() || ui.reveal.is_animating(Instant::now()) {
        subscriptions.push(
            iced::time::every(ANIMATION_FRAME)
                .map(|_| DomainMessage::Ui(Message::UpdateTransitions)),
        );
    }

    Subscription::batch(subscriptions)
}
