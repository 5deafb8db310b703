use super::Message;
use crate::common::messages::DomainMessage;
use crate::infra::constants::layout::ANIMATION_FRAME;
use crate::state::State;
use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{Key, key::Named};
use iced::mouse;
use vagdevi_core::carousel::Direction;

/// Carousel subscriptions: arrow keys on the home page, the slide
/// animation, and the release that ends a drag outside the carousel.
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let hero = &state.domains.carousel.state;
    if hero.carousel.is_empty() || state.domains.ui.state.page != vagdevi_core::Page::Home {
        return Subscription::none();
    }

    let mut subscriptions = vec![iced::keyboard::on_key_press(|key, modifiers| {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        let direction = match key {
            Key::Named(Named::ArrowLeft) => Direction::Previous,
            Key::Named(Named::ArrowRight) => Direction::Next,
            _ => return None,
        };
        Some(DomainMessage::Carousel(Message::Navigate(direction)))
    })];

    if hero.is_animating() {
        subscriptions.push(
            iced::time::every(ANIMATION_FRAME)
                .map(|_| DomainMessage::Carousel(Message::UpdateAnimation)),
        );
    }

    if hero.is_dragging() {
        subscriptions.push(event::listen_with(drag_release_handler));
    }

    Subscription::batch(subscriptions)
}

fn drag_release_handler(
    event: RuntimeEvent,
    _status: EventStatus,
    _window: iced::window::Id,
) -> Option<DomainMessage> {
    match event {
        RuntimeEvent::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | RuntimeEvent::Mouse(mouse::Event::CursorLeft) => {
            Some(DomainMessage::Carousel(Message::PointerReleased))
        }
        _ => None,
    }
}
