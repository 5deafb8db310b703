use std::time::Instant;

use crate::{
    common::messages::DomainUpdateResult,
    domains::carousel::messages::Message,
    state::State,
};

/// Handle hero carousel messages
pub fn update_carousel(state: &mut State, message: Message) -> DomainUpdateResult {
    let hero = &mut state.domains.carousel.state;
    let now = Instant::now();

    match message {
        Message::Navigate(direction) => {
            hero.navigate_at(direction, now);
            log::debug!(
                "Carousel navigated {:?} to {:?}",
                direction,
                hero.carousel.cursor()
            );
        }
        Message::JumpTo(index) => {
            if let Err(err) = hero.jump_to_at(index, now) {
                log::warn!("Ignoring carousel jump: {}", err);
            }
        }
        Message::DragStarted => hero.begin_drag(),
        Message::PointerMoved(x) => hero.pointer_moved(x),
        Message::PointerReleased => {
            if let Some(direction) = hero.release_at(now) {
                log::debug!("Carousel swipe {:?}", direction);
            }
        }
        Message::UpdateAnimation => hero.tick(now),
    }

    DomainUpdateResult::none()
}
