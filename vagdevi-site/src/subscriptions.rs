//! Root-level subscription composition

use crate::common::messages::DomainMessage;
use crate::state::State;
use iced::Subscription;

/// Composes all domain subscriptions into a single batch
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let subscriptions = vec![
        // Window, navbar and scroll reveal
        crate::domains::ui::messages::subscriptions::subscription(state),
        // Keyboard, drag release and slide animation
        crate::domains::carousel::messages::subscriptions::subscription(state),
        // Confirmation timeout
        crate::domains::contact::messages::subscriptions::subscription(state),
    ];

    Subscription::batch(subscriptions)
}
