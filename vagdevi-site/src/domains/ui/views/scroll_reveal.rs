//! Fade-and-slide wrapper for page sections.
//!
//! iced has no per-widget opacity, so a section that is still revealing is
//! drawn under a veil in its own background color that thins out as the
//! section fades in. The slide is a padding shift on the travel axis.

use iced::widget::{Space, Stack, container};
use iced::{Color, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::reveal::{RevealFrame, SectionId};
use crate::domains::ui::theme;
use crate::state::State;

pub fn reveal<'a>(
    state: &'a State,
    id: SectionId,
    backdrop: Color,
    content: impl Into<Element<'a, DomainMessage>>,
) -> Element<'a, DomainMessage> {
    let ui = &state.domains.ui.state;
    let frame = ui.reveal.frame(id, ui.clock);

    if frame == RevealFrame::VISIBLE {
        return content.into();
    }

    let shifted = container(content)
        .padding(Padding {
            top: frame.offset_y.max(0.0),
            bottom: (-frame.offset_y).max(0.0),
            left: frame.offset_x.max(0.0),
            right: (-frame.offset_x).max(0.0),
        })
        .width(Length::Fill);

    Stack::new()
        .push(shifted)
        .push(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::reveal_veil(frame.opacity, backdrop)),
        )
        .width(Length::Fill)
        .into()
}
