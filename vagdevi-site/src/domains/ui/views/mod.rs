pub mod contact;
pub mod footer;
pub mod hero_carousel;
pub mod hero_section;
pub mod home;
pub mod navbar;
pub mod product_card;
pub mod products;
pub mod scroll_reveal;
pub mod section_title;

use iced::widget::container;
use iced::{Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::infra::constants::layout::CONTENT_MAX_WIDTH;

/// Center `content` in a full-width band, capped at the content width.
pub fn content_width<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
    vertical_padding: f32,
) -> iced::widget::Container<'a, DomainMessage> {
    container(
        container(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding(Padding {
        top: vertical_padding,
        bottom: vertical_padding,
        left: 24.0,
        right: 24.0,
    })
    .center_x(Length::Fill)
}
