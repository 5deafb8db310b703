use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use vagdevi_core::catalog::RiceVariety;

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::state::State;

const IMAGE_HEIGHT: f32 = 180.0;

/// Card for one rice variety; "View Details" opens a prefilled enquiry.
pub fn product_card<'a>(
    state: &'a State,
    variety: &'a RiceVariety,
) -> Element<'a, DomainMessage> {
    let picture: Element<'a, DomainMessage> = match state.images.handle(variety.image) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => container(icon_text_with_size(Icon::Wheat, 40.0).color(VagdeviTheme::GOLD))
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .center_x(Length::Fill)
            .center_y(IMAGE_HEIGHT)
            .style(theme::Container::Placeholder.style())
            .into(),
    };

    let variants = row(variety.variants.iter().map(|variant| {
        container(text(*variant).size(12))
            .padding([4, 10])
            .style(theme::Container::Chip.style())
            .into()
    }))
    .spacing(6);

    let details = button(
        row![text("View Details").size(14), icon_text_with_size(Icon::ArrowRight, 14.0)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(UiMessage::Enquire(variety.enquiry_subject()).into())
    .style(theme::Button::Outline.style())
    .padding([8, 16]);

    container(
        column![
            picture,
            column![
                text(variety.name).size(20).color(VagdeviTheme::TEXT_HEADING),
                text(variety.description).size(14),
                text("Available as").size(12).color(VagdeviTheme::TEXT_MUTED),
                variants,
                Space::new().height(Length::Fill),
                details,
            ]
            .spacing(10)
            .padding(18)
            .height(Length::Fill),
        ]
        .spacing(0),
    )
    .width(Length::Fill)
    .height(440)
    .clip(true)
    .style(theme::Container::Card.style())
    .into()
}
