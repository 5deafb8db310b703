use iced::widget::{Space, column, container, text};
use iced::alignment::Horizontal;
use iced::{Color, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};

/// Centered heading with a gold rule and an optional subtitle.
pub fn section_title<'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    heading_color: Color,
) -> Element<'a, DomainMessage> {
    section_title_aligned(title, subtitle, heading_color, Horizontal::Center)
}

pub fn section_title_aligned<'a>(
    title: &'a str,
    subtitle: Option<&'a str>,
    heading_color: Color,
    align: Horizontal,
) -> Element<'a, DomainMessage> {
    let mut content = column![
        text(title).size(36).color(heading_color).align_x(align),
        container(Space::new().width(64).height(4))
            .style(theme::Container::AccentRule.style()),
    ]
    .spacing(14)
    .align_x(align);

    if let Some(subtitle) = subtitle {
        content = content.push(
            container(
                text(subtitle)
                    .size(17)
                    .color(VagdeviTheme::TEXT_MUTED)
                    .align_x(align),
            )
            .max_width(680),
        );
    }

    container(content).align_x(align).width(Length::Fill).into()
}
