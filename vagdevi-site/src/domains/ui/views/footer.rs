use chrono::Datelike;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::domains::ui::views::content_width;
use crate::infra::constants::content::{COMPANY, NAV_LINKS};

pub fn view_footer() -> Element<'static, DomainMessage> {
    let about = column![
        text(COMPANY.short_name).size(22).color(VagdeviTheme::GOLD),
        text(COMPANY.tagline).size(14),
        text("Premium rice, milled with care in Telangana.")
            .size(14)
            .color(VagdeviTheme::TEXT_ON_DARK),
    ]
    .spacing(10)
    .width(Length::FillPortion(2));

    let links = NAV_LINKS.iter().fold(
        column![text("Quick Links").size(16).color(VagdeviTheme::GOLD)].spacing(8),
        |links, link| {
            links.push(
                button(text(link.label).size(14).color(VagdeviTheme::TEXT_ON_DARK))
                    .on_press(UiMessage::Navigate(link.page).into())
                    .style(theme::Button::Text.style())
                    .padding(0),
            )
        },
    );

    let reach = column![
        text("Reach Us").size(16).color(VagdeviTheme::GOLD),
        contact_line(Icon::MapPin, COMPANY.address),
        contact_line(Icon::Mail, COMPANY.email),
        contact_line(Icon::Phone, COMPANY.phone),
    ]
    .spacing(8)
    .width(Length::FillPortion(2));

    let copyright = text(format!(
        "© {} {}. All rights reserved.",
        chrono::Local::now().year(),
        COMPANY.short_name
    ))
    .size(13)
    .color(VagdeviTheme::TEXT_ON_DARK);

    container(content_width(
        column![
            row![about, container(links).width(Length::FillPortion(1)), reach].spacing(32),
            container(Space::new().width(Length::Fill).height(1))
                .style(theme::Container::AccentRule.style()),
            row![copyright, Space::new().width(Length::Fill)],
        ]
        .spacing(24),
        48.0,
    ))
    .width(Length::Fill)
    .style(theme::Container::Footer.style())
    .into()
}

fn contact_line(icon: Icon, value: &'static str) -> Element<'static, DomainMessage> {
    row![
        icon_text_with_size(icon, 14.0).color(VagdeviTheme::GOLD),
        text(value).size(14).color(VagdeviTheme::TEXT_ON_DARK),
    ]
    .spacing(8)
    .align_y(Alignment::Start)
    .into()
}
