use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::domains::ui::views::content_width;
use crate::domains::ui::views::hero_carousel::view_hero_carousel;
use crate::infra::constants::content::hero;
use crate::state::State;
use vagdevi_core::catalog::Page;

pub fn view_hero_section(state: &State) -> Element<'_, DomainMessage> {
    let copy = column![
        text(hero::HEADLINE).size(52).color(VagdeviTheme::TEXT_HEADING),
        text(hero::HEADLINE_ACCENT).size(52).color(VagdeviTheme::SAFFRON),
        Space::new().height(8),
        text(hero::INTRO).size(18),
        Space::new().height(12),
        row![
            button(text(hero::PRIMARY_ACTION).size(16))
                .on_press(UiMessage::Navigate(Page::Products).into())
                .style(theme::Button::Primary.style())
                .padding([14, 28]),
            button(text(hero::SECONDARY_ACTION).size(16))
                .on_press(UiMessage::Navigate(Page::Contact).into())
                .style(theme::Button::Outline.style())
                .padding([14, 28]),
        ]
        .spacing(14),
    ]
    .spacing(6)
    .max_width(520);

    let layout: Element<'_, DomainMessage> = if state.domains.ui.state.navbar.is_mobile() {
        column![copy, view_hero_carousel(state)]
            .spacing(32)
            .align_x(Alignment::Center)
            .into()
    } else {
        row![
            container(copy).width(Length::FillPortion(1)),
            container(view_hero_carousel(state)).center_x(Length::FillPortion(1)),
        ]
        .spacing(32)
        .align_y(Alignment::Center)
        .into()
    };

    content_width(layout, 48.0).into()
}
