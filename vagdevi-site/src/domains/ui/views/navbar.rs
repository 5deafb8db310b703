use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length, Padding};
use lucide_icons::Icon;

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::infra::constants::content::{COMPANY, NAV_LINKS, NAV_LOGO};
use crate::infra::constants::layout::CONTENT_MAX_WIDTH;
use crate::state::State;
use vagdevi_core::catalog::Page;

pub fn view_navbar(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;
    let elevation = ui.navbar.elevation();
    let height = ui.navbar_height();

    let brand = button(
        row![logo(state), text(COMPANY.short_name).size(22).color(VagdeviTheme::ESPRESSO)]
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .on_press(UiMessage::Navigate(Page::Home).into())
    .style(theme::Button::Text.style())
    .padding(0);

    let trailing: Element<'_, DomainMessage> = if ui.navbar.is_mobile() {
        button(icon_text_with_size(
            if ui.navbar.is_menu_open() {
                Icon::X
            } else {
                Icon::Menu
            },
            24.0,
        ))
        .on_press(UiMessage::ToggleMenu.into())
        .style(theme::Button::Text.style())
        .into()
    } else {
        let mut links = row![].spacing(8).align_y(Alignment::Center);
        for link in NAV_LINKS.iter().filter(|link| link.page != Page::Contact) {
            links = links.push(nav_link(link.label, link.page, ui.page));
        }
        links
            .push(Space::new().width(12))
            .push(
                button(text("Contact Us").size(15))
                    .on_press(UiMessage::Navigate(Page::Contact).into())
                    .style(theme::Button::Primary.style())
                    .padding([10, 22]),
            )
            .into()
    };

    let bar = row![brand, Space::new().width(Length::Fill), trailing]
        .align_y(Alignment::Center)
        .height(Length::Fill);

    container(
        container(bar)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding(Padding {
        top: 0.0,
        bottom: 0.0,
        left: 24.0,
        right: 24.0,
    })
    .center_x(Length::Fill)
    .height(Length::Fixed(height))
    .style(theme::navbar_style(elevation))
    .into()
}

/// Full-width link list shown under the bar on narrow windows.
pub fn view_mobile_menu(state: &State) -> Option<Element<'_, DomainMessage>> {
    let ui = &state.domains.ui.state;
    if !ui.navbar.is_mobile() || !ui.navbar.is_menu_open() {
        return None;
    }

    let links = NAV_LINKS.iter().map(|link| {
        container(nav_link(link.label, link.page, ui.page))
            .width(Length::Fill)
            .into()
    });

    Some(
        container(column(links).spacing(6))
            .padding([16, 24])
            .width(Length::Fill)
            .style(theme::Container::MobileMenu.style())
            .into(),
    )
}

fn nav_link<'a>(label: &'a str, page: Page, current: Page) -> Element<'a, DomainMessage> {
    let style = if page == current {
        theme::Button::NavLinkActive
    } else {
        theme::Button::NavLink
    };

    button(text(label).size(16))
        .on_press(UiMessage::Navigate(page).into())
        .style(style.style())
        .padding([8, 14])
        .into()
}

fn logo(state: &State) -> Element<'_, DomainMessage> {
    match state.images.handle(NAV_LOGO) {
        Some(handle) => image(handle.clone()).height(44).into(),
        None => container(icon_text_with_size(Icon::Wheat, 28.0).color(VagdeviTheme::GOLD))
            .height(44)
            .into(),
    }
}
