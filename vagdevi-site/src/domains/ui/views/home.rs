//! Home page sections, top to bottom.

use iced::alignment::Horizontal;
use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use vagdevi_core::catalog::{Page, join_names};

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::reveal::SectionId;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::domains::ui::views::hero_section::view_hero_section;
use crate::domains::ui::views::product_card::product_card;
use crate::domains::ui::views::scroll_reveal::reveal;
use crate::domains::ui::views::section_title::{section_title, section_title_aligned};
use crate::domains::ui::views::content_width;
use crate::infra::constants::content::{
    BRANDS, CORE_VALUES, FARMER_MASCOT, FEATURED_VARIETIES, HIGHLIGHTED_MARKETS,
    MARKETS, VARIETIES,
};
use crate::state::State;

pub fn view_home(state: &State) -> Element<'_, DomainMessage> {
    column![
        reveal(state, SectionId::Hero, VagdeviTheme::BACKGROUND, view_hero_section(state)),
        reveal(state, SectionId::CoreValues, VagdeviTheme::BACKGROUND_ALT, core_values()),
        reveal(state, SectionId::Brands, VagdeviTheme::BACKGROUND, brands(state)),
        reveal(state, SectionId::Fields, VagdeviTheme::BACKGROUND_ALT, fields(state)),
        reveal(state, SectionId::Varieties, VagdeviTheme::BACKGROUND, featured_varieties(state)),
        reveal(state, SectionId::Markets, VagdeviTheme::ESPRESSO, markets()),
    ]
    .width(Length::Fill)
    .into()
}

fn core_values() -> Element<'static, DomainMessage> {
    let icons = [Icon::Award, Icon::Handshake, Icon::Truck, Icon::Leaf];

    let cards = CORE_VALUES.iter().zip(icons).map(|(value, icon)| {
        container(
            column![
                icon_text_with_size(icon, 32.0).color(VagdeviTheme::SAFFRON),
                text(value.title).size(20).color(VagdeviTheme::TEXT_HEADING),
                text(value.description).size(14),
            ]
            .spacing(10),
        )
        .padding(24)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
    });

    container(content_width(
        column![
            section_title("Our Core Values", None, VagdeviTheme::TEXT_HEADING),
            row(cards).spacing(20).height(220),
        ]
        .spacing(36),
        64.0,
    ))
    .width(Length::Fill)
    .style(theme::Container::AltSection.style())
    .into()
}

fn brands(state: &State) -> Element<'_, DomainMessage> {
    let names = join_names(BRANDS.iter().map(|brand| brand.name));

    let cards = BRANDS.iter().map(|brand| {
        let logo: Element<'_, DomainMessage> = match state.images.handle(brand.logo) {
            Some(handle) => image(handle.clone()).height(96).into(),
            None => text(brand.name).size(32).color(VagdeviTheme::SAFFRON).into(),
        };

        container(
            column![
                logo,
                text(brand.tagline).size(18).color(VagdeviTheme::GOLD),
                text(brand.description).size(15),
            ]
            .spacing(14)
            .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Length::FillPortion(1))
        .style(theme::Container::Card.style())
        .into()
    });

    content_width(
        column![
            section_title(
                "Our Brands",
                Some("Two names, one promise of quality."),
                VagdeviTheme::TEXT_HEADING,
            ),
            row(cards).spacing(28),
            container(
                button(text(format!("Explore {names}")).size(15))
                    .on_press(UiMessage::Navigate(Page::Products).into())
                    .style(theme::Button::Outline.style())
                    .padding([12, 24]),
            )
            .center_x(Length::Fill),
        ]
        .spacing(36),
        64.0,
    )
    .into()
}

fn fields(state: &State) -> Element<'_, DomainMessage> {
    let mascot: Element<'_, DomainMessage> = match state.images.handle(FARMER_MASCOT) {
        Some(handle) => image(handle.clone()).height(280).into(),
        None => icon_text_with_size(Icon::Wheat, 120.0)
            .color(VagdeviTheme::GOLD)
            .into(),
    };

    container(content_width(
        row![
            column![
                section_title_aligned(
                    "From Our Fields to Your Table",
                    None,
                    VagdeviTheme::TEXT_HEADING,
                    Horizontal::Left,
                ),
                text("We partner directly with farmers across Telangana, sourcing paddy at harvest and milling it close to where it grows.")
                    .size(17),
            ]
            .spacing(16)
            .width(Length::FillPortion(3)),
            container(mascot).center_x(Length::FillPortion(2)),
        ]
        .spacing(32)
        .align_y(Alignment::Center),
        56.0,
    ))
    .width(Length::Fill)
    .style(theme::Container::AltSection.style())
    .into()
}

fn featured_varieties(state: &State) -> Element<'_, DomainMessage> {
    let cards = VARIETIES
        .iter()
        .take(FEATURED_VARIETIES)
        .map(|variety| container(product_card(state, variety)).width(Length::FillPortion(1)).into());

    content_width(
        column![
            section_title(
                "Our Rice Varieties",
                Some("Steam and double boiled processing for every kitchen."),
                VagdeviTheme::TEXT_HEADING,
            ),
            row(cards).spacing(20),
            container(
                button(
                    row![text("View All Products").size(15), icon_text_with_size(Icon::ArrowRight, 15.0)]
                        .spacing(8)
                        .align_y(Alignment::Center),
                )
                .on_press(UiMessage::Navigate(Page::Products).into())
                .style(theme::Button::Primary.style())
                .padding([12, 24]),
            )
            .center_x(Length::Fill),
        ]
        .spacing(36),
        64.0,
    )
    .into()
}

fn markets() -> Element<'static, DomainMessage> {
    let highlighted = join_names(
        MARKETS
            .iter()
            .take(HIGHLIGHTED_MARKETS)
            .map(|market| market.name),
    );

    let chips = MARKETS.iter().map(|market| {
        row![
            icon_text_with_size(Icon::MapPin, 14.0).color(VagdeviTheme::GOLD),
            text(market.name).size(15),
        ]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
    });

    container(content_width(
        column![
            section_title(
                "Markets We Serve",
                None,
                VagdeviTheme::TEXT_ON_DARK,
            ),
            container(
                text(format!("Trusted by retailers and kitchens across {highlighted} and beyond."))
                    .size(17)
                    .color(VagdeviTheme::TEXT_ON_DARK),
            )
            .center_x(Length::Fill),
            container(row(chips).spacing(28)).center_x(Length::Fill),
            Space::new().height(8),
        ]
        .spacing(24),
        56.0,
    ))
    .width(Length::Fill)
    .style(theme::Container::DarkSection.style())
    .into()
}
