//! Products page: both brands with their packaging, every variety, and FAQs.

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};
use vagdevi_core::catalog::{Brand, Faq};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::reveal::SectionId;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::domains::ui::views::content_width;
use crate::domains::ui::views::product_card::product_card;
use crate::domains::ui::views::scroll_reveal::reveal;
use crate::domains::ui::views::section_title::section_title;
use crate::infra::constants::content::{BRANDS, FAQS, VARIETIES};
use crate::state::State;

const CARDS_PER_ROW: usize = 3;

pub fn view_products(state: &State) -> Element<'_, DomainMessage> {
    let brands = BRANDS
        .iter()
        .fold(column![].spacing(48), |brands, brand| brands.push(brand_block(state, brand)));

    column![
        reveal(
            state,
            SectionId::ProductsIntro,
            VagdeviTheme::BACKGROUND_ALT,
            container(content_width(
                section_title(
                    "Our Products",
                    Some("Premium rice from our two trusted brands, processed the way your kitchen needs it."),
                    VagdeviTheme::TEXT_HEADING,
                ),
                64.0,
            ))
            .width(Length::Fill)
            .style(theme::Container::AltSection.style()),
        ),
        reveal(
            state,
            SectionId::ProductsBrands,
            VagdeviTheme::BACKGROUND,
            content_width(brands, 56.0),
        ),
        reveal(
            state,
            SectionId::ProductsVarieties,
            VagdeviTheme::BACKGROUND_ALT,
            container(content_width(varieties(state), 56.0))
                .width(Length::Fill)
                .style(theme::Container::AltSection.style()),
        ),
        reveal(
            state,
            SectionId::Faq,
            VagdeviTheme::BACKGROUND,
            content_width(faqs(), 56.0),
        ),
    ]
    .width(Length::Fill)
    .into()
}

fn brand_block<'a>(state: &'a State, brand: &'a Brand) -> Element<'a, DomainMessage> {
    let packs = row(brand.packaging_images.iter().map(|source| {
        match state.images.handle(source) {
            Some(handle) => container(image(handle.clone()).height(260))
                .center_x(Length::FillPortion(1))
                .into(),
            None => container(text("Packaging image").size(13))
                .width(Length::FillPortion(1))
                .height(260)
                .center_y(260)
                .center_x(Length::FillPortion(1))
                .style(theme::Container::Placeholder.style())
                .into(),
        }
    }))
    .spacing(20);

    container(
        column![
            row![
                column![
                    text(brand.name).size(34).color(VagdeviTheme::TEXT_HEADING),
                    text(brand.tagline).size(18).color(VagdeviTheme::GOLD),
                ]
                .spacing(4),
                Space::new().width(Length::Fill),
                button(text(format!("Enquire about {}", brand.name)).size(15))
                    .on_press(UiMessage::Enquire(format!("Enquiry about {} Rice", brand.name)).into())
                    .style(theme::Button::Primary.style())
                    .padding([12, 24]),
            ]
            .align_y(Alignment::Center),
            text(brand.description).size(16),
            packs,
        ]
        .spacing(20),
    )
    .padding(32)
    .style(theme::Container::Card.style())
    .into()
}

fn varieties(state: &State) -> Element<'_, DomainMessage> {
    let rows = VARIETIES.chunks(CARDS_PER_ROW).map(|chunk| {
        let mut cards = row![].spacing(24);
        for variety in chunk {
            cards = cards.push(container(product_card(state, variety)).width(Length::FillPortion(1)));
        }
        for _ in chunk.len()..CARDS_PER_ROW {
            cards = cards.push(Space::new().width(Length::FillPortion(1)));
        }
        cards.into()
    });

    column![
        section_title(
            "Rice Varieties",
            Some("Available as steam rice and double boiled rice."),
            VagdeviTheme::TEXT_HEADING,
        ),
        column(rows).spacing(24),
    ]
    .spacing(36)
    .into()
}

fn faqs() -> Element<'static, DomainMessage> {
    let items = FAQS.iter().map(|faq: &Faq| {
        container(
            column![
                text(faq.question).size(18).color(VagdeviTheme::TEXT_HEADING),
                text(faq.answer).size(15),
            ]
            .spacing(10),
        )
        .padding(24)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
    });

    column![
        section_title("Frequently Asked Questions", None, VagdeviTheme::TEXT_HEADING),
        column(items).spacing(16),
    ]
    .spacing(36)
    .into()
}
