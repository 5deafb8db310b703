//! Hero carousel: items layered back to front, arrows, and dot indicators.

use iced::widget::{Space, Stack, button, column, container, image, mouse_area, row, text};
use iced::{Alignment, Element, Length, Padding};
use lucide_icons::Icon;
use vagdevi_core::carousel::{Direction, SlotRole};

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::carousel::ItemFrame;
use crate::domains::carousel::messages::Message as CarouselMessage;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::infra::cache::ImageState;
use crate::infra::constants::layout::carousel::{
    ACTIVE_DOT_WIDTH, AREA_HEIGHT, AREA_WIDTH, DOT_SIZE, ITEM_HEIGHT, ITEM_WIDTH,
};
use crate::state::State;

pub fn view_hero_carousel(state: &State) -> Element<'_, DomainMessage> {
    let hero = &state.domains.carousel.state;
    if hero.carousel.is_empty() {
        return container(text("No packaging images available").color(VagdeviTheme::TEXT_MUTED))
            .width(AREA_WIDTH)
            .height(AREA_HEIGHT)
            .center_x(AREA_WIDTH)
            .center_y(AREA_HEIGHT)
            .into();
    }

    let stage = hero
        .frames()
        .into_iter()
        .fold(Stack::new().width(AREA_WIDTH).height(AREA_HEIGHT), |stage, frame| {
            stage.push(positioned_item(state, frame))
        });

    let stage = mouse_area(stage)
        .on_move(|point| DomainMessage::Carousel(CarouselMessage::PointerMoved(point.x)));

    let arrows = row![
        arrow(Icon::ChevronLeft, Direction::Previous),
        Space::new().width(Length::Fill),
        arrow(Icon::ChevronRight, Direction::Next),
    ]
    .align_y(Alignment::Center)
    .width(AREA_WIDTH)
    .height(AREA_HEIGHT);

    column![
        Stack::new().push(stage).push(arrows),
        dots(state),
    ]
    .spacing(18)
    .align_x(Alignment::Center)
    .into()
}

/// Place one item inside the stage by padding it to its slot position.
fn positioned_item<'a>(state: &'a State, frame: ItemFrame<'a>) -> Element<'a, DomainMessage> {
    let width = ITEM_WIDTH * frame.scale;
    let height = ITEM_HEIGHT * frame.scale;
    let center_x = AREA_WIDTH / 2.0 + frame.offset * ITEM_WIDTH + frame.shift;

    let left = (center_x - width / 2.0).clamp(0.0, (AREA_WIDTH - width).max(0.0));
    let top = ((AREA_HEIGHT - height) / 2.0).max(0.0);

    let picture: Element<'a, DomainMessage> = match state.images.get(&frame.item.source) {
        Some(ImageState::Loaded(handle)) => image(handle.clone())
            .width(width)
            .height(height)
            .opacity(frame.opacity)
            .into(),
        _ => container(text(frame.item.label.as_str()).size(14))
            .width(width)
            .height(height)
            .center_x(width)
            .center_y(height)
            .style(theme::Container::Placeholder.style())
            .into(),
    };

    let item: Element<'a, DomainMessage> = if frame.role == SlotRole::Center {
        mouse_area(picture)
            .on_press(CarouselMessage::DragStarted.into())
            .interaction(iced::mouse::Interaction::Grab)
            .into()
    } else {
        button(picture)
            .on_press(CarouselMessage::JumpTo(frame.index).into())
            .style(theme::Button::CarouselItem.style())
            .padding(0)
            .into()
    };

    container(item)
        .padding(Padding {
            top,
            left,
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

fn arrow(icon: Icon, direction: Direction) -> Element<'static, DomainMessage> {
    button(icon_text_with_size(icon, 22.0))
        .on_press(CarouselMessage::Navigate(direction).into())
        .style(theme::Button::CarouselArrow.style())
        .padding(10)
        .into()
}

fn dots(state: &State) -> Element<'_, DomainMessage> {
    let hero = &state.domains.carousel.state;
    let cursor = hero.carousel.cursor();

    let dots = (0..hero.carousel.len()).map(|index| {
        let active = cursor == Some(index);
        button(Space::new().width(0).height(0))
            .on_press(CarouselMessage::JumpTo(index).into())
            .style(if active {
                theme::Button::CarouselDotActive.style()
            } else {
                theme::Button::CarouselDot.style()
            })
            .width(if active { ACTIVE_DOT_WIDTH } else { DOT_SIZE })
            .height(DOT_SIZE)
            .padding(0)
            .into()
    });

    row(dots).spacing(8).align_y(Alignment::Center).into()
}
