//! Root-level view composition

use iced::widget::{Stack, column, container, scrollable};
use iced::{Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::messages::Message as UiMessage;
use crate::domains::ui::theme;
use crate::domains::ui::views::contact::view_contact;
use crate::domains::ui::views::footer::view_footer;
use crate::domains::ui::views::home::view_home;
use crate::domains::ui::views::navbar::{view_mobile_menu, view_navbar};
use crate::domains::ui::views::products::view_products;
use crate::state::State;
use vagdevi_core::catalog::Page;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let ui = &state.domains.ui.state;

    let page: Element<'_, DomainMessage> = match ui.page {
        Page::Home => view_home(state),
        Page::Products => view_products(state),
        Page::Contact => view_contact(state),
    };

    let body = scrollable(column![page, view_footer()].width(Length::Fill))
        .id(ui.page_scrollable_id.clone())
        .on_scroll(|viewport| DomainMessage::Ui(UiMessage::PageScrolled(viewport)))
        .style(theme::Scrollable::style())
        .width(Length::Fill)
        .height(Length::Fill);

    let content = column![view_navbar(state), body]
        .width(Length::Fill)
        .height(Length::Fill);

    let root: Element<'_, DomainMessage> = match view_mobile_menu(state) {
        Some(menu) => {
            let overlay = container(menu)
                .padding(Padding {
                    top: ui.navbar_height(),
                    ..Padding::ZERO
                })
                .width(Length::Fill);
            Stack::new()
                .push(content)
                .push(overlay)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => content.into(),
    };

    container(root)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Page.style())
        .into()
}
