//! Contact page: the enquiry form and the company's contact details.

use iced::widget::{Space, button, column, container, row, text, text_editor, text_input};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;
use vagdevi_core::{ContactSession, Field};

use crate::common::messages::DomainMessage;
use crate::common::ui_utils::icon_text_with_size;
use crate::domains::contact::ContactDomainState;
use crate::domains::contact::messages::Message as ContactMessage;
use crate::domains::ui::reveal::SectionId;
use crate::domains::ui::theme::{self, VagdeviTheme};
use crate::domains::ui::views::content_width;
use crate::domains::ui::views::scroll_reveal::reveal;
use crate::domains::ui::views::section_title::section_title;
use crate::infra::constants::content::{COMPANY, contact};
use crate::state::State;

pub fn view_contact(state: &State) -> Element<'_, DomainMessage> {
    let form_state = &state.domains.contact.state;

    let form_panel: Element<'_, DomainMessage> = if form_state.session.is_submitted() {
        success_panel()
    } else {
        form(form_state)
    };

    let body: Element<'_, DomainMessage> = if state.domains.ui.state.navbar.is_mobile() {
        column![
            reveal(state, SectionId::ContactForm, VagdeviTheme::BACKGROUND, form_panel),
            reveal(state, SectionId::ContactInfo, VagdeviTheme::BACKGROUND, info_panel()),
        ]
        .spacing(32)
        .into()
    } else {
        row![
            container(reveal(state, SectionId::ContactForm, VagdeviTheme::BACKGROUND, form_panel))
                .width(Length::FillPortion(3)),
            container(reveal(state, SectionId::ContactInfo, VagdeviTheme::BACKGROUND, info_panel()))
                .width(Length::FillPortion(2)),
        ]
        .spacing(32)
        .into()
    };

    column![
        reveal(
            state,
            SectionId::ContactIntro,
            VagdeviTheme::BACKGROUND_ALT,
            container(content_width(
                section_title(contact::TITLE, Some(contact::SUBTITLE), VagdeviTheme::TEXT_HEADING),
                64.0,
            ))
            .width(Length::Fill)
            .style(theme::Container::AltSection.style()),
        ),
        content_width(body, 56.0),
    ]
    .width(Length::Fill)
    .into()
}

fn form(form_state: &ContactDomainState) -> Element<'_, DomainMessage> {
    let session = &form_state.session;
    let pending = session.is_pending();
    let mut content = column![
        text(contact::FORM_TITLE).size(26).color(VagdeviTheme::TEXT_HEADING),
        text(contact::FORM_SUBTITLE).size(15).color(VagdeviTheme::TEXT_MUTED),
    ]
    .spacing(18);

    if let Some(error) = session.banner() {
        content = content.push(
            container(
                row![
                    icon_text_with_size(Icon::CircleAlert, 18.0),
                    text(error.to_string()).size(14).width(Length::Fill),
                    button(icon_text_with_size(Icon::X, 14.0))
                        .on_press(ContactMessage::DismissError.into())
                        .style(theme::Button::Text.style())
                        .padding(4),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding(14)
            .width(Length::Fill)
            .style(theme::Container::ErrorBanner.style()),
        );
    }

    content = content
        .push(
            row![
                field_input(session, Field::Name, "Your full name", pending),
                field_input(session, Field::Email, "you@company.com", pending),
            ]
            .spacing(16),
        )
        .push(
            row![
                field_input(session, Field::Phone, "+91", pending),
                field_input(session, Field::Company, "Company name", pending),
            ]
            .spacing(16),
        )
        .push(field_input(session, Field::Subject, "How can we help?", pending))
        .push(message_input(form_state, "Tell us about your requirements", pending));

    let submit_label = if pending {
        row![
            icon_text_with_size(Icon::Loader, 16.0),
            text(contact::SUBMITTING).size(16)
        ]
    } else {
        row![
            icon_text_with_size(Icon::Send, 16.0),
            text(contact::SUBMIT).size(16)
        ]
    };

    let submit = button(
        container(submit_label.spacing(8).align_y(Alignment::Center)).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(14);

    content = content.push(if pending {
        submit.style(theme::Button::Disabled.style())
    } else {
        submit
            .on_press(ContactMessage::Submit.into())
            .style(theme::Button::Primary.style())
    });

    container(content)
        .padding(32)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
}

fn field_input<'a>(
    session: &'a ContactSession,
    field: Field,
    placeholder: &'a str,
    pending: bool,
) -> Element<'a, DomainMessage> {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let error = session.errors().get(field);
    let mut input = text_input(placeholder, session.form().get(field))
        .padding(12)
        .size(15)
        .style(if error.is_some() {
            theme::TextInput::invalid()
        } else {
            theme::TextInput::style()
        });
    if !pending {
        input = input
            .on_input(move |value| DomainMessage::Contact(ContactMessage::Edit(field, value)))
            .on_submit(ContactMessage::Submit.into());
    }

    let mut content = column![
        text(label).size(14).color(VagdeviTheme::TEXT_HEADING),
        input,
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    if let Some(error) = error {
        content = content.push(text(error.to_string()).size(13).color(VagdeviTheme::ERROR));
    }

    content.into()
}

fn message_input<'a>(
    form_state: &'a ContactDomainState,
    placeholder: &'a str,
    pending: bool,
) -> Element<'a, DomainMessage> {
    let field = Field::Message;
    let error = form_state.session.errors().get(field);

    let mut editor = text_editor(&form_state.message_editor)
        .placeholder(placeholder)
        .height(140)
        .padding(12)
        .size(15)
        .style(if error.is_some() {
            theme::TextEditor::invalid()
        } else {
            theme::TextEditor::style()
        });
    if !pending {
        editor = editor
            .on_action(|action| DomainMessage::Contact(ContactMessage::MessageAction(action)));
    }

    let mut content = column![
        text(format!("{} *", field.label())).size(14).color(VagdeviTheme::TEXT_HEADING),
        editor,
    ]
    .spacing(6)
    .width(Length::Fill);

    if let Some(error) = error {
        content = content.push(text(error.to_string()).size(13).color(VagdeviTheme::ERROR));
    }

    content.into()
}

fn success_panel() -> Element<'static, DomainMessage> {
    container(
        column![
            icon_text_with_size(Icon::CircleCheck, 56.0).color(VagdeviTheme::SUCCESS),
            text(contact::SUCCESS_TITLE).size(28).color(VagdeviTheme::TEXT_HEADING),
            text(contact::SUCCESS_BODY).size(16),
            Space::new().height(8),
            button(text(contact::SEND_ANOTHER).size(15))
                .on_press(ContactMessage::StartOver.into())
                .style(theme::Button::Text.style()),
        ]
        .spacing(14)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(theme::Container::SuccessPanel.style())
    .into()
}

fn info_panel() -> Element<'static, DomainMessage> {
    column![
        info_card(Icon::MapPin, "Visit Us", COMPANY.address, None),
        info_card(Icon::Mail, "Email Us", COMPANY.email, Some(contact::EMAIL_NOTE)),
        info_card(Icon::Phone, "Call Us", COMPANY.phone, Some(contact::HOURS)),
    ]
    .spacing(16)
    .into()
}

fn info_card(
    icon: Icon,
    title: &'static str,
    value: &'static str,
    note: Option<&'static str>,
) -> Element<'static, DomainMessage> {
    let mut details = column![
        text(title).size(17).color(VagdeviTheme::TEXT_HEADING),
        text(value).size(15),
    ]
    .spacing(4);
    if let Some(note) = note {
        details = details.push(text(note).size(13).color(VagdeviTheme::TEXT_MUTED));
    }

    container(
        row![
            icon_text_with_size(icon, 22.0).color(VagdeviTheme::SAFFRON),
            details,
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}
