use std::sync::Arc;
use std::time::Instant;

use iced::Task;
use vagdevi_core::contact::SubmitOutcome;
use vagdevi_core::{Field, OutboundEmail, SubmitError};

use crate::{
    common::messages::{DomainMessage, DomainUpdateResult},
    domains::contact::messages::Message,
    infra::services::MailService,
    state::State,
};

/// Handle contact form messages
pub fn update_contact(state: &mut State, message: Message) -> DomainUpdateResult {
    let credentials = state.config.relay_credentials();
    let contact = &mut state.domains.contact.state;
    let session = &mut contact.session;

    match message {
        Message::Edit(field, value) => {
            session.edit(field, value);
            if field == Field::Message {
                contact.reload_message_editor();
            }
            DomainUpdateResult::none()
        }
        Message::MessageAction(action) => {
            let is_edit = action.is_edit();
            contact.message_editor.perform(action);
            if is_edit {
                let text = contact.message_editor.text();
                contact.session.edit(Field::Message, text);
            }
            DomainUpdateResult::none()
        }
        Message::PrefillSubject(subject) => {
            session.prefill_subject(subject);
            DomainUpdateResult::none()
        }
        Message::Submit => match session.submit(credentials) {
            SubmitOutcome::Dispatch(email) => {
                log::info!("Submitting contact form ({})", email.params.subject);
                DomainUpdateResult::task(send_email(
                    Arc::clone(&state.mail_service),
                    email,
                ))
            }
            SubmitOutcome::Invalid => {
                log::debug!(
                    "Contact form has {} invalid field(s)",
                    session.errors().len()
                );
                DomainUpdateResult::none()
            }
            SubmitOutcome::AlreadyPending => {
                log::debug!("Contact form submission already in flight");
                DomainUpdateResult::none()
            }
            SubmitOutcome::Rejected(error) => {
                log::warn!("Contact form not sent: {}", error);
                DomainUpdateResult::none()
            }
        },
        Message::Delivered(result) => {
            match &result {
                Ok(()) => log::info!("Contact message sent"),
                Err(err) => log::error!("Contact message failed: {:?}", err),
            }
            session.complete(result, Instant::now());
            if session.is_submitted() {
                contact.reload_message_editor();
            }
            DomainUpdateResult::none()
        }
        Message::DismissError => {
            session.dismiss_error();
            DomainUpdateResult::none()
        }
        Message::StartOver => {
            session.start_over();
            DomainUpdateResult::none()
        }
        Message::Tick => {
            if session.tick(Instant::now()) {
                log::debug!("Contact confirmation expired");
            }
            DomainUpdateResult::none()
        }
    }
}

fn send_email(
    service: Arc<dyn MailService>,
    email: OutboundEmail,
) -> Task<DomainMessage> {
    Task::perform(deliver(service, email), |result| {
        DomainMessage::Contact(Message::Delivered(result))
    })
}

/// Hand one message to the relay, reporting failures the way the form shows
/// them.
pub async fn deliver(
    service: Arc<dyn MailService>,
    email: OutboundEmail,
) -> Result<(), SubmitError> {
    service
        .send(email)
        .await
        .map_err(|err| SubmitError::DeliveryFailed {
            reason: err.to_string(),
        })
}
