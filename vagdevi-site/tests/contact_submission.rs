//! Contact form flow driven through the contact domain update handler.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use iced::Task;
use iced::widget::text_editor;
use reqwest::StatusCode;
use url::Url;
use vagdevi_config::{Config, MailRelayConfig, constants::DEFAULT_RELAY_URL};
use vagdevi_core::{
    Field, OutboundEmail, RelayCredentials, SubmissionStatus, SubmitError, TemplateParams,
};
use vagdevi_site::app::bootstrap::{AppConfig, base_state};
use vagdevi_site::common::messages::DomainMessage;
use vagdevi_site::domains::contact::messages::Message as ContactMessage;
use vagdevi_site::domains::contact::update::{deliver, update_contact};
use vagdevi_site::infra::testing::stubs::RecordingMailService;
use vagdevi_site::state::State;

fn configured() -> Config {
    Config {
        mail_relay: Some(MailRelayConfig {
            credentials: RelayCredentials::new("service_1", "template_1", "public_1"),
            api_url: Url::parse(DEFAULT_RELAY_URL).unwrap(),
        }),
        ..Config::default()
    }
}

fn state_with(config: Config, stub: &RecordingMailService) -> State {
    let app_config = AppConfig::new(config).unwrap().with_test_stubs(true);
    let mut state = base_state(&app_config);
    state.mail_service = Arc::new(stub.clone());
    state
}

fn fill_valid_form(state: &mut State) {
    for (field, value) in [
        (Field::Name, "Ravi Kumar"),
        (Field::Email, "ravi@example.com"),
        (Field::Subject, "Bulk order"),
        (Field::Message, "Need 50 bags of JSR steam rice."),
    ] {
        let _ = update_contact(state, ContactMessage::Edit(field, value.to_string()));
    }
}

fn session(state: &State) -> &vagdevi_core::ContactSession {
    &state.domains.contact.state.session
}

/// Run a task to completion and collect the messages it produced.
async fn run_task(task: Task<DomainMessage>) -> Vec<DomainMessage> {
    let Some(mut stream) = iced_runtime::task::into_stream(task) else {
        return Vec::new();
    };

    let mut outputs = Vec::new();
    while let Some(action) = stream.next().await {
        if let iced_runtime::Action::Output(message) = action {
            outputs.push(message);
        }
    }
    outputs
}

/// Submit the form and feed the delivery result back into the domain.
async fn submit_and_deliver(state: &mut State) -> Result<(), SubmitError> {
    let task = update_contact(state, ContactMessage::Submit).task;
    assert!(session(state).is_pending());

    let outputs = run_task(task).await;
    assert_eq!(outputs.len(), 1, "submit should produce exactly one result");

    let result = match outputs.into_iter().next() {
        Some(DomainMessage::Contact(ContactMessage::Delivered(result))) => result,
        other => panic!("expected Contact::Delivered, got {other:?}"),
    };

    let _ = update_contact(state, ContactMessage::Delivered(result.clone()));
    result
}

fn sample_email() -> OutboundEmail {
    OutboundEmail {
        credentials: RelayCredentials::new("service_1", "template_1", "public_1"),
        params: TemplateParams {
            name: "Anita".into(),
            email: "anita@example.com".into(),
            phone: String::new(),
            company: String::new(),
            subject: "Samples".into(),
            message: "Please send samples.".into(),
        },
    }
}

#[tokio::test]
async fn valid_submission_is_delivered_and_confirmed() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);
    fill_valid_form(&mut state);

    let result = submit_and_deliver(&mut state).await;

    assert!(result.is_ok());
    assert_eq!(stub.sent_count(), 1);
    assert_eq!(stub.sent()[0].params.subject, "Bulk order");
    assert_eq!(stub.sent()[0].params.phone, "");
    assert_eq!(stub.sent()[0].credentials.service_id, "service_1");

    assert!(session(&state).is_submitted());
    assert_eq!(session(&state).form().get(Field::Name), "");
}

#[tokio::test]
async fn relay_rejection_shows_banner_and_keeps_input() {
    let stub = RecordingMailService::rejecting(StatusCode::BAD_REQUEST);
    let mut state = state_with(configured(), &stub);
    fill_valid_form(&mut state);

    let result = submit_and_deliver(&mut state).await;

    assert_eq!(stub.sent_count(), 1);
    match result {
        Err(SubmitError::DeliveryFailed { reason }) => assert!(reason.contains("400")),
        other => panic!("expected a delivery failure, got {other:?}"),
    }
    assert!(matches!(
        session(&state).banner(),
        Some(SubmitError::DeliveryFailed { .. })
    ));
    assert_eq!(session(&state).form().get(Field::Email), "ravi@example.com");

    let _ = update_contact(&mut state, ContactMessage::DismissError);
    assert!(session(&state).banner().is_none());
}

#[tokio::test]
async fn deliver_reports_relay_outcome() {
    let accepting = RecordingMailService::new();
    assert_eq!(deliver(Arc::new(accepting.clone()), sample_email()).await, Ok(()));
    assert_eq!(accepting.sent(), vec![sample_email()]);

    let rejecting = RecordingMailService::rejecting(StatusCode::TOO_MANY_REQUESTS);
    match deliver(Arc::new(rejecting.clone()), sample_email()).await {
        Err(SubmitError::DeliveryFailed { reason }) => assert!(reason.contains("429")),
        other => panic!("expected a delivery failure, got {other:?}"),
    }
    assert_eq!(rejecting.sent_count(), 1);
}

#[test]
fn missing_relay_configuration_is_reported_without_sending() {
    let stub = RecordingMailService::new();
    let mut state = state_with(Config::default(), &stub);
    fill_valid_form(&mut state);

    let _ = update_contact(&mut state, ContactMessage::Submit);

    assert_eq!(
        session(&state).banner(),
        Some(&SubmitError::MissingConfiguration)
    );
    assert_eq!(stub.sent_count(), 0);
}

#[test]
fn invalid_form_records_inline_errors() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);
    let _ = update_contact(
        &mut state,
        ContactMessage::Edit(Field::Email, "not-an-email".into()),
    );

    let _ = update_contact(&mut state, ContactMessage::Submit);

    let errors = session(&state).errors();
    assert!(errors.get(Field::Name).is_some());
    assert!(errors.get(Field::Email).is_some());
    assert!(errors.get(Field::Phone).is_none());
    assert_eq!(session(&state).status(), &SubmissionStatus::Idle);

    let _ = update_contact(
        &mut state,
        ContactMessage::Edit(Field::Name, "Ravi".into()),
    );
    assert!(session(&state).errors().get(Field::Name).is_none());
}

#[test]
fn duplicate_submit_while_pending_is_ignored() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);
    fill_valid_form(&mut state);

    let _ = update_contact(&mut state, ContactMessage::Submit);
    let _ = update_contact(&mut state, ContactMessage::Submit);
    assert!(session(&state).is_pending());
}

#[test]
fn confirmation_expires_after_reset_delay() {
    let stub = RecordingMailService::new();
    let mut config = configured();
    config.contact.reset_delay = Duration::ZERO;
    let mut state = state_with(config, &stub);
    fill_valid_form(&mut state);

    let _ = update_contact(&mut state, ContactMessage::Submit);
    let _ = update_contact(&mut state, ContactMessage::Delivered(Ok(())));
    assert!(session(&state).is_submitted());

    let _ = update_contact(&mut state, ContactMessage::Tick);
    assert_eq!(session(&state).status(), &SubmissionStatus::Idle);
}

#[test]
fn prefilled_subject_lands_in_the_form() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);

    let _ = update_contact(
        &mut state,
        ContactMessage::PrefillSubject("Enquiry about JSR Rice".into()),
    );
    assert_eq!(
        session(&state).form().get(Field::Subject),
        "Enquiry about JSR Rice"
    );
}

#[test]
fn typing_in_the_message_editor_updates_the_form() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);
    let _ = update_contact(&mut state, ContactMessage::Submit);
    assert!(session(&state).errors().get(Field::Message).is_some());

    let paste = text_editor::Action::Edit(text_editor::Edit::Paste(Arc::new(
        "Two pallets of HMT.\nDelivery to Guntur.".to_string(),
    )));
    let _ = update_contact(&mut state, ContactMessage::MessageAction(paste));

    assert_eq!(
        session(&state).form().get(Field::Message).trim(),
        "Two pallets of HMT.\nDelivery to Guntur."
    );
    assert!(session(&state).errors().get(Field::Message).is_none());

    let _ = update_contact(
        &mut state,
        ContactMessage::MessageAction(text_editor::Action::SelectAll),
    );
    assert_eq!(
        session(&state).form().get(Field::Message).trim(),
        "Two pallets of HMT.\nDelivery to Guntur.",
        "selection does not count as an edit"
    );
}

#[tokio::test]
async fn message_editor_is_cleared_after_delivery() {
    let stub = RecordingMailService::new();
    let mut state = state_with(configured(), &stub);
    fill_valid_form(&mut state);

    let editor = &state.domains.contact.state.message_editor;
    assert_eq!(editor.text().trim(), "Need 50 bags of JSR steam rice.");

    submit_and_deliver(&mut state).await.unwrap();

    assert!(state.domains.contact.state.message_editor.text().trim().is_empty());
}
