use std::time::{Duration, Instant};

use vagdevi_core::contact::{ContactSession, Field, SubmissionStatus, SubmitError, SubmitOutcome};
use vagdevi_core::mail::RelayCredentials;

fn credentials() -> RelayCredentials {
    RelayCredentials::new("service_vagdevi", "template_enquiry", "public_key")
}

#[test]
fn empty_submission_records_four_errors_and_sends_nothing() {
    let mut session = ContactSession::default();
    let outcome = session.submit(Some(&credentials()));

    assert_eq!(outcome, SubmitOutcome::Invalid);
    let messages: Vec<String> = session.errors().iter().map(|(_, error)| error.to_string()).collect();
    assert_eq!(
        messages,
        [
            "Name is required",
            "Email is required",
            "Subject is required",
            "Message is required",
        ]
    );
    assert_eq!(session.status(), &SubmissionStatus::Idle);
}

#[test]
fn valid_submission_dispatches_once_and_auto_reverts() {
    let mut session = ContactSession::new(Duration::from_secs(6));
    session.edit(Field::Name, " Lakshmi ");
    session.edit(Field::Email, "lakshmi@stores.in");
    session.edit(Field::Phone, "+91 98480 00000");
    session.edit(Field::Subject, "Bulk order");
    session.edit(Field::Message, "Quote for 100 bags of RNR boiled rice.");

    let email = match session.submit(Some(&credentials())) {
        SubmitOutcome::Dispatch(email) => email,
        other => panic!("expected dispatch, got {other:?}"),
    };
    assert_eq!(email.params.name, "Lakshmi");
    assert_eq!(email.params.phone, "+91 98480 00000");
    assert_eq!(email.params.company, "");
    assert!(session.is_pending());

    assert_eq!(session.submit(Some(&credentials())), SubmitOutcome::AlreadyPending);

    let sent = Instant::now();
    session.complete(Ok(()), sent);
    assert!(session.is_submitted());
    assert!(session.form().name.is_empty());

    assert!(!session.tick(sent + Duration::from_millis(5_999)));
    assert!(session.tick(sent + Duration::from_secs(6)));
    assert_eq!(session.status(), &SubmissionStatus::Idle);
}

#[test]
fn missing_configuration_never_dispatches() {
    let mut session = ContactSession::default();
    session.prefill_subject("Enquiry about JSR Steam Rice");
    session.edit(Field::Name, "Kiran");
    session.edit(Field::Email, "kiran@example.com");
    session.edit(Field::Message, "Please call me.");

    assert_eq!(
        session.submit(None),
        SubmitOutcome::Rejected(SubmitError::MissingConfiguration)
    );
    assert!(!session.is_pending());
    assert_eq!(session.form().subject, "Enquiry about JSR Steam Rice");
}

#[test]
fn delivery_failure_shows_generic_banner() {
    let mut session = ContactSession::default();
    session.edit(Field::Name, "Kiran");
    session.edit(Field::Email, "kiran@example.com");
    session.edit(Field::Subject, "Hello");
    session.edit(Field::Message, "Hi");
    let _ = session.submit(Some(&credentials()));

    session.complete(
        Err(SubmitError::DeliveryFailed {
            reason: "relay responded 503".into(),
        }),
        Instant::now(),
    );

    let banner = session.banner().expect("banner visible");
    assert_eq!(banner.to_string(), "Failed to send message. Please try again later.");
    assert_eq!(session.form().message, "Hi");

    assert!(matches!(session.submit(Some(&credentials())), SubmitOutcome::Dispatch(_)));
}
