use std::time::{Duration, Instant};

use thiserror::Error;

use super::{ContactForm, Field, FieldErrors};
use crate::mail::{OutboundEmail, RelayCredentials};

/// How long the confirmation stays up before the form returns.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(6);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(
        "Mail relay configuration is missing. Set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY."
    )]
    MissingConfiguration,
    #[error("Failed to send message. Please try again later.")]
    DeliveryFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Submitted { at: Instant },
    Failed(SubmitError),
}

/// What the caller should do after [`ContactSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were recorded; nothing to send.
    Invalid,
    /// A submission is already in flight.
    AlreadyPending,
    /// Sending is impossible; the error is now shown as a banner.
    Rejected(SubmitError),
    /// Send this email, then report back through [`ContactSession::complete`].
    Dispatch(OutboundEmail),
}

/// State of one contact form: input, inline errors and submission progress.
#[derive(Debug, Clone)]
pub struct ContactSession {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmissionStatus,
    reset_delay: Duration,
}

impl Default for ContactSession {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ContactSession {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
            reset_delay,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted { .. })
    }

    /// The error to show in the banner, if any.
    pub fn banner(&self) -> Option<&SubmitError> {
        match &self.status {
            SubmissionStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Update a field. Its inline error and any banner are cleared.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear_field(field);
        if self.banner().is_some() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Fill the subject line, e.g. when arriving from a product enquiry.
    pub fn prefill_subject(&mut self, subject: impl Into<String>) {
        self.edit(Field::Subject, subject);
    }

    pub fn submit(&mut self, credentials: Option<&RelayCredentials>) -> SubmitOutcome {
        if self.is_pending() {
            return SubmitOutcome::AlreadyPending;
        }

        let contact = match self.form.validate() {
            Ok(contact) => {
                self.errors = FieldErrors::default();
                contact
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "contact form rejected by validation");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let Some(credentials) = credentials else {
            tracing::warn!("contact form submitted without mail relay configuration");
            let error = SubmitError::MissingConfiguration;
            self.status = SubmissionStatus::Failed(error.clone());
            return SubmitOutcome::Rejected(error);
        };

        self.status = SubmissionStatus::Pending;
        SubmitOutcome::Dispatch(OutboundEmail::new(credentials.clone(), &contact))
    }

    /// Record the result of the outbound call started by a `Dispatch`.
    pub fn complete(&mut self, result: Result<(), SubmitError>, now: Instant) {
        if !self.is_pending() {
            tracing::debug!("ignoring submission result outside of a pending submission");
            return;
        }

        match result {
            Ok(()) => {
                self.form.clear();
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Submitted { at: now };
            }
            Err(error) => {
                if let SubmitError::DeliveryFailed { reason } = &error {
                    tracing::error!(%reason, "mail relay delivery failed");
                }
                self.status = SubmissionStatus::Failed(error);
            }
        }
    }

    /// Expire the confirmation once the reset delay has passed.
    ///
    /// Returns `true` when the status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let SubmissionStatus::Submitted { at } = self.status
            && now.saturating_duration_since(at) >= self.reset_delay
        {
            self.status = SubmissionStatus::Idle;
            return true;
        }
        false
    }

    pub fn dismiss_error(&mut self) {
        if self.banner().is_some() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Leave the confirmation early to write another message.
    pub fn start_over(&mut self) {
        if self.is_submitted() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> RelayCredentials {
        RelayCredentials::new("service_vagdevi", "template_contact", "pk_live")
    }

    fn fill(session: &mut ContactSession) {
        session.edit(Field::Name, "Anita");
        session.edit(Field::Email, "anita@example.com");
        session.edit(Field::Subject, "Distributor enquiry");
        session.edit(Field::Message, "Interested in Dwaraka brand.");
    }

    #[test]
    fn edit_clears_only_that_fields_error() {
        let mut session = ContactSession::default();
        assert_eq!(session.submit(Some(&credentials())), SubmitOutcome::Invalid);
        assert_eq!(session.errors().len(), 4);

        session.edit(Field::Name, "A");
        assert!(session.errors().get(Field::Name).is_none());
        assert_eq!(session.errors().len(), 3);
    }

    #[test]
    fn missing_configuration_surfaces_banner() {
        let mut session = ContactSession::default();
        fill(&mut session);
        assert_eq!(
            session.submit(None),
            SubmitOutcome::Rejected(SubmitError::MissingConfiguration)
        );
        assert_eq!(session.banner(), Some(&SubmitError::MissingConfiguration));

        session.edit(Field::Message, "Updated");
        assert!(session.banner().is_none());
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut session = ContactSession::default();
        fill(&mut session);
        assert!(matches!(session.submit(Some(&credentials())), SubmitOutcome::Dispatch(_)));
        assert_eq!(session.submit(Some(&credentials())), SubmitOutcome::AlreadyPending);
    }

    #[test]
    fn success_clears_form_and_reverts_after_delay() {
        let mut session = ContactSession::new(Duration::from_secs(6));
        fill(&mut session);
        let _ = session.submit(Some(&credentials()));

        let sent_at = Instant::now();
        session.complete(Ok(()), sent_at);
        assert!(session.is_submitted());
        assert_eq!(session.form(), &ContactForm::default());

        assert!(!session.tick(sent_at + Duration::from_secs(5)));
        assert!(session.is_submitted());
        assert!(session.tick(sent_at + Duration::from_secs(6)));
        assert_eq!(session.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_input_and_can_be_dismissed() {
        let mut session = ContactSession::default();
        fill(&mut session);
        let _ = session.submit(Some(&credentials()));
        session.complete(
            Err(SubmitError::DeliveryFailed {
                reason: "HTTP 400".into(),
            }),
            Instant::now(),
        );

        assert_eq!(session.form().name, "Anita");
        assert!(session.banner().is_some());
        session.dismiss_error();
        assert_eq!(session.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut session = ContactSession::default();
        session.complete(Ok(()), Instant::now());
        assert_eq!(session.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn start_over_leaves_confirmation() {
        let mut session = ContactSession::default();
        fill(&mut session);
        let _ = session.submit(Some(&credentials()));
        session.complete(Ok(()), Instant::now());
        session.start_over();
        assert_eq!(session.status(), &SubmissionStatus::Idle);
    }
}
