//! Contact form fields and validation.

pub mod session;

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use session::{
    ContactSession, DEFAULT_RESET_DELAY, SubmissionStatus, SubmitError, SubmitOutcome,
};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Subject,
        Field::Message,
    ];

    /// Human readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Company => "Company",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone | Field::Company)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Email is invalid")]
    InvalidEmail,
}

/// Inline errors, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear_field(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field, collecting all errors rather than stopping at the first.
    pub fn validate(&self) -> Result<ValidatedContact, FieldErrors> {
        let mut errors = FieldErrors::default();

        for field in [Field::Name, Field::Subject, Field::Message] {
            if self.get(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, FieldError::Required(Field::Email));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedContact {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            phone: optional(&self.phone),
            company: optional(&self.company),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ravi Kumar".into(),
            email: "ravi@example.in".into(),
            phone: String::new(),
            company: "  Kumar Traders ".into(),
            subject: "Bulk order".into(),
            message: "Need 40 bags of JSR steam rice.".into(),
        }
    }

    #[test]
    fn empty_form_reports_four_required_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::Required(Field::Name)));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::Required(Field::Email)));
        assert_eq!(errors.get(Field::Subject), Some(&FieldError::Required(Field::Subject)));
        assert_eq!(errors.get(Field::Message), Some(&FieldError::Required(Field::Message)));
        assert!(errors.get(Field::Phone).is_none());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.name = "   ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name).map(ToString::to_string).as_deref(), Some("Name is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ravi", "ravi@example", "@.", "ravi example.in"] {
            let mut form = filled();
            form.email = email.into();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let contact = filled().validate().unwrap();
        assert_eq!(contact.company.as_deref(), Some("Kumar Traders"));
        assert_eq!(contact.phone, None);
        assert_eq!(contact.email, "ravi@example.in");
    }

    #[test]
    fn error_messages_read_naturally() {
        assert_eq!(FieldError::Required(Field::Subject).to_string(), "Subject is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Email is invalid");
    }
}
