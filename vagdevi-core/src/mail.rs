use serde::{Deserialize, Serialize};

use crate::contact::ValidatedContact;

/// The three values the hosted mail relay needs for every send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}

/// Values substituted into the relay's email template.
///
/// Optional fields are sent as empty strings so the template always sees
/// every key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl From<&ValidatedContact> for TemplateParams {
    fn from(contact: &ValidatedContact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone().unwrap_or_default(),
            company: contact.company.clone().unwrap_or_default(),
            subject: contact.subject.clone(),
            message: contact.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub credentials: RelayCredentials,
    pub params: TemplateParams,
}

/// JSON body accepted by the relay's send endpoint.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl OutboundEmail {
    pub fn new(credentials: RelayCredentials, contact: &ValidatedContact) -> Self {
        Self {
            credentials,
            params: TemplateParams::from(contact),
        }
    }

    pub fn request(&self) -> RelayRequest<'_> {
        RelayRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: &self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_relay_field_names() {
        let contact = ValidatedContact {
            name: "Anita".into(),
            email: "anita@example.com".into(),
            phone: None,
            company: Some("Anita Stores".into()),
            subject: "Samples".into(),
            message: "Please send samples.".into(),
        };
        let email = OutboundEmail::new(
            RelayCredentials::new("service_1", "template_1", "public_1"),
            &contact,
        );

        let body = serde_json::to_value(email.request()).unwrap();
        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_1");
        assert_eq!(body["user_id"], "public_1");
        assert_eq!(body["template_params"]["company"], "Anita Stores");
        assert_eq!(body["template_params"]["phone"], "");
        assert_eq!(body["template_params"]["message"], "Please send samples.");
    }
}
