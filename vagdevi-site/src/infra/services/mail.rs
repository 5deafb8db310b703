//! Mail relay service trait and the EmailJS adapter.
//!
//! The contact domain only depends on [`MailService`]; the recording stub
//! used by tests lives in `infra::testing::stubs::RecordingMailService`.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;
use vagdevi_config::MailRelayConfig;
use vagdevi_core::OutboundEmail;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("mail relay rejected the message with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Delivers validated contact messages.
#[async_trait]
pub trait MailService: Send + Sync + std::fmt::Debug {
    /// Send one message. No retries are attempted.
    async fn send(&self, email: OutboundEmail) -> Result<(), RelayError>;
}

/// Posts messages to the EmailJS REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsService {
    client: reqwest::Client,
    endpoint: Url,
}

impl EmailJsService {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &MailRelayConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MailService for EmailJsService {
    async fn send(&self, email: OutboundEmail) -> Result<(), RelayError> {
        log::debug!(
            "Sending contact message via {} (service {})",
            self.endpoint,
            email.credentials.service_id
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&email.request())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Mail relay rejected message: {} - {}", status, body);
            return Err(RelayError::Rejected { status, body });
        }

        log::info!("Contact message delivered");
        Ok(())
    }
}
