use crate::infra::services::mail::{MailService, RelayError};

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, RwLock};
use vagdevi_core::OutboundEmail;

/// Records every message instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailService {
    inner: Arc<RwLock<InnerMailState>>,
}

#[derive(Debug, Clone, Default)]
struct InnerMailState {
    sent: Vec<OutboundEmail>,
    reject_with: Option<StatusCode>,
}

impl RecordingMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay that answers every send with `status`.
    pub fn rejecting(status: StatusCode) -> Self {
        let service = Self::default();
        service.set_rejection(Some(status));
        service
    }

    pub fn set_rejection(&self, status: Option<StatusCode>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.reject_with = status;
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.inner
            .read()
            .map(|inner| inner.sent.clone())
            .unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.inner.read().map(|inner| inner.sent.len()).unwrap_or(0)
    }
}

#[async_trait]
impl MailService for RecordingMailService {
    async fn send(&self, email: OutboundEmail) -> Result<(), RelayError> {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.sent.push(email);
        match inner.reject_with {
            Some(status) => Err(RelayError::Rejected {
                status,
                body: "rejected by stub".into(),
            }),
            None => Ok(()),
        }
    }
}
