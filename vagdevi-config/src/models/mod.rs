pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;
use vagdevi_core::RelayCredentials;
use vagdevi_core::carousel::{DEFAULT_SWIPE_THRESHOLD, MAX_VISIBILITY_RADIUS};
use vagdevi_core::contact::DEFAULT_RESET_DELAY;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Absent when any of the three relay values is missing.
    pub mail_relay: Option<MailRelayConfig>,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn relay_credentials(&self) -> Option<&RelayCredentials> {
        self.mail_relay.as_ref().map(|relay| &relay.credentials)
    }
}

#[derive(Debug, Clone)]
pub struct MailRelayConfig {
    pub credentials: RelayCredentials,
    pub api_url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub visibility_radius: usize,
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visibility_radius: MAX_VISIBILITY_RADIUS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactConfig {
    pub reset_delay: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
