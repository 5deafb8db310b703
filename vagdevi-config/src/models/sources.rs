use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_API_URL, ENV_CAROUSEL_RADIUS, ENV_CONFIG_PATH, ENV_CONTACT_RESET_SECS,
    ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_SWIPE_THRESHOLD, ENV_TEMPLATE_ID,
};
use crate::util::{non_empty, non_empty_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub mail_relay: FileMailRelayConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub contact: FileContactConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileMailRelayConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_radius: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileContactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_delay_secs: Option<u64>,
}

/// Environment-derived configuration values.
///
/// Numeric settings are kept raw so the loader can report which variable
/// failed to parse.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub api_url: Option<String>,
    pub carousel_radius: Option<String>,
    pub swipe_threshold: Option<String>,
    pub contact_reset_secs: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(ENV_CONFIG_PATH).map(PathBuf::from),
            service_id: non_empty_var(ENV_SERVICE_ID),
            template_id: non_empty_var(ENV_TEMPLATE_ID),
            public_key: non_empty_var(ENV_PUBLIC_KEY),
            api_url: non_empty_var(ENV_API_URL),
            carousel_radius: non_empty_var(ENV_CAROUSEL_RADIUS),
            swipe_threshold: non_empty_var(ENV_SWIPE_THRESHOLD),
            contact_reset_secs: non_empty_var(ENV_CONTACT_RESET_SECS),
        }
    }

    /// Build from explicit key/value pairs instead of the process environment.
    ///
    /// Unknown keys are ignored and blank values count as unset.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut env = Self::default();
        for (key, raw) in pairs {
            let value = non_empty(raw);
            match key {
                ENV_CONFIG_PATH => env.config_path = value.map(PathBuf::from),
                ENV_SERVICE_ID => env.service_id = value,
                ENV_TEMPLATE_ID => env.template_id = value,
                ENV_PUBLIC_KEY => env.public_key = value,
                ENV_API_URL => env.api_url = value,
                ENV_CAROUSEL_RADIUS => env.carousel_radius = value,
                ENV_SWIPE_THRESHOLD => env.swipe_threshold = value,
                ENV_CONTACT_RESET_SECS => env.contact_reset_secs = value,
                _ => {}
            }
        }
        env
    }
}
