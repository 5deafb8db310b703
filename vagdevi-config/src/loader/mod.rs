pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;
use vagdevi_core::RelayCredentials;
use vagdevi_core::carousel::MAX_VISIBILITY_RADIUS;

use crate::{
    constants::{
        DEFAULT_RELAY_URL, ENV_CAROUSEL_RADIUS, ENV_CONTACT_RESET_SECS,
        ENV_ENV_FILE, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_SWIPE_THRESHOLD,
        ENV_TEMPLATE_ID,
    },
    models::{
        CarouselConfig, Config, ConfigMetadata, ContactConfig, MailRelayConfig,
        sources::{
            EnvConfig, FileCarouselConfig, FileConfig, FileContactConfig,
            FileMailRelayConfig,
        },
    },
    util::{non_empty, non_empty_var, parse_optional},
    validation::ConfigWarnings,
};

pub use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("vagdevi.toml"),
        PathBuf::from("config/vagdevi.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
struct LoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    /// Use these values instead of reading `.env` and the process environment.
    env: Option<EnvConfig>,
    /// Skip the default `vagdevi.toml` lookup in the working directory.
    skip_default_locations: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn without_default_locations(mut self) -> Self {
        self.options.skip_default_locations = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env_config, env_file_loaded) = match &self.options.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = compose_config(
            file_config.unwrap_or_default(),
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        for warning in warnings.iter() {
            tracing::warn!(%warning, "configuration warning");
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let explicit = self
            .options
            .env_file
            .clone()
            .or_else(|| non_empty_var(ENV_ENV_FILE).map(PathBuf::from));

        let result = match explicit {
            Some(path) => dotenvy::from_path(&path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };

        match result {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None if self.options.skip_default_locations => return Ok((None, None)),
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    let FileConfig {
        mail_relay: file_relay,
        carousel: file_carousel,
        contact: file_contact,
    } = file;

    let mail_relay = resolve_mail_relay(&env, file_relay, &mut warnings)?;
    let carousel = resolve_carousel(&env, file_carousel, &mut warnings)?;
    let contact = resolve_contact(&env, file_contact)?;

    let config = Config {
        mail_relay,
        carousel,
        contact,
        metadata,
    };

    Ok((config, warnings))
}

fn resolve_mail_relay(
    env: &EnvConfig,
    file: FileMailRelayConfig,
    warnings: &mut ConfigWarnings,
) -> Result<Option<MailRelayConfig>, ConfigLoadError> {
    let pick = |from_env: &Option<String>, from_file: Option<String>| {
        from_env
            .clone()
            .or_else(|| from_file.as_deref().and_then(non_empty))
    };

    let service_id = pick(&env.service_id, file.service_id);
    let template_id = pick(&env.template_id, file.template_id);
    let public_key = pick(&env.public_key, file.public_key);

    let raw_url = pick(&env.api_url, file.api_url)
        .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
    let api_url = parse_relay_url(&raw_url)?;

    match (service_id, template_id, public_key) {
        (Some(service_id), Some(template_id), Some(public_key)) => {
            Ok(Some(MailRelayConfig {
                credentials: RelayCredentials {
                    service_id,
                    template_id,
                    public_key,
                },
                api_url,
            }))
        }
        (None, None, None) => {
            warnings.push_with_hint(
                "Mail relay not configured; contact form submissions will report a configuration error",
                format!("Set {ENV_SERVICE_ID}, {ENV_TEMPLATE_ID} and {ENV_PUBLIC_KEY}"),
            );
            Ok(None)
        }
        (service_id, template_id, public_key) => {
            let missing: Vec<&str> = [
                (service_id.is_none(), ENV_SERVICE_ID),
                (template_id.is_none(), ENV_TEMPLATE_ID),
                (public_key.is_none(), ENV_PUBLIC_KEY),
            ]
            .into_iter()
            .filter_map(|(is_missing, key)| is_missing.then_some(key))
            .collect();

            warnings.push_with_hint(
                format!(
                    "Mail relay partially configured; missing {}",
                    missing.join(", ")
                ),
                "All three values are required before the contact form can send",
            );
            Ok(None)
        }
    }
}

fn parse_relay_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw).map_err(|source| ConfigLoadError::InvalidRelayUrl {
        value: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedRelayScheme {
            scheme: other.to_string(),
        }),
    }
}

fn resolve_carousel(
    env: &EnvConfig,
    file: FileCarouselConfig,
    warnings: &mut ConfigWarnings,
) -> Result<CarouselConfig, ConfigLoadError> {
    let defaults = CarouselConfig::default();

    let requested_radius = parse_optional::<usize>(
        ENV_CAROUSEL_RADIUS,
        env.carousel_radius.as_deref(),
    )?
    .or(file.visibility_radius)
    .unwrap_or(defaults.visibility_radius);

    let visibility_radius = if requested_radius > MAX_VISIBILITY_RADIUS {
        warnings.push(format!(
            "Carousel visibility radius {requested_radius} exceeds the slot table; clamped to {MAX_VISIBILITY_RADIUS}"
        ));
        MAX_VISIBILITY_RADIUS
    } else {
        requested_radius
    };

    let swipe_threshold = parse_optional::<f32>(
        ENV_SWIPE_THRESHOLD,
        env.swipe_threshold.as_deref(),
    )?
    .or(file.swipe_threshold)
    .unwrap_or(defaults.swipe_threshold);

    if !swipe_threshold.is_finite() || swipe_threshold <= 0.0 {
        return Err(ConfigLoadError::NonPositiveSwipeThreshold {
            value: swipe_threshold,
        });
    }

    Ok(CarouselConfig {
        visibility_radius,
        swipe_threshold,
    })
}

fn resolve_contact(
    env: &EnvConfig,
    file: FileContactConfig,
) -> Result<ContactConfig, ConfigLoadError> {
    let secs = parse_optional::<u64>(
        ENV_CONTACT_RESET_SECS,
        env.contact_reset_secs.as_deref(),
    )?
    .or(file.reset_delay_secs);

    Ok(match secs {
        Some(secs) => ContactConfig {
            reset_delay: Duration::from_secs(secs),
        },
        None => ContactConfig::default(),
    })
}
