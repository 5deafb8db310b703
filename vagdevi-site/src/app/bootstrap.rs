use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use iced::Task;
use url::Url;
use vagdevi_config::{Config, ConfigLoader, constants::DEFAULT_RELAY_URL};
use vagdevi_core::catalog::packaging_carousel;

use crate::common::messages::DomainMessage;
use crate::domains::carousel::{CarouselDomain, HeroCarouselState};
use crate::domains::contact::{ContactDomain, ContactDomainState};
use crate::domains::ui::messages::Message as UiMessage;
use crate::infra::cache::images::fetch_image_with_key;
use crate::infra::constants::content::{BRANDS, FARMER_MASCOT, NAV_LOGO, VARIETIES};
use crate::infra::services::{EmailJsService, MailService};
use crate::infra::testing::stubs::RecordingMailService;
use crate::state::State;

const ENV_TEST_STUBS: &str = "VAGDEVI_TEST_STUBS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub config: Config,
    /// Where submissions are posted; the default relay when none is configured.
    pub relay_endpoint: Url,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let relay_endpoint = match &config.mail_relay {
            Some(relay) => relay.api_url.clone(),
            None => Url::parse(DEFAULT_RELAY_URL)
                .context("default mail relay URL is invalid")?,
        };

        Ok(Self {
            config,
            relay_endpoint,
            use_test_stubs: false,
        })
    }

    pub fn from_environment() -> anyhow::Result<Self> {
        let load = ConfigLoader::new()
            .load()
            .context("failed to load showcase configuration")?;

        if let Some(path) = &load.config.metadata.config_path {
            log::info!("Using configuration file {}", path.display());
        }
        log::info!(
            "Mail relay {}",
            if load.config.mail_relay.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );

        let use_test_stubs = std::env::var(ENV_TEST_STUBS).is_ok_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });

        Ok(Self::new(load.config)?.with_test_stubs(use_test_stubs))
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }
}

/// Boot logic shared by the running application and tests.
pub fn base_state(config: &AppConfig) -> State {
    let mail_service: Arc<dyn MailService> = if config.use_test_stubs() {
        log::info!("Contact form submissions are recorded, not sent");
        Arc::new(RecordingMailService::new())
    } else {
        Arc::new(EmailJsService::new(config.relay_endpoint.clone()))
    };

    let mut state = State::new(config.config.clone(), mail_service);

    state.domains.carousel = CarouselDomain::new(HeroCarouselState::new(
        packaging_carousel(&BRANDS),
        &config.config.carousel,
    ));
    state.domains.contact =
        ContactDomain::new(ContactDomainState::new(&config.config.contact));
    state.domains.ui.state.observe_viewport(Instant::now());

    state
}

/// Every image locator the pages render.
pub fn image_locators(state: &State) -> Vec<String> {
    let carousel = state
        .domains
        .carousel
        .state
        .carousel
        .items()
        .iter()
        .map(|item| item.source.clone());
    let logos = BRANDS.iter().map(|brand| brand.logo.to_string());
    let varieties = VARIETIES.iter().map(|variety| variety.image.to_string());

    [NAV_LOGO.to_string(), FARMER_MASCOT.to_string()]
        .into_iter()
        .chain(carousel)
        .chain(logos)
        .chain(varieties)
        .collect()
}

/// Boot logic for the running application, returning the initial state and task batch.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let mut state = base_state(config);

    let mut tasks = Vec::new();
    for locator in image_locators(&state) {
        if let Some(url) = state.images.request(&locator) {
            tasks.push(Task::perform(
                fetch_image_with_key(locator, url),
                |(key, result)| DomainMessage::Ui(UiMessage::ImageLoaded(key, result)),
            ));
        }
    }

    log::info!(
        "Showcase ready: {} carousel items, {} images pending",
        state.domains.carousel.state.carousel.len(),
        tasks.len()
    );

    (state, Task::batch(tasks))
}
