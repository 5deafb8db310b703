//! Application state
//!
//! Domain state lives in the [`DomainRegistry`]; only services and caches
//! shared across domains sit at the top level.

use std::sync::Arc;

use vagdevi_config::Config;

use crate::domains::DomainRegistry;
use crate::infra::cache::ImageCache;
use crate::infra::services::MailService;

#[derive(Debug)]
pub struct State {
    /// Domain registry containing all domain-specific state
    pub domains: DomainRegistry,

    /// Decoded image handles keyed by locator
    pub images: ImageCache,

    /// Delivers contact form submissions
    pub mail_service: Arc<dyn MailService>,

    /// Resolved configuration, including the optional relay credentials
    pub config: Config,
}

impl State {
    pub fn new(config: Config, mail_service: Arc<dyn MailService>) -> Self {
        Self {
            domains: DomainRegistry::default(),
            images: ImageCache::new(),
            mail_service,
            config,
        }
    }

    /// Title of the window for the page currently shown.
    pub fn title(&self) -> String {
        self.domains.ui.state.page.title().to_string()
    }
}
