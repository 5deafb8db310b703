//! Configuration for the Vagdevi showcase.
//!
//! Values are read from an optional `.env` file, an optional TOML file and the
//! process environment. Environment variables win over the file and the file
//! wins over built-in defaults. Problems that make the configuration unusable
//! are reported as [`ConfigLoadError`]; anything merely degraded (for example a
//! missing mail relay) is collected into [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{CarouselConfig, Config, ConfigMetadata, ContactConfig, MailRelayConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
