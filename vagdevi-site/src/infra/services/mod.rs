//! Service seams between the domains and the outside world.

pub mod mail;

pub use mail::{EmailJsService, MailService, RelayError};
