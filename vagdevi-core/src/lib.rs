//! # Vagdevi Core
//!
//! Core library for the Vagdevi showcase application. It holds the logic that
//! does not depend on any UI toolkit, so it can be exercised directly from
//! tests and reused by any front end.
//!
//! ## Overview
//!
//! - **Carousel**: cursor navigation over a ring of items, circular distance,
//!   the slot lookup table and drag-release gestures
//! - **Contact**: field validation and the submission state machine of the
//!   contact form
//! - **Mail**: payload types handed to the hosted mail relay
//! - **Catalog**: content types rendered by the pages
//!
//! ## Examples
//!
//! ```
//! use vagdevi_core::carousel::{Carousel, CarouselItem, Direction};
//!
//! let items = (0..5)
//!     .map(|i| CarouselItem::new(format!("pack-{i}"), format!("pack-{i}.png"), "Pack"))
//!     .collect();
//! let mut carousel = Carousel::new(items);
//!
//! carousel.navigate(Direction::Previous);
//! assert_eq!(carousel.cursor(), Some(4));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Hero carousel navigation and slot assignment
pub mod carousel;
/// Content types shown on the showcase pages
pub mod catalog;
/// Contact form validation and submission flow
pub mod contact;
/// Mail relay payloads
pub mod mail;

pub use carousel::{Carousel, CarouselError, CarouselItem, Direction};
pub use catalog::Page;
pub use contact::{ContactForm, ContactSession, Field, FieldError, SubmissionStatus, SubmitError};
pub use mail::{OutboundEmail, RelayCredentials, TemplateParams};
