//! Vagdevi showcase application
//!
//! The desktop front end for the Vagdevi Food Products showcase: a home page
//! with the hero carousel, the products catalog and the contact form. The
//! binary in `src/main.rs` only sets up logging and configuration; everything
//! else lives here so it can be driven from tests.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
