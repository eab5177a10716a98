//! quizdeck-core - the client-side question pipeline for quizdeck.
//!
//! The host application hands a [`QuestionBank`] its catalog location and the
//! player's [`Settings`]; the bank fetches the static catalog once per
//! session, filters it by the selected categories, and deals shuffled rounds.
//! Fetch failures degrade to an empty catalog so the rest of the application
//! keeps working.
//!
//! Logging goes through `tracing`; the host owns the subscriber.

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod shuffle;

pub use api::{CatalogClient, CatalogError, CatalogSource};
pub use catalog::QuestionBank;
pub use config::CatalogConfig;
pub use models::{Question, Settings};
