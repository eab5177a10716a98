//! Data models for the question catalog.
//!
//! This module contains the structures shared between the catalog client and
//! the session bank:
//!
//! - `Question`: one catalog entry, with the category-splitting helpers
//! - `Settings`: the player's category and sub-category selections

pub mod question;
pub mod settings;

pub use question::Question;
pub use settings::Settings;
