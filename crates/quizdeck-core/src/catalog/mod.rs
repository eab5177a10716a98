//! Session question bank and selector filtering.
//!
//! This module provides the `QuestionBank` that owns the cached catalog for
//! one play session, plus the internal filter predicates it applies.

pub mod bank;
pub(crate) mod filter;

pub use bank::QuestionBank;
