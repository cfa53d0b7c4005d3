//! Vehicle rental quoting and reservation engine.
//!
//! Given a category, picks one of its vehicles; given a customer, category and
//! duration, prices the rental with an age-based surcharge and builds the
//! resulting transaction.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
