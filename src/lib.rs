//! triagem - a terminal client for an email triage service
//!
//! Paste an email or point at a file, submit it to the classification
//! service, and read back the category and a suggested reply.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
