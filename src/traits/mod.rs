//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - multipart POST to the analysis service
//! - [`ClipboardProvider`] - clipboard writes for the copy action

pub mod clipboard;
pub mod http;

pub use clipboard::{ClipboardError, ClipboardProvider};
pub use http::{Headers, HttpClient, HttpError, Response};
