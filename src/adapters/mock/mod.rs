//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryClipboard`] - clipboard that records writes

pub mod clipboard;
pub mod http;

pub use clipboard::InMemoryClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
