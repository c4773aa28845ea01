//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemClipboard`] - OS clipboard using arboard
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod mock;
pub mod reqwest_http;
pub mod system_clipboard;

pub use mock::{InMemoryClipboard, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clipboard::SystemClipboard;
