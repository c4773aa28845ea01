//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{TestAppBuilder, finish_submission};
//!
//! let (mut app, client, _) = TestAppBuilder::new().responding(200, "{}").build();
//! app.form.text.insert_str("oi");
//! app.on_submit().unwrap();
//! finish_submission(&mut app).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use triagem::app::App;
use triagem::config::AppConfig;

/// Base URL every test app points at.
pub const TEST_BASE_URL: &str = "http://triagem.test";

/// Builder for test App instances wired to mock adapters.
pub struct TestAppBuilder {
    config: AppConfig,
    client: MockHttpClient,
    clipboard: InMemoryClipboard,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::new().with_base_url(TEST_BASE_URL),
            client: MockHttpClient::new(),
            clipboard: InMemoryClipboard::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_client(mut self, client: MockHttpClient) -> Self {
        self.client = client;
        self
    }

    /// Answer every request with `status` and `body`.
    pub fn responding(self, status: u16, body: &str) -> Self {
        let client = MockHttpConfig::new()
            .with_default_response(status, body)
            .build();
        self.with_client(client)
    }

    /// Build the app and hand back handles to its mocks.
    pub fn build(self) -> (App, MockHttpClient, InMemoryClipboard) {
        let app = App::new(
            self.config,
            Arc::new(self.client.clone()),
            Arc::new(self.clipboard.clone()),
        );
        (app, self.client, self.clipboard)
    }
}

/// Wait for the in-flight request to report and apply its outcome.
pub async fn finish_submission(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for the analysis task")
        .expect("message channel closed");
    app.message_rx = Some(rx);
    app.handle_message(msg);
}

/// Render `app` into a `width` x `height` test terminal and return the
/// screen as text, one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| triagem::ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
