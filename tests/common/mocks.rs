//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `triagem::adapters::mock` and adds builder-style
//! setup for the analysis endpoint.

pub use triagem::adapters::mock::{InMemoryClipboard, MockHttpClient, MockResponse};
pub use triagem::traits::{HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer every request with `status` and a raw `body`.
    pub fn with_default_response(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Fail every request at the transport level.
    pub fn with_transport_error(self, error: HttpError) -> Self {
        self.client.set_default_response(MockResponse::Error(error));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
