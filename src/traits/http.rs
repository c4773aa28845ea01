//! HTTP client trait abstraction.
//!
//! The analysis service is reached through this trait so the submission flow
//! can run against the reqwest adapter in production and a mock in tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::models::FormPayload;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures: the request never produced a response.
///
/// `Display` yields the underlying description only, so callers can prefix
/// it with their own wording.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Connection could not be established (refused, DNS, TLS)
    ConnectionFailed(String),
    /// Request exceeded the client timeout
    Timeout(String),
    /// The URL could not be parsed
    InvalidUrl(String),
    /// Reading the request or response body failed
    Io(String),
    /// Anything else reported by the transport
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg)
            | HttpError::Timeout(msg)
            | HttpError::Io(msg)
            | HttpError::Other(msg) => write!(f, "{}", msg),
            HttpError::InvalidUrl(url) => write!(f, "invalid URL: {}", url),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP client operations.
///
/// # Example
///
/// ```ignore
/// use triagem::traits::{HttpClient, Headers};
/// use triagem::models::FormPayload;
///
/// async fn analyze<C: HttpClient>(client: &C) {
///     let form = FormPayload::new().text("email_text", "Olá");
///     let url = "http://localhost:5000/analyze";
///     let response = client.post_form(url, form, &Headers::new()).await;
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a POST request with a `multipart/form-data` body.
    ///
    /// Any HTTP status counts as a response; only transport failures are
    /// returned as errors.
    async fn post_form(
        &self,
        url: &str,
        form: FormPayload,
        headers: &Headers,
    ) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_new() {
        let response = Response::new(200, Bytes::from("Hello"));
        assert_eq!(response.status, 200);
        assert!(response.headers.is_empty());
        assert_eq!(response.body, Bytes::from("Hello"));
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(201, Bytes::new()).is_success());
        assert!(Response::new(299, Bytes::new()).is_success());
        assert!(!Response::new(300, Bytes::new()).is_success());
        assert!(!Response::new(400, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Body {
            categoria: String,
        }

        let response = Response::new(200, r#"{"categoria":"Produtivo"}"#);
        let body: Body = response.json().unwrap();
        assert_eq!(body.categoria, "Produtivo");
    }

    #[test]
    fn test_http_error_display_is_bare_description() {
        assert_eq!(
            HttpError::ConnectionFailed("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
        assert_eq!(
            HttpError::Timeout("operation timed out".to_string()).to_string(),
            "operation timed out"
        );
        assert_eq!(
            HttpError::InvalidUrl("nope".to_string()).to_string(),
            "invalid URL: nope"
        );
    }
}
