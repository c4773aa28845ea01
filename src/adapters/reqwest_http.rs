//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of [`HttpClient`], sending forms as
//! `multipart/form-data`.

use async_trait::async_trait;
use std::time::Duration;

use crate::models::{FormField, FormPayload};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use triagem::adapters::ReqwestHttpClient;
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(120))?;
/// let response = client.post_form(url, form, &Headers::new()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Self::convert_error)?;
        Ok(Self { client })
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value))
    }

    /// Build a reqwest multipart form from our payload.
    fn build_form(form: FormPayload) -> Result<reqwest::multipart::Form, HttpError> {
        let mut multipart = reqwest::multipart::Form::new();
        for field in form.into_fields() {
            multipart = match field {
                FormField::Text { name, value } => multipart.text(name, value),
                FormField::File { name, part } => {
                    let file_part = reqwest::multipart::Part::bytes(part.bytes.to_vec())
                        .file_name(part.file_name)
                        .mime_str(&part.mime)
                        .map_err(|e| HttpError::Other(e.to_string()))?;
                    multipart.part(name, file_part)
                }
            };
        }
        Ok(multipart)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_form(
        &self,
        url: &str,
        form: FormPayload,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let multipart = Self::build_form(form)?;
        let builder = self.client.post(url).multipart(multipart);
        let builder = Self::apply_headers(builder, headers);

        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}
