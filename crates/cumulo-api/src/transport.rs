//! One authenticated HTTP round trip per call.
//!
//! The transport issues exactly one request and waits for the complete
//! response. No retries, no caching, no connection pooling guarantees
//! beyond whatever [`reqwest::Client`] provides by default.

use reqwest::Method;
use reqwest::header;
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::document::Document;
use crate::error::{ApiError, Result};

/// HTTP transport bound to one [`ApiConfig`].
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Transport {
    /// Create a transport for the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this transport was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a request and return the raw response body.
    ///
    /// The bearer token travels in the `Authorization` header; a body, when
    /// present, is form-encoded. Any 2xx status yields the body text.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] for connection-level failures,
    /// [`ApiError::Status`] for non-2xx responses (with the body text
    /// preserved verbatim).
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        let url = self.url(path);
        debug!(method = %method, url = %url, "sending api request");

        let mut request = self
            .http
            .request(method, url.as_str())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.token));
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Network {
            reason: e.to_string(),
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network {
            reason: e.to_string(),
        })?;

        if status.is_success() {
            trace!(status = status.as_u16(), bytes = text.len(), "api response");
            Ok(text)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    /// Issue a request and parse the response body as a [`Document`].
    ///
    /// # Errors
    ///
    /// Everything [`Transport::send`] returns, plus [`ApiError::Parse`]
    /// for malformed bodies.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Document> {
        let raw = self.send(method, path, body).await?;
        Document::parse(&raw)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }
}
