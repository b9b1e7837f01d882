// src/page/http.rs
// =============================================================================
// This module downloads HTML pages.
//
// A fetch fails when:
// - the request itself fails (DNS, connection refused, timeout, ...)
// - the server answers with a 4xx or 5xx status
// - the response is not HTML (checked through the Content-Type header)
//
// There are no retries: one GET per URL, whatever the result.
// =============================================================================

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("site-crawler/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid status code: {}", .0.as_u16())]
    Status(StatusCode),

    #[error("invalid Content-Type: {0}")]
    ContentType(String),
}

/// Fetches pages over HTTP.
///
/// Holds one `reqwest::Client`, which is cheap to clone and pools
/// connections, so every crawl task shares it.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    // Fetches a web page and returns its HTML content
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::info!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status(status));
        }

        // "text/html; charset=utf-8" is fine, so this is a substring check
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("text/html") {
            return Err(FetchError::ContentType(content_type));
        }

        Ok(response.text().await?)
    }
}
