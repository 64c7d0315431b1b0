// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling across the whole crawl)
// - Every request is bounded by a configurable timeout
// - Non-2xx responses count as failures, like a browser showing an error page
// - reqwest errors are sorted into FetchError categories for diagnostics
//
// Rust concepts:
// - async/await: network I/O without blocking the runtime
// - Builder pattern: Client::builder() ... .build()
// =============================================================================

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Client};
use tracing::debug;
use url::Url;

use super::{FetchError, PageFetcher};

// HTTP knobs for the fetcher
//
// The defaults here are the CLI defaults too.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upper bound on a single request, connect through body
    pub timeout: Duration,
    /// Sent as the User-Agent header
    pub user_agent: String,
    /// How many redirects to follow before giving up
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 5,
        }
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the shared client
    //
    // Fails only if reqwest can't set up its TLS backend.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}

// Sorts a reqwest error into a FetchError category
//
// reqwest doesn't expose DNS or TLS failures as separate kinds, so those
// are recognised from the error's text, like the timeout/redirect/connect
// cases are from its flags.
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Walk the whole source chain; the interesting part is usually nested
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        chain.push_str(": ");
        chain.push_str(&inner.to_string());
        source = inner.source();
    }
    let lowered = chain.to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
        FetchError::Tls
    } else if error.is_connect() {
        if lowered.contains("dns") || lowered.contains("resolve") {
            FetchError::Dns
        } else {
            FetchError::Connect
        }
    } else {
        FetchError::Other(chain)
    }
}
