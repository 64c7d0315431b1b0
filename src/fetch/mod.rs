// src/fetch/mod.rs
// =============================================================================
// The page-fetch capability: given a URL, return the page body as text.
//
// This is the only network-facing piece the crawler depends on. It's a
// trait so tests can swap in an in-memory site instead of a real server.
//
// Submodules:
// - http: the reqwest-backed implementation used by the CLI
// =============================================================================

mod http;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

pub use http::{FetchConfig, HttpFetcher};

// Why a page couldn't be retrieved
//
// Categories mirror what reqwest can tell us about a failure, so the
// diagnostics on stderr say more than "error".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),
    /// The hostname could not be resolved
    #[error("could not resolve hostname")]
    Dns,
    /// TLS handshake or certificate problem
    #[error("TLS certificate error")]
    Tls,
    /// Redirect chain longer than the configured limit
    #[error("too many redirects")]
    TooManyRedirects,
    /// TCP connection failed
    #[error("connection failed")]
    Connect,
    /// The response body could not be read as text
    #[error("unreadable response body: {0}")]
    Body(String),
    /// Anything else, including unsupported URL schemes
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}
