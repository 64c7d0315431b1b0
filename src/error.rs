// src/error.rs
// =============================================================================
// Error types for the crawl core.
//
// Only two kinds of failure stop a crawl:
// - the seed URL can't be parsed, or its host has no domain to scope to
// - the sitemap output can't be written
//
// Every other error is local to one page or one link. The engine catches it,
// records a Diagnostic, and keeps going.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed string is not a parseable absolute URL (fatal).
    #[error("unable to parse target URL '{url}': {source}")]
    InvalidSeedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL's host has fewer than two dot-separated labels.
    #[error("URL must contain at least one '.' in its host: {url}")]
    InvalidHost { url: String },

    /// An href could not be turned into an absolute URL, even via the
    /// base-relative fallback.
    #[error("unable to resolve link '{href}' found on {page}: {source}")]
    LinkResolution {
        page: String,
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// A page could not be retrieved.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The sitemap sink rejected a write (fatal).
    #[error("failed to write sitemap: {0}")]
    Output(#[from] std::io::Error),
}
