// src/crawl/scope.rs
// =============================================================================
// Decides which URLs belong to the site being mapped.
//
// The "domain limit" is the last two labels of the seed's host, lowercased:
//   http://www.Example.com/   -> example.com
//   http://blog.example.com/  -> example.com (same site)
//   http://www.example.co.uk/ -> co.uk
//
// The last case is a known limitation: multi-part public suffixes are not
// special-cased, so every *.co.uk host counts as the same site.
// =============================================================================

use std::fmt;

use url::Url;

use crate::error::CrawlError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLimit(String);

impl DomainLimit {
    // Derives the limit from a URL's host
    //
    // Fails with InvalidHost if there's no host or it has no '.' in it.
    pub fn derive(url: &Url) -> Result<Self, CrawlError> {
        let invalid = || CrawlError::InvalidHost {
            url: url.to_string(),
        };

        let host = url.host_str().ok_or_else(invalid)?;
        // A fully-qualified host ends in '.', which leaves an empty label
        let labels: Vec<&str> = host.split('.').filter(|label| !label.is_empty()).collect();
        if labels.len() < 2 {
            return Err(invalid());
        }

        let limit = labels[labels.len() - 2..].join(".").to_lowercase();
        Ok(Self(limit))
    }

    // True iff the candidate derives to the same limit
    //
    // A candidate without a usable host is simply out of scope.
    pub fn admits(&self, candidate: &Url) -> bool {
        match Self::derive(candidate) {
            Ok(limit) => limit == *self,
            Err(_) => false,
        }
    }
}

impl fmt::Display for DomainLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
