// src/extract/resolve.rs
// =============================================================================
// Resolves a raw href value to an absolute URL.
//
// The rule is deliberately simpler than a browser's:
// 1. If the href parses as an absolute URL on its own, use it unchanged.
// 2. Otherwise glue it onto the page URL with a single "/" between them
//    and parse that.
//
// So "/contact" on http://example.com/dir/page becomes
// http://example.com/dir/page/contact, not http://example.com/contact.
// =============================================================================

use url::Url;

use crate::error::CrawlError;

pub fn resolve_href(base: &Url, href: &str) -> Result<Url, CrawlError> {
    if let Ok(url) = Url::parse(href) {
        return Ok(url);
    }

    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        href.trim_start_matches('/')
    );

    Url::parse(&joined).map_err(|source| CrawlError::LinkResolution {
        page: base.to_string(),
        href: href.to_string(),
        source,
    })
}
