// src/extract/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so attribute names match case-insensitively and
//   both quote styles (href="..." and href='...') are handled
//
// Each href is resolved with resolve_href. Anything that can't be resolved is
// dropped and reported, and the rest of the page is still used.
//
// Rust concepts:
// - BTreeSet: a sorted set, so traversal order is stable between runs
// - LazyLock: build the CSS selector once, on first use
// =============================================================================

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::resolve::resolve_href;
use crate::error::CrawlError;

// Deduplicated, lexicographically ordered links found on one page
pub type LinkSet = BTreeSet<Url>;

static ANCHOR_HREF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("'a[href]' is a valid CSS selector"));

// What one page yielded
#[derive(Debug, Default)]
pub struct Extraction {
    /// Every href that resolved to an absolute URL
    pub links: LinkSet,
    /// One LinkResolution error per href that didn't
    pub unresolved: Vec<CrawlError>,
}

// Extracts all anchor links from a page
//
// Parameters:
//   base: the URL the page was fetched from (for relative hrefs)
//   page_text: the raw page body
//
// Example:
//   page_text = "<a href='/docs'>Docs</a>"
//   base = "https://example.com/guide"
//   links = {"https://example.com/guide/docs"}
pub fn extract_links(base: &Url, page_text: &str) -> Extraction {
    extract_with(base, page_text, resolve_href)
}

// The resolver is a parameter so the unresolved path can be exercised;
// with resolve_href it only fires for hrefs the url crate rejects even
// after concatenation.
fn extract_with<R>(base: &Url, page_text: &str, resolve: R) -> Extraction
where
    R: Fn(&Url, &str) -> Result<Url, CrawlError>,
{
    let document = Html::parse_document(page_text);
    let mut extraction = Extraction::default();

    for element in document.select(&ANCHOR_HREF) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        match resolve(base, href) {
            Ok(url) => {
                extraction.links.insert(url);
            }
            Err(error) => {
                warn!(page = %base, href, "{error}");
                extraction.unresolved.push(error);
            }
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.com/").unwrap()
    }

    fn link_strings(extraction: &Extraction) -> Vec<&str> {
        extraction.links.iter().map(Url::as_str).collect()
    }

    #[test]
    fn test_extract_absolute_links() {
        let html = r#"
            <a href="http://example.com/about">About</a>
            <a href="http://other.com/x">Elsewhere</a>
        "#;
        let extraction = extract_links(&base(), html);
        assert_eq!(
            link_strings(&extraction),
            vec!["http://example.com/about", "http://other.com/x"]
        );
        assert!(extraction.unresolved.is_empty());
    }

    #[test]
    fn test_single_quotes_and_uppercase_attribute() {
        let html = r#"<A HREF='http://example.com/upper'>x</A><a href='/single'>y</a>"#;
        let extraction = extract_links(&base(), html);
        assert_eq!(
            link_strings(&extraction),
            vec!["http://example.com/single", "http://example.com/upper"]
        );
    }

    #[test]
    fn test_relative_link_uses_concatenation() {
        let page = Url::parse("http://example.com/dir/page").unwrap();
        let extraction = extract_links(&page, r#"<a href="/contact">Contact</a>"#);
        assert_eq!(
            link_strings(&extraction),
            vec!["http://example.com/dir/page/contact"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let html = r#"
            <a href="http://example.com/a">one</a>
            <p><a href="http://example.com/a">two</a></p>
            <a href="/a">three</a>
        "#;
        let extraction = extract_links(&base(), html);
        assert_eq!(link_strings(&extraction), vec!["http://example.com/a"]);
    }

    #[test]
    fn test_only_anchor_hrefs() {
        let html = r#"
            <link rel="stylesheet" href="http://example.com/style.css">
            <img src="http://example.com/logo.png">
            <a name="top">no href</a>
            <a href="http://example.com/page">page</a>
        "#;
        let extraction = extract_links(&base(), html);
        assert_eq!(link_strings(&extraction), vec!["http://example.com/page"]);
    }

    #[test]
    fn test_links_are_sorted() {
        let html = r#"
            <a href="http://example.com/c">c</a>
            <a href="http://example.com/a">a</a>
            <a href="http://example.com/b">b</a>
        "#;
        let extraction = extract_links(&base(), html);
        assert_eq!(
            link_strings(&extraction),
            vec![
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/c"
            ]
        );
    }

    #[test]
    fn test_unresolvable_href_is_dropped_and_reported() {
        let html = r#"
            <a href="http://example.com/ok">ok</a>
            <a href="broken">broken</a>
            <a href="/also-ok">also ok</a>
        "#;
        let refuse_broken = |base: &Url, href: &str| {
            if href == "broken" {
                Err(CrawlError::LinkResolution {
                    page: base.to_string(),
                    href: href.to_string(),
                    source: url::ParseError::InvalidDomainCharacter,
                })
            } else {
                resolve_href(base, href)
            }
        };

        let extraction = extract_with(&base(), html, refuse_broken);

        assert_eq!(
            link_strings(&extraction),
            vec!["http://example.com/also-ok", "http://example.com/ok"]
        );
        assert!(matches!(
            extraction.unresolved.as_slice(),
            [CrawlError::LinkResolution { page, href, .. }]
                if page == "http://example.com/" && href == "broken"
        ));
    }

    #[test]
    fn test_plain_text_has_no_links() {
        let extraction = extract_links(&base(), "just some text, no markup");
        assert!(extraction.links.is_empty());
        assert!(extraction.unresolved.is_empty());
    }
}
