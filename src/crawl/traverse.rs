// src/crawl/traverse.rs
// =============================================================================
// This module implements website crawling with a depth-first approach.
//
// How it works:
// 1. Parse the seed URL and work out its domain limit
// 2. Pop the most recently discovered (url, depth) off the frontier
// 3. Skip it if it was already visited, otherwise mark it and write its
//    sitemap line
// 4. Fetch the page and extract its links
// 5. Push every in-scope link (except the page itself) at depth + 1
// 6. Repeat until the frontier is empty
//
// The frontier is an explicit stack rather than recursion, so a very deep
// site can't overflow the call stack. Children are pushed in reverse order,
// which makes the first link on a page the next one visited, the same order
// a recursive walk would produce.
//
// Failures:
// - Bad seed URL, or seed host without a '.' -> the whole crawl fails
// - Sitemap write error -> the whole crawl fails
// - Fetch error or unresolvable link -> recorded, crawl carries on
// =============================================================================

use tracing::{debug, info, warn};
use url::Url;

use super::scope::DomainLimit;
use super::sitemap::{SitemapEntry, SitemapSink};
use super::visited::VisitedSet;
use crate::error::CrawlError;
use crate::extract::{extract_links, Extraction};
use crate::fetch::PageFetcher;

// A page waiting on the frontier
#[derive(Debug)]
struct Visit {
    url: Url,
    depth: usize,  // Link hops from the seed
}

// What a finished crawl reports back
#[derive(Debug, Default)]
pub struct CrawlSummary {
    /// Pages written to the sitemap
    pub pages_visited: usize,
    /// Pages whose body was retrieved
    pub pages_fetched: usize,
    /// Non-fatal problems, in the order they happened
    pub diagnostics: Vec<CrawlError>,
}

impl CrawlSummary {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Crawler<F> {
    fetcher: F,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    // Crawls the site rooted at `seed`, writing one sitemap entry per page
    //
    // Returns Err only for a bad seed or a broken sink. Partial output
    // already written to the sink stays valid either way.
    pub async fn crawl<S>(&self, seed: &str, sink: &mut S) -> Result<CrawlSummary, CrawlError>
    where
        S: SitemapSink + ?Sized,
    {
        let seed_url = Url::parse(seed).map_err(|source| CrawlError::InvalidSeedUrl {
            url: seed.to_string(),
            source,
        })?;
        let limit = DomainLimit::derive(&seed_url)?;

        info!(seed = %seed_url, %limit, "starting crawl");

        let visited = VisitedSet::new();
        let mut summary = CrawlSummary::default();
        let mut frontier = vec![Visit {
            url: seed_url,
            depth: 0,
        }];

        while let Some(Visit { url, depth }) = frontier.pop() {
            if !visited.mark(&url) {
                continue;
            }

            sink.emit(&SitemapEntry {
                depth,
                url: url.clone(),
            })?;
            summary.pages_visited += 1;

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(source) => {
                    let error = CrawlError::Fetch {
                        url: url.to_string(),
                        source,
                    };
                    warn!("{error}");
                    summary.diagnostics.push(error);
                    continue;
                }
            };
            summary.pages_fetched += 1;

            let Extraction { links, unresolved } = extract_links(&url, &body);
            summary.diagnostics.extend(unresolved);

            let found = links.len();
            let children: Vec<Url> = links
                .into_iter()
                .filter(|candidate| *candidate != url)
                .filter(|candidate| limit.admits(candidate))
                .collect();

            debug!(%url, depth, found, in_scope = children.len(), "extracted links");

            // Reversed so the first link is popped first
            frontier.extend(children.into_iter().rev().map(|url| Visit {
                url,
                depth: depth + 1,
            }));
        }

        sink.finish()?;

        info!(
            visited = visited.len(),
            fetched = summary.pages_fetched,
            problems = summary.diagnostics.len(),
            "crawl finished"
        );

        Ok(summary)
    }
}
