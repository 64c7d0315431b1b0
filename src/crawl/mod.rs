// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Stays inside the seed's domain (last two host labels)
// - Never visits the same URL twice, so link cycles terminate
// - Writes the sitemap as it goes, one line per page
//
// Submodules:
// - scope: the domain limit and the in-scope check
// - visited: the per-run visited set
// - sitemap: text and JSON sitemap writers
// - traverse: the crawl loop itself
// =============================================================================

mod scope;
mod sitemap;
mod traverse;
mod visited;

pub use sitemap::{JsonSitemap, SitemapSink, TextSitemap};
pub use traverse::Crawler;
