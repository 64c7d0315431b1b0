// src/extract/mod.rs
// =============================================================================
// Link extraction: turns a fetched page into the set of absolute URLs its
// anchors point at.
//
// Submodules:
// - html: finds <a href="..."> values in the page text
// - resolve: turns one raw href into an absolute URL
// =============================================================================

mod html;
mod resolve;

pub use html::{extract_links, Extraction};
