// src/crawl/sitemap.rs
// =============================================================================
// Where the sitemap goes.
//
// The sitemap is never held in memory as a tree. Each visited page is written
// out the moment it's visited, as one line:
//
//   http://example.com/
//   \thttp://example.com/about
//   \t\thttp://example.com/about/team
//
// The number of leading tabs is the page's depth. --json swaps this for one
// JSON object per line with the same information.
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;
use url::Url;

// One visited page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    /// Link hops from the seed along the path that first reached this page
    pub depth: usize,
    pub url: Url,
}

pub trait SitemapSink {
    fn emit(&mut self, entry: &SitemapEntry) -> io::Result<()>;

    // Called once when the crawl is done
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Tab-indented text, the default format
pub struct TextSitemap<W: Write> {
    out: W,
}

impl<W: Write> TextSitemap<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SitemapSink for TextSitemap<W> {
    fn emit(&mut self, entry: &SitemapEntry) -> io::Result<()> {
        for _ in 0..entry.depth {
            self.out.write_all(b"\t")?;
        }
        writeln!(self.out, "{}", entry.url)?;
        // Flush per line so an interrupted crawl still leaves valid output
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// JSON lines: {"depth":1,"url":"http://example.com/about"}
pub struct JsonSitemap<W: Write> {
    out: W,
}

impl<W: Write> JsonSitemap<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SitemapSink for JsonSitemap<W> {
    fn emit(&mut self, entry: &SitemapEntry) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, entry)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(depth: usize, url: &str) -> SitemapEntry {
        SitemapEntry {
            depth,
            url: Url::parse(url).unwrap(),
        }
    }

    #[test]
    fn test_text_indents_with_tabs() {
        let mut buf = Vec::new();
        let mut sink = TextSitemap::new(&mut buf);
        sink.emit(&entry(0, "http://example.com/")).unwrap();
        sink.emit(&entry(1, "http://example.com/about")).unwrap();
        sink.emit(&entry(2, "http://example.com/about/team")).unwrap();
        sink.finish().unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "http://example.com/\n\thttp://example.com/about\n\t\thttp://example.com/about/team\n"
        );
    }

    #[test]
    fn test_json_lines() {
        let mut buf = Vec::new();
        let mut sink = JsonSitemap::new(&mut buf);
        sink.emit(&entry(0, "http://example.com/")).unwrap();
        sink.emit(&entry(1, "http://example.com/about")).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "{\"depth\":0,\"url\":\"http://example.com/\"}\n{\"depth\":1,\"url\":\"http://example.com/about\"}\n"
        );
    }
}
