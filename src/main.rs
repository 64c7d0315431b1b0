// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging to stderr (stdout is reserved for the sitemap)
// 3. Crawl the site, writing the sitemap as pages are visited
// 4. Exit with a code that says how it went:
//      0 = every page fetched
//      1 = sitemap written, but some pages or links had problems
//      2 = bad command line (clap)
//      4 = the seed URL is unusable
//      5 = couldn't write the sitemap or build the HTTP client
//    130 = interrupted with Ctrl-C (output so far is still valid)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod extract;
mod fetch;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use crawl::{Crawler, JsonSitemap, SitemapSink, TextSitemap};
use error::CrawlError;
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = tokio::select! {
        result = run(&cli) => match result {
            Ok(code) => code,
            Err(e) => {
                error!("{e:#}");
                exit_code_for(&e)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, sitemap is incomplete");
            130
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &Cli) -> Result<i32> {
    let fetcher = HttpFetcher::new(&cli.fetch_config()).context("failed to build HTTP client")?;
    let crawler = Crawler::new(fetcher);

    let mut sink: Box<dyn SitemapSink> = if cli.json {
        Box::new(JsonSitemap::new(io::stdout()))
    } else {
        Box::new(TextSitemap::new(io::stdout()))
    };

    let summary = crawler.crawl(cli.seed(), sink.as_mut()).await?;

    if summary.is_clean() {
        Ok(0)
    } else {
        warn!(
            pages = summary.pages_visited,
            problems = summary.diagnostics.len(),
            "sitemap written, but some pages or links could not be mapped"
        );
        Ok(1)
    }
}

// -v raises the default level; RUST_LOG overrides it entirely
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CrawlError>() {
        Some(CrawlError::InvalidSeedUrl { .. } | CrawlError::InvalidHost { .. }) => 4,
        _ => 5,
    }
}
