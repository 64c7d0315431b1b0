// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The seed URL can be given positionally or with -t/--target:
//   site-mapper https://example.com
//   site-mapper -t https://example.com
//
// -u/--usage print the same help as -h/--help.
// =============================================================================

use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::fetch::FetchConfig;

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    disable_help_flag = true,
    about = "Crawl a website and print a sitemap of its domain",
    long_about = "site-mapper starts at one page, follows every link that stays on the same domain, \
                  and prints each page it visits once, indented with one tab per link hop from the start. \
                  Pages that can't be fetched are reported on stderr and the crawl keeps going."
)]
pub struct Cli {
    /// Website URL to start from (e.g., https://example.com)
    #[arg(value_name = "URL", required_unless_present = "target", conflicts_with = "target")]
    pub url: Option<String>,

    /// Website URL to start from, as a flag
    #[arg(short = 't', long = "target", value_name = "URL")]
    pub target: Option<String>,

    /// Give up on a page after this many seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Redirects to follow per page before reporting an error
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub max_redirects: usize,

    /// Print one JSON object per page instead of tab-indented lines
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[allow(dead_code)]
    #[arg(short = 'h', long, short_alias = 'u', alias = "usage", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    // The seed URL, whichever way it was given
    //
    // clap guarantees exactly one of the two is present.
    pub fn seed(&self) -> &str {
        self.target
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or_default()
    }

    pub fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            max_redirects: self.max_redirects,
        }
    }
}
