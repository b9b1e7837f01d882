// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - One tokio task per discovered link, fanned out recursively
// - A semaphore caps how many tasks fetch at the same time
// - Same-host restriction (other hosts are never fetched or counted)
// - A page budget: no new pages once the ledger holds max_pages entries
// - Every canonical URL is fetched at most once
//
// Submodules:
// - ledger: shared visit counts, the single "seen before?" check
// - tracker: join counter so we know when the last task is done
// - scheduler: the per-task protocol and the crawl() entry point
// =============================================================================

mod ledger;
mod scheduler;
mod tracker;

pub use scheduler::crawl;

use url::Url;

use crate::page::host_of;

/// Immutable settings for one crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Host (and port, if typed) of the base URL; the only host we crawl.
    pub base_host: String,
    /// The base URL as typed. Relative links are appended to this text
    /// and the report header prints it.
    pub raw_base: String,
    /// Maximum number of tasks fetching at once, always >= 1.
    pub concurrency: usize,
    /// Stop admitting new pages once this many are recorded.
    pub max_pages: usize,
}

impl CrawlConfig {
    pub fn new(
        raw_base: &str,
        concurrency: usize,
        max_pages: usize,
    ) -> Result<Self, url::ParseError> {
        Url::parse(raw_base)?;
        Ok(Self {
            base_host: host_of(raw_base).to_string(),
            raw_base: raw_base.to_string(),
            concurrency: concurrency.max(1),
            max_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrency_is_clamped() {
        let config = CrawlConfig::new("https://example.com", 0, 10).unwrap();
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_raw_base_is_kept_verbatim() {
        let config = CrawlConfig::new("https://example.com", 3, 10).unwrap();
        assert_eq!(config.raw_base, "https://example.com");
        assert_eq!(config.base_host, "example.com");
    }

    #[test]
    fn test_base_host_keeps_typed_port() {
        let config = CrawlConfig::new("https://example.com:443", 1, 10).unwrap();
        assert_eq!(config.base_host, "example.com:443");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(CrawlConfig::new("not a url", 1, 10).is_err());
    }
}
