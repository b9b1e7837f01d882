// src/crawl/scheduler.rs
// =============================================================================
// This module drives the crawl.
//
// How it works:
// 1. Spawn one task for the seed URL
// 2. Each task waits for a semaphore permit (at most `concurrency` at once)
// 3. Stop early if the page budget is already used up
// 4. Skip URLs on another host
// 5. Record the visit; only the first visit of a canonical URL goes on
// 6. Fetch the page, extract its links, spawn one task per link
// 7. Main waits on the completion tracker until no task is left
//
// Failures (bad URL, HTTP error, non-HTML page) only end the one task
// they happen in. Nothing is retried.
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use url::{ParseError, Url};

use super::ledger::VisitLedger;
use super::tracker::{CompletionTracker, TaskGuard};
use super::CrawlConfig;
use crate::page::{extract_links, host_of, normalize_url, FetchError, PageFetcher};

// Shared by every crawl task through an Arc
struct Crawler {
    config: CrawlConfig,
    ledger: VisitLedger,
    permits: Semaphore,
    tracker: CompletionTracker,
    fetcher: PageFetcher,
}

// Crawls a website starting from `seed_url`
//
// Parameters:
//   seed_url: first URL to visit (normally the base URL itself)
//   config: host restriction, concurrency and page budget
//
// Returns: canonical URL -> number of times it was linked, once every
// task has finished. Only building the HTTP client can fail; once the
// crawl has started, errors are handled inside the tasks.
pub async fn crawl(
    seed_url: &str,
    config: CrawlConfig,
) -> Result<HashMap<String, usize>, FetchError> {
    let fetcher = PageFetcher::new()?;

    let crawler = Arc::new(Crawler {
        permits: Semaphore::new(config.concurrency),
        ledger: VisitLedger::new(),
        tracker: CompletionTracker::new(),
        fetcher,
        config,
    });

    info!(
        "crawling {} (concurrency: {}, max pages: {})",
        crawler.config.base_host, crawler.config.concurrency, crawler.config.max_pages
    );

    crawler.spawn_page(seed_url.to_string());

    info!("waiting for crawl tasks");
    crawler.tracker.wait().await;

    let pages = crawler.ledger.snapshot().await;
    info!("crawl finished, {} page(s) recorded", pages.len());
    Ok(pages)
}

impl Crawler {
    // Registers the task before spawning it, so the tracker never sees
    // zero while a parent is still handing out work
    fn spawn_page(self: &Arc<Self>, raw_url: String) {
        let guard = self.tracker.register();
        let crawler = Arc::clone(self);
        tokio::spawn(crawler.crawl_page(raw_url, guard));
    }

    async fn crawl_page(self: Arc<Self>, raw_url: String, _guard: TaskGuard) {
        info!("crawling {}", raw_url);

        // Released when this function returns, whichever way it returns.
        // The semaphore is never closed, so acquire() cannot fail here.
        let Ok(_permit) = self.permits.acquire().await else {
            return;
        };

        // Best effort: other tasks may insert between this check and our
        // own record_visit below
        if self.ledger.len().await >= self.config.max_pages {
            debug!("page budget reached, skipping {}", raw_url);
            return;
        }

        // Parsed only to reject strings that are not URLs; host and key
        // come from the text as written
        match Url::parse(&raw_url) {
            Ok(_) => {}
            // "about.html", "#top": no host, so certainly not ours
            Err(ParseError::RelativeUrlWithoutBase) => {
                debug!("no host in {}, skipping", raw_url);
                return;
            }
            Err(e) => {
                warn!("cannot parse {}: {}", raw_url, e);
                return;
            }
        }

        if host_of(&raw_url) != self.config.base_host {
            debug!("other host, skipping {}", raw_url);
            return;
        }

        let canonical = match normalize_url(&raw_url) {
            Ok(canonical) => canonical,
            Err(e) => {
                warn!("{}", e);
                return;
            }
        };

        if !self.ledger.record_visit(&canonical).await {
            debug!("already visited {}", canonical);
            return;
        }

        let html = match self.fetcher.fetch(&raw_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("failed to fetch {}: {}", raw_url, e);
                return;
            }
        };

        let links = extract_links(&html, &self.config.raw_base);
        debug!("{} link(s) found on {}", links.len(), raw_url);

        for link in links {
            self.spawn_page(link);
        }
    }
}
