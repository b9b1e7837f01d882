// src/crawl/ledger.rs
// =============================================================================
// The visit ledger: canonical URL -> number of times it was discovered.
//
// This is the only place that decides whether a URL is new. Every crawl
// task records its URL here; exactly one task per canonical URL sees
// "first visit" and goes on to fetch it, all others just bump the count.
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared, lock-protected visit counts.
///
/// Cloning gives another handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct VisitLedger {
    pages: Arc<Mutex<HashMap<String, usize>>>,
}

impl VisitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one discovery of `canonical_url`.
    ///
    /// Returns `true` only for the call that inserted the key.
    pub async fn record_visit(&self, canonical_url: &str) -> bool {
        let mut pages = self.pages.lock().await;
        match pages.get_mut(canonical_url) {
            Some(count) => {
                *count += 1;
                false
            }
            None => {
                pages.insert(canonical_url.to_string(), 1);
                true
            }
        }
    }

    /// Number of distinct canonical URLs seen so far.
    pub async fn len(&self) -> usize {
        self.pages.lock().await.len()
    }

    /// Copy of the current counts, for reporting once the crawl is over.
    pub async fn snapshot(&self) -> HashMap<String, usize> {
        self.pages.lock().await.clone()
    }
}
