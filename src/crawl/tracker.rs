// src/crawl/tracker.rs
// =============================================================================
// A join counter for crawl tasks.
//
// The number of tasks is not known up front: every page can spawn more.
// So instead of "start N tasks, wait for N", each task registers itself
// and gets a guard back. Dropping the guard marks the task as done, and
// wait() resolves once the count is back at zero.
//
// A parent registers its children before its own guard drops, so the
// count cannot touch zero while there is still work to do.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    idle: Notify,
}

#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    inner: Arc<Inner>,
}

/// Keeps one unit of work registered until dropped.
#[must_use = "the task counts as finished as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TaskGuard {
    inner: Arc<Inner>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> TaskGuard {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        TaskGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Waits until every registered task has finished, including tasks
    /// registered after the wait started.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            // Subscribe before reading the counter so a wake-up between
            // the load and the await is not lost
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}
