//! Monotonic tagging of list requests so late responses can be dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct ListSequencer {
    latest: AtomicU64,
    // Serializes check-and-render for one target.
    render: Mutex<()>,
}

impl ListSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag for a request about to be issued. Tags start at 1.
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether no newer request has been issued since `tag`.
    pub fn is_latest(&self, tag: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == tag
    }

    /// Runs `f` if `tag` is still the latest, holding the sequencer's lock
    /// so no other `run_if_latest` on this sequencer interleaves. Returns
    /// `None` for a stale tag.
    pub fn run_if_latest<R>(&self, tag: u64, f: impl FnOnce() -> R) -> Option<R> {
        let _guard = self.render.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_latest(tag) {
            Some(f())
        } else {
            None
        }
    }
}
