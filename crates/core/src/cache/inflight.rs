//! Per-key in-flight markers for request coalescing.
//!
//! A caller that misses the cache takes the key's lock before fetching.
//! Concurrent callers for the same key queue on that lock and re-check the
//! cache once they hold it, so one upstream fetch serves all of them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-key fetch locks.
///
/// Locks are created on first use and kept for the process lifetime, the
/// same lifetime as the cache entries they guard.
#[derive(Debug, Default)]
pub struct InFlight {
    locks: parking_lot::Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other caller is fetching `key`, then claim it.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            locks.entry(key.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
