//! The cache table itself.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use super::clock::{Clock, SystemClock};
use crate::Comic;

/// A stored comic and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub data: Arc<Comic>,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Table {
    entries: Vec<CacheEntry>,
    index: HashMap<String, usize>,
}

/// Process-local comic cache.
///
/// Entries are kept in insertion order. Overwriting a key replaces the entry
/// in place, so it keeps the position of its first insertion.
pub struct CacheStore {
    table: RwLock<Table>,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    /// Create an empty store reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { table: RwLock::new(Table::default()), clock }
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let table = self.table.read();
        table.index.get(key).map(|&pos| table.entries[pos].clone())
    }

    /// Store `data` under `key` stamped with the current time.
    pub fn set(&self, key: &str, data: Arc<Comic>) {
        let entry = CacheEntry { key: key.to_string(), data, stored_at: self.clock.now() };
        let mut table = self.table.write();
        match table.index.get(key).copied() {
            Some(pos) => table.entries[pos] = entry,
            None => {
                let pos = table.entries.len();
                table.entries.push(entry);
                table.index.insert(key.to_string(), pos);
            }
        }
    }

    /// True while the entry is younger than `ttl`.
    pub fn is_fresh(&self, entry: &CacheEntry, ttl: Duration) -> bool {
        self.clock.now() - entry.stored_at < ttl
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<(String, CacheEntry)> {
        self.table
            .read()
            .entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore").field("len", &self.len()).finish_non_exhaustive()
    }
}
