//! In-memory read-through cache for provider comics.
//!
//! This module provides a process-local table of comics keyed by
//! [`keys::LATEST`] or [`keys::comic`]. It supports:
//!
//! - Atomic replace-on-write with insertion order preserved for enumeration
//! - Freshness checks against an injectable [`Clock`]
//! - Per-key in-flight locks so concurrent misses fetch once

pub mod clock;
pub mod inflight;
pub mod keys;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use inflight::InFlight;
pub use store::{CacheEntry, CacheStore};
