//! Core types and shared functionality for comicache.
//!
//! This crate provides:
//! - The `Comic` model
//! - In-memory cache store with injectable clock
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod comic;
pub mod config;
pub mod error;

pub use cache::{CacheEntry, CacheStore, Clock, InFlight, ManualClock, SystemClock};
pub use comic::Comic;
pub use config::{AppConfig, ConfigError};
pub use error::{Error, ValidationDetail};
