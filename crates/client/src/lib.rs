//! Provider client code for comicache.
//!
//! This crate provides the HTTP fetch pipeline against the comic provider,
//! the raw payload shape, and its normalization into [`comicache_core::Comic`].

pub mod fetch;
pub mod source;
pub mod transform;

pub use fetch::{ComicFetcher, FetchConfig, FetchError};
pub use source::{ComicSource, XkcdClient};
pub use transform::{RawComic, normalize};
