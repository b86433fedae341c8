//! # Remote Resources
//!
//! [`ResourceFetcher`] is the capability the vocabulary and corpus loaders use
//! to obtain raw text; [`crate::disk_cache::WakachiDiskCache`] is the standard
//! implementation.

pub mod resource_fetcher;

#[doc(inline)]
pub use resource_fetcher::{ResourceFetcher, read_tokens};
