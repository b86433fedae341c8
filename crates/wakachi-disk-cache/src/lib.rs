//! # wakachi-disk-cache
//!
//! Keeps local copies of remote corpus resources.
//!
//! A resource is named by a file name; the remote location is
//! `{base_url}{name}` and the local copy is `{cache_dir}/{name}`.
//! See [`WakachiDiskCache::ensure_local`].
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod errors;
pub mod path_resolver;
pub mod path_utils;
pub mod transfer;

pub use disk_cache::{WakachiDiskCache, WakachiDiskCacheOptions};
pub use errors::TransferError;
pub use transfer::{DownloaderTransfer, RemoteTransfer, TrustMode, TrustPolicy};

/// Environment variable key to override the default cache directory.
pub const WAKACHI_CACHE_DIR: &str = "WAKACHI_CACHE_DIR";

/// Upstream location of the whitespace-segmented Aozora Bunko corpus.
pub const AOZORA_BASE_URL: &str =
    "https://raw.githubusercontent.com/segavvy/wakatigaki-aozorabunko/master/";

/// Default [`PathResolver`] for wakachi.
pub const WAKACHI_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.wakachi",
    organization: "",
    application: "wakachi",
    cache_env_vars: &[WAKACHI_CACHE_DIR],
};
