//! # Resource Fetcher

use std::{
    fs,
    path::{Path, PathBuf},
};

use wakachi_disk_cache::{TransferError, WakachiDiskCache};

use crate::tokenizer::TokenizeFn;

/// A trait for obtaining a local copy of a named remote resource.
pub trait ResourceFetcher {
    /// Ensure `resource_name` is available locally; return its path.
    ///
    /// Must not touch the network when a local copy already exists.
    fn ensure_local(
        &mut self,
        resource_name: &str,
    ) -> Result<PathBuf, TransferError>;
}

impl ResourceFetcher for WakachiDiskCache {
    fn ensure_local(
        &mut self,
        resource_name: &str,
    ) -> Result<PathBuf, TransferError> {
        WakachiDiskCache::ensure_local(self, resource_name)
    }
}

/// Read a local raw-text file and tokenize it.
pub fn read_tokens<P: AsRef<Path>>(
    path: P,
    tokenizer: TokenizeFn,
) -> std::io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(tokenizer(&text))
}
