//! # Wakachi Disk Cache

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::Context;

use crate::{
    AOZORA_BASE_URL,
    WAKACHI_CACHE_CONFIG,
    errors::TransferError,
    path_utils,
    transfer::{DownloaderTransfer, RemoteTransfer, TrustMode, TrustPolicy},
};

/// Options for [`WakachiDiskCache`].
#[derive(Default)]
pub struct WakachiDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional remote base URL; defaults to [`AOZORA_BASE_URL`].
    pub base_url: Option<String>,

    /// Fallback policy for transport failures.
    pub trust_policy: TrustPolicy,

    /// Optional transfer mechanism; defaults to [`DownloaderTransfer`].
    pub transfer: Option<Box<dyn RemoteTransfer>>,
}

impl WakachiDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the remote base URL.
    pub fn with_base_url<S: AsRef<str>>(
        mut self,
        base_url: Option<S>,
    ) -> Self {
        self.base_url = base_url.map(|s| s.as_ref().to_string());
        self
    }

    /// Set the trust policy.
    pub fn with_trust_policy(
        mut self,
        trust_policy: TrustPolicy,
    ) -> Self {
        self.trust_policy = trust_policy;
        self
    }

    /// Set the transfer mechanism.
    pub fn with_transfer(
        mut self,
        transfer: Option<Box<dyn RemoteTransfer>>,
    ) -> Self {
        self.transfer = transfer;
        self
    }
}

/// Disk cache for remote resources.
///
/// Resource `name` lives remotely at `{base_url}{name}` and locally at
/// `{cache_dir}/{name}`. A local file, once present, is never refreshed.
pub struct WakachiDiskCache {
    cache_dir: PathBuf,
    base_url: String,
    trust_policy: TrustPolicy,

    /// Set once a relaxed retry has happened; later transfers skip verification.
    trust_downgraded: bool,

    transfer: Box<dyn RemoteTransfer>,
}

impl WakachiDiskCache {
    /// Construct a new [`WakachiDiskCache`].
    pub fn new(options: WakachiDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = WAKACHI_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;
        let cache_dir =
            path_utils::expand_path(&cache_dir).context("failed to expand cache directory")?;

        let mut base_url = options
            .base_url
            .unwrap_or_else(|| AOZORA_BASE_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let transfer = match options.transfer {
            Some(transfer) => transfer,
            None => Box::new(DownloaderTransfer::new()?),
        };

        Ok(Self {
            cache_dir,
            base_url,
            trust_policy: options.trust_policy,
            trust_downgraded: false,
            transfer,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the remote base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the trust policy.
    pub fn trust_policy(&self) -> TrustPolicy {
        self.trust_policy
    }

    /// Has this cache fallen back to relaxed certificate validation?
    pub fn trust_downgraded(&self) -> bool {
        self.trust_downgraded
    }

    /// Get the cache path for a resource.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn cache_path<F: AsRef<Path>>(
        &self,
        file: F,
    ) -> PathBuf {
        self.cache_dir.join(file)
    }

    /// Get the remote URL for a resource.
    pub fn resource_url(
        &self,
        resource_name: &str,
    ) -> String {
        format!("{}{}", self.base_url, resource_name)
    }

    /// Ensure a local copy of `resource_name` exists, downloading it if needed.
    ///
    /// If the file is already cached this returns without touching the network.
    ///
    /// A transport failure (see [`TransferError::is_transport`]) is retried
    /// exactly once with certificate validation disabled, and only when the
    /// policy is [`TrustPolicy::AllowInsecureFallback`].
    ///
    /// # Returns
    /// The local path of the resource.
    ///
    /// # Errors
    /// * [`TransferError::InvalidResource`] if the name is empty, absolute, or has a `..` component.
    /// * The transfer error, if the resource could not be fetched.
    pub fn ensure_local(
        &mut self,
        resource_name: &str,
    ) -> Result<PathBuf, TransferError> {
        let name = Path::new(resource_name);
        if resource_name.is_empty()
            || name.is_absolute()
            || name.components().any(|c| c == Component::ParentDir)
        {
            return Err(TransferError::InvalidResource(resource_name.to_string()));
        }

        let path = self.cache_path(resource_name);
        if path.exists() {
            log::debug!("cache hit: {}", path.display());
            return Ok(path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let url = self.resource_url(resource_name);
        let staging = path_utils::staging_path(&path);

        log::info!("Downloading {resource_name} ...");
        match self.transfer_once(&url, &staging) {
            Ok(()) => (),
            Err(err) if self.may_downgrade(&err) => {
                log::warn!(
                    "{err}; retrying with certificate validation DISABLED for the rest of this run"
                );
                self.trust_downgraded = true;
                self.transfer_once(&url, &staging)?;
            }
            Err(err) => return Err(err),
        }

        fs::rename(&staging, &path)?;
        log::info!("Done: {}", path.display());

        Ok(path)
    }

    fn may_downgrade(
        &self,
        err: &TransferError,
    ) -> bool {
        err.is_transport()
            && !self.trust_downgraded
            && self.trust_policy == TrustPolicy::AllowInsecureFallback
    }

    fn transfer_once(
        &mut self,
        url: &str,
        staging: &Path,
    ) -> Result<(), TransferError> {
        path_utils::remove_if_exists(staging)?;

        let trust = if self.trust_downgraded {
            TrustMode::Relaxed
        } else {
            TrustMode::Verified
        };

        let result = self.transfer.transfer(url, staging, trust);
        if result.is_err() {
            path_utils::remove_if_exists(staging)?;
        }
        result
    }
}
