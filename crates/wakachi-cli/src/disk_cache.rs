use wakachi::disk_cache::{TrustPolicy, WakachiDiskCache, WakachiDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory; overrides `$WAKACHI_CACHE_DIR`.
    #[arg(long, default_value = None)]
    cache_dir: Option<String>,

    /// Remote base URL of the corpus resources.
    #[arg(long, default_value = None)]
    base_url: Option<String>,

    /// On a transport failure, retry once with certificate validation disabled.
    #[arg(long)]
    allow_insecure_fallback: bool,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<WakachiDiskCache, Box<dyn std::error::Error>> {
        let trust_policy = if self.allow_insecure_fallback {
            TrustPolicy::AllowInsecureFallback
        } else {
            TrustPolicy::Strict
        };

        let options = WakachiDiskCacheOptions::default()
            .with_cache_dir(self.cache_dir.as_ref())
            .with_base_url(self.base_url.as_ref())
            .with_trust_policy(trust_policy);

        Ok(WakachiDiskCache::new(options)?)
    }
}
