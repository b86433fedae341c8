//! # Remote Transfer
//!
//! [`RemoteTransfer`] is the seam between [`crate::WakachiDiskCache`] and the
//! network. [`DownloaderTransfer`] is the production implementation.

use std::{env, path::Path, time::Duration};

use downloader::{Download, Downloader};

use crate::errors::TransferError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("wakachi/", env!("CARGO_PKG_VERSION"));

/// Certificate validation mode for a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustMode {
    /// Validate server certificates.
    Verified,

    /// Accept any server certificate.
    Relaxed,
}

/// Whether a cache may fall back to [`TrustMode::Relaxed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrustPolicy {
    /// Transport failures are final.
    #[default]
    Strict,

    /// On a transport failure, retry once with certificate validation disabled;
    /// all later transfers through the same cache stay relaxed.
    ///
    /// This weakens transport security. It exists for hosts whose certificate
    /// chain the local trust store cannot validate.
    AllowInsecureFallback,
}

/// A mechanism that copies a URL to a local file.
pub trait RemoteTransfer {
    /// Fetch `url` into `dest`.
    ///
    /// `dest` does not exist when this is called. On failure `dest` may be
    /// left partially written.
    fn transfer(
        &mut self,
        url: &str,
        dest: &Path,
        trust: TrustMode,
    ) -> Result<(), TransferError>;
}

/// [`RemoteTransfer`] over a [`Downloader`].
///
/// The relaxed downloader is only built the first time it is asked for.
///
/// `downloader` reports success when the response body ends early or a write
/// fails mid-stream, so a truncated file can be returned as complete. Only
/// failures it reports are seen here.
pub struct DownloaderTransfer {
    verified: Downloader,
    relaxed: Option<Downloader>,
}

impl DownloaderTransfer {
    /// Construct a new [`DownloaderTransfer`].
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            verified: build_downloader(TrustMode::Verified)?,
            relaxed: None,
        })
    }

    fn downloader(
        &mut self,
        trust: TrustMode,
    ) -> Result<&mut Downloader, TransferError> {
        match trust {
            TrustMode::Verified => Ok(&mut self.verified),
            TrustMode::Relaxed => {
                let downloader = match self.relaxed.take() {
                    Some(downloader) => downloader,
                    None => build_downloader(TrustMode::Relaxed)?,
                };
                Ok(self.relaxed.insert(downloader))
            }
        }
    }
}

impl RemoteTransfer for DownloaderTransfer {
    fn transfer(
        &mut self,
        url: &str,
        dest: &Path,
        trust: TrustMode,
    ) -> Result<(), TransferError> {
        let downloader = self.downloader(trust)?;

        let results = downloader
            .download(&[Download::new(url).file_name(dest)])
            .map_err(|e| TransferError::from_downloader(url, e))?;

        for result in results {
            result.map_err(|e| TransferError::from_downloader(url, e))?;
        }
        Ok(())
    }
}

/// Build a single-attempt [`Downloader`] for the given trust mode.
///
/// Destinations are always absolute, so the download folder is only
/// there to satisfy the builder.
pub fn build_downloader(trust: TrustMode) -> Result<Downloader, TransferError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(30))
        .danger_accept_invalid_certs(trust == TrustMode::Relaxed)
        .build()
        .map_err(|e| TransferError::Setup(e.to_string()))?;

    Downloader::builder()
        .download_folder(&env::temp_dir())
        .parallel_requests(1)
        .retries(1)
        .build_with_client(client)
        .map_err(|e| TransferError::Setup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(TrustPolicy::default(), TrustPolicy::Strict);
    }

    #[test]
    fn test_build_downloaders() {
        build_downloader(TrustMode::Verified).unwrap();
        build_downloader(TrustMode::Relaxed).unwrap();
    }
}
