//! # Error Types

/// Status code the downloader records when a request produced no HTTP response.
///
/// Connection resets, DNS failures and certificate validation failures all land
/// here; so does a genuine `400 Bad Request`, which cannot be told apart.
pub const NO_RESPONSE_STATUS: u16 = 400;

/// Errors from fetching a remote resource.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The request never produced a usable HTTP response.
    #[error("transport failure fetching {url}")]
    Transport {
        /// The URL requested.
        url: String,
    },

    /// The server answered, but not with success.
    #[error("{url} answered with HTTP status {status}")]
    Rejected {
        /// The URL requested.
        url: String,

        /// The final HTTP status.
        status: u16,
    },

    /// The resource name cannot be mapped to a cache path.
    #[error("invalid resource name: {0:?}")]
    InvalidResource(String),

    /// The transfer machinery could not be configured.
    #[error("transfer setup failed: {0}")]
    Setup(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Is this a transport-level failure (no HTTP response)?
    ///
    /// Only transport failures are eligible for the relaxed-trust retry.
    pub fn is_transport(&self) -> bool {
        matches!(self, TransferError::Transport { .. })
    }

    /// Classify a [`downloader::Error`] raised while fetching `url`.
    pub fn from_downloader(
        url: &str,
        err: downloader::Error,
    ) -> Self {
        let url = url.to_string();
        match err {
            // No recorded attempt: the destination file could not be created.
            downloader::Error::Download(summary) => match summary.status.last() {
                None => TransferError::Io(std::io::Error::other(format!(
                    "cannot create {}",
                    summary.file_name.display()
                ))),
                Some(&(_, NO_RESPONSE_STATUS)) => TransferError::Transport { url },
                Some(&(_, status)) => TransferError::Rejected { url, status },
            },
            downloader::Error::File(summary) => {
                TransferError::Io(std::io::Error::other(summary.to_string()))
            }
            other => TransferError::Setup(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use downloader::{DownloadSummary, Verification};

    use super::*;

    const URL: &str = "https://example.com/corpus.txt";

    fn summary(status: &[u16]) -> DownloadSummary {
        DownloadSummary {
            status: status.iter().map(|&s| (URL.to_string(), s)).collect(),
            file_name: PathBuf::from("/tmp/corpus.txt.part"),
            verified: Verification::NotVerified,
        }
    }

    #[test]
    fn test_classify_download_failures() {
        let err = TransferError::from_downloader(URL, downloader::Error::Download(summary(&[])));
        assert!(!err.is_transport());
        assert!(matches!(err, TransferError::Io(_)));

        let err =
            TransferError::from_downloader(URL, downloader::Error::Download(summary(&[400])));
        assert!(err.is_transport());

        let err =
            TransferError::from_downloader(URL, downloader::Error::Download(summary(&[404])));
        assert!(!err.is_transport());
        assert!(matches!(err, TransferError::Rejected { status: 404, .. }));

        let err = TransferError::from_downloader(URL, downloader::Error::Setup("bad".into()));
        assert!(matches!(err, TransferError::Setup(_)));
    }
}
