//! # Error Types

use wakachi_disk_cache::TransferError;

use crate::types::Split;

/// Errors from wakachi operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A remote resource could not be fetched.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// A split's raw text has no configured resource, or could not be fetched
    /// while nothing derived from it was cached.
    #[error("raw text for the {split} split is unavailable")]
    ResourceUnavailable {
        /// The split whose raw text was needed.
        split: Split,

        /// The fetch failure, if a fetch was attempted.
        #[source]
        source: Option<TransferError>,
    },

    /// The split name is not one of `train`, `validation` (`val`), `test`.
    #[error("unknown split {0:?}; expected train, validation (or val), or test")]
    InvalidSplit(String),

    /// A token of a split is absent from the vocabulary.
    #[error("token {token:?} at position {position} of the {split} split is not in the vocabulary")]
    UnknownToken {
        /// The split being encoded.
        split: Split,

        /// The missing token.
        token: String,

        /// The token's index in the split's token sequence.
        position: usize,
    },

    /// Vocabulary size exceeds the capacity of [`crate::TokenId`].
    #[error("vocab size ({size}) exceeds token id capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A cached artifact exists but does not hold a valid value.
    #[error("cached artifact {key:?} is corrupt: {reason}")]
    CorruptArtifact {
        /// The artifact key.
        key: String,

        /// What is wrong with it.
        reason: String,
    },

    /// A cached artifact was requested but is not present.
    #[error("cached artifact {0:?} not found")]
    MissingArtifact(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Vocabulary record (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Array store read error.
    #[error(transparent)]
    ReadNpy(#[from] ndarray_npy::ReadNpyError),

    /// Array store write error.
    #[error(transparent)]
    WriteNpy(#[from] ndarray_npy::WriteNpyError),
}

/// Result type for wakachi operations.
pub type CorpusResult<T> = core::result::Result<T, CorpusError>;
