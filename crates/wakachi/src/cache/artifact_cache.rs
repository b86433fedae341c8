//! # Artifact Cache Trait

use crate::{errors::CorpusResult, types::TokenId, vocab::VocabularyMapping};

/// Keyed storage for derived artifacts.
///
/// Values are immutable once put; replacing one requires an explicit
/// [`ArtifactCache::invalidate`].
pub trait ArtifactCache {
    /// Is an artifact stored under `key`?
    fn contains(
        &self,
        key: &str,
    ) -> bool;

    /// Load a vocabulary.
    ///
    /// # Errors
    /// [`crate::CorpusError::MissingArtifact`] if nothing is stored under `key`.
    fn get_vocab(
        &self,
        key: &str,
    ) -> CorpusResult<VocabularyMapping>;

    /// Store a vocabulary.
    fn put_vocab(
        &mut self,
        key: &str,
        vocab: &VocabularyMapping,
    ) -> CorpusResult<()>;

    /// Load an encoded corpus.
    ///
    /// # Errors
    /// [`crate::CorpusError::MissingArtifact`] if nothing is stored under `key`.
    fn get_corpus(
        &self,
        key: &str,
    ) -> CorpusResult<Vec<TokenId>>;

    /// Store an encoded corpus.
    fn put_corpus(
        &mut self,
        key: &str,
        ids: &[TokenId],
    ) -> CorpusResult<()>;

    /// Remove the artifact stored under `key`.
    ///
    /// Returns whether anything was removed.
    fn invalidate(
        &mut self,
        key: &str,
    ) -> CorpusResult<bool>;
}
