//! # In-Memory Artifact Cache

use std::collections::HashMap;

use crate::{
    cache::ArtifactCache,
    errors::{CorpusError, CorpusResult},
    types::TokenId,
    vocab::VocabularyMapping,
};

/// [`ArtifactCache`] held in memory; lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactCache {
    vocabs: HashMap<String, VocabularyMapping>,
    corpora: HashMap<String, Vec<TokenId>>,
}

impl MemoryArtifactCache {
    /// The number of stored artifacts.
    pub fn len(&self) -> usize {
        self.vocabs.len() + self.corpora.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArtifactCache for MemoryArtifactCache {
    fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.vocabs.contains_key(key) || self.corpora.contains_key(key)
    }

    fn get_vocab(
        &self,
        key: &str,
    ) -> CorpusResult<VocabularyMapping> {
        self.vocabs
            .get(key)
            .cloned()
            .ok_or_else(|| CorpusError::MissingArtifact(key.to_string()))
    }

    fn put_vocab(
        &mut self,
        key: &str,
        vocab: &VocabularyMapping,
    ) -> CorpusResult<()> {
        self.vocabs.insert(key.to_string(), vocab.clone());
        Ok(())
    }

    fn get_corpus(
        &self,
        key: &str,
    ) -> CorpusResult<Vec<TokenId>> {
        self.corpora
            .get(key)
            .cloned()
            .ok_or_else(|| CorpusError::MissingArtifact(key.to_string()))
    }

    fn put_corpus(
        &mut self,
        key: &str,
        ids: &[TokenId],
    ) -> CorpusResult<()> {
        self.corpora.insert(key.to_string(), ids.to_vec());
        Ok(())
    }

    fn invalidate(
        &mut self,
        key: &str,
    ) -> CorpusResult<bool> {
        let vocab = self.vocabs.remove(key).is_some();
        let corpus = self.corpora.remove(key).is_some();
        Ok(vocab || corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache() {
        let mut cache = MemoryArtifactCache::default();
        assert!(cache.is_empty());
        assert!(matches!(
            cache.get_corpus("a.npy"),
            Err(CorpusError::MissingArtifact(_))
        ));

        cache.put_corpus("a.npy", &[3, 1, 2]).unwrap();
        let vocab = VocabularyMapping::from_tokens(["x"]).unwrap();
        cache.put_vocab("v.json", &vocab).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("a.npy"));
        assert_eq!(cache.get_corpus("a.npy").unwrap(), vec![3, 1, 2]);
        assert_eq!(cache.get_vocab("v.json").unwrap(), vocab);

        assert!(cache.invalidate("a.npy").unwrap());
        assert!(!cache.invalidate("a.npy").unwrap());
        assert!(!cache.contains("a.npy"));
        assert_eq!(cache.len(), 1);
    }
}
