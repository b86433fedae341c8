//! # Vocabulary Manager

use std::sync::Arc;

use crate::{
    cache::ArtifactCache,
    corpus::CorpusSource,
    errors::{CorpusError, CorpusResult},
    resources::{ResourceFetcher, read_tokens},
    tokenizer::TokenizeFn,
    types::Split,
    vocab::VocabularyMapping,
};

/// Builds, persists, and serves the vocabulary.
///
/// The vocabulary is built from the train split only, the first time it is
/// needed; after that the cached copy is authoritative, even if the upstream
/// text changes.
pub struct VocabularyManager {
    vocab_key: String,
    train_resource: Option<String>,
    tokenizer: TokenizeFn,
    loaded: Option<Arc<VocabularyMapping>>,
}

impl VocabularyManager {
    /// Construct a new [`VocabularyManager`].
    pub fn new(
        source: &CorpusSource,
        tokenizer: TokenizeFn,
    ) -> Self {
        Self {
            vocab_key: source.vocab_key(),
            train_resource: source.resource_name(Split::Train).map(str::to_string),
            tokenizer,
            loaded: None,
        }
    }

    /// The artifact key the vocabulary is cached under.
    pub fn vocab_key(&self) -> &str {
        &self.vocab_key
    }

    /// Load the vocabulary, building and persisting it on first use.
    ///
    /// 1. Already loaded by this manager: return it.
    /// 2. Cached: read it back; no fetch, no tokenization.
    /// 3. Otherwise: fetch and tokenize the train text, assign ids in
    ///    first-encounter order, and cache the result before returning it.
    ///
    /// # Errors
    /// * [`CorpusError::ResourceUnavailable`] if the train text is needed but
    ///   has no resource name or cannot be fetched.
    /// * Cache read/write errors.
    pub fn load_vocabulary(
        &mut self,
        fetcher: &mut dyn ResourceFetcher,
        cache: &mut dyn ArtifactCache,
    ) -> CorpusResult<Arc<VocabularyMapping>> {
        if let Some(vocab) = &self.loaded {
            return Ok(vocab.clone());
        }

        let vocab = if cache.contains(&self.vocab_key) {
            log::debug!("vocabulary cache hit: {}", self.vocab_key);
            cache.get_vocab(&self.vocab_key)?
        } else {
            let vocab = self.build_vocabulary(fetcher)?;
            cache.put_vocab(&self.vocab_key, &vocab)?;
            log::info!(
                "Built vocabulary of {} tokens: {}",
                vocab.len(),
                self.vocab_key
            );
            vocab
        };

        let vocab = Arc::new(vocab);
        self.loaded = Some(vocab.clone());
        Ok(vocab)
    }

    /// Drop the in-process copy; the next load goes back to the cache.
    pub fn forget(&mut self) {
        self.loaded = None;
    }

    fn build_vocabulary(
        &self,
        fetcher: &mut dyn ResourceFetcher,
    ) -> CorpusResult<VocabularyMapping> {
        let unavailable = |source| CorpusError::ResourceUnavailable {
            split: Split::Train,
            source,
        };

        let resource = self.train_resource.as_deref().ok_or(unavailable(None))?;
        let path = fetcher
            .ensure_local(resource)
            .map_err(|e| unavailable(Some(e)))?;

        let tokens = read_tokens(&path, self.tokenizer)?;
        VocabularyMapping::from_tokens(&tokens)
    }
}
