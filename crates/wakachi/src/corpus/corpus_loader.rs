//! # Corpus Loader

use std::sync::Arc;

use strum::IntoEnumIterator;
use wakachi_disk_cache::WakachiDiskCache;

use crate::{
    cache::{ArtifactCache, DiskArtifactCache},
    corpus::{Corpus, CorpusSource},
    errors::{CorpusError, CorpusResult},
    resources::{ResourceFetcher, read_tokens},
    tokenizer::{self, TokenizeFn},
    types::Split,
    vocab::{VocabularyManager, VocabularyMapping},
};

/// Options for [`CorpusLoader`].
#[derive(Debug, Clone, Default)]
pub struct CorpusLoaderOptions {
    /// Resource names and artifact keys.
    pub source: CorpusSource,

    /// Optional tokenizer; defaults to [`tokenizer::tokenize`].
    pub tokenizer: Option<TokenizeFn>,
}

impl CorpusLoaderOptions {
    /// Set the corpus source.
    pub fn with_source(
        mut self,
        source: CorpusSource,
    ) -> Self {
        self.source = source;
        self
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(
        mut self,
        tokenizer: Option<TokenizeFn>,
    ) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

/// Loads encoded splits and the shared vocabulary, building and caching
/// whatever is missing.
pub struct CorpusLoader {
    source: CorpusSource,
    tokenizer: TokenizeFn,
    vocab: VocabularyManager,
    fetcher: Box<dyn ResourceFetcher>,
    cache: Box<dyn ArtifactCache>,
}

impl CorpusLoader {
    /// Construct a new [`CorpusLoader`].
    pub fn new(
        options: CorpusLoaderOptions,
        fetcher: Box<dyn ResourceFetcher>,
        cache: Box<dyn ArtifactCache>,
    ) -> Self {
        let tokenizer = options.tokenizer.unwrap_or(tokenizer::tokenize);
        let vocab = VocabularyManager::new(&options.source, tokenizer);
        Self {
            source: options.source,
            tokenizer,
            vocab,
            fetcher,
            cache,
        }
    }

    /// Construct a [`CorpusLoader`] whose artifacts live next to the raw text
    /// in the disk cache's directory.
    pub fn from_disk_cache(
        options: CorpusLoaderOptions,
        disk_cache: WakachiDiskCache,
    ) -> Self {
        let artifacts = DiskArtifactCache::new(disk_cache.cache_dir());
        Self::new(options, Box::new(disk_cache), Box::new(artifacts))
    }

    /// Get the corpus source.
    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// Get the artifact cache.
    pub fn cache(&self) -> &dyn ArtifactCache {
        self.cache.as_ref()
    }

    /// Load the vocabulary, building it from the train split on first use.
    ///
    /// See [`VocabularyManager::load_vocabulary`].
    pub fn load_vocabulary(&mut self) -> CorpusResult<Arc<VocabularyMapping>> {
        self.vocab
            .load_vocabulary(self.fetcher.as_mut(), self.cache.as_mut())
    }

    /// Load a split by name: `"train"`, `"validation"`, `"val"`, or `"test"`.
    ///
    /// The name is checked before anything else is done.
    ///
    /// # Errors
    /// * [`CorpusError::InvalidSplit`] for any other name.
    /// * See [`Self::load_split`].
    pub fn load_corpus(
        &mut self,
        split: &str,
    ) -> CorpusResult<(Corpus, Arc<VocabularyMapping>)> {
        let split = Split::parse(split)?;
        self.load_split(split)
    }

    /// Load a split, building and caching its encoding if needed.
    ///
    /// 1. Load the vocabulary.
    /// 2. Cached encoding: read it back.
    /// 3. Otherwise: fetch and tokenize the split's raw text, encode it
    ///    against the vocabulary, and cache the encoding before returning it.
    ///
    /// # Errors
    /// * [`CorpusError::ResourceUnavailable`] if the split's text is needed
    ///   but has no resource name (or, for the vocabulary, cannot be fetched).
    /// * [`CorpusError::Transfer`] if the split's text cannot be fetched.
    /// * [`CorpusError::UnknownToken`] if the split has a token the
    ///   vocabulary lacks.
    pub fn load_split(
        &mut self,
        split: Split,
    ) -> CorpusResult<(Corpus, Arc<VocabularyMapping>)> {
        let vocab = self.load_vocabulary()?;

        let key = self.source.corpus_key(split);
        if self.cache.contains(&key) {
            log::debug!("{split} corpus cache hit: {key}");
            let ids = self.cache.get_corpus(&key)?;
            return Ok((Corpus::new(split, ids), vocab));
        }

        let resource = self
            .source
            .resource_name(split)
            .ok_or(CorpusError::ResourceUnavailable {
                split,
                source: None,
            })?;
        let path = self.fetcher.ensure_local(resource)?;
        let tokens = read_tokens(&path, self.tokenizer)?;
        let ids = vocab.encode(split, &tokens)?;

        self.cache.put_corpus(&key, &ids)?;
        log::info!("Encoded {split} corpus of {} tokens: {key}", ids.len());

        Ok((Corpus::new(split, ids), vocab))
    }

    /// Load every split, in order: train, validation, test.
    ///
    /// The vocabulary is loaded first; failing that, nothing is attempted.
    /// Each split's outcome is reported separately.
    pub fn load_all(&mut self) -> CorpusResult<Vec<(Split, CorpusResult<Corpus>)>> {
        self.load_vocabulary()?;
        Ok(Split::iter()
            .map(|split| (split, self.load_split(split).map(|(corpus, _)| corpus)))
            .collect())
    }

    /// Drop the cached encoding of one split.
    ///
    /// Returns whether anything was removed.
    pub fn invalidate_split(
        &mut self,
        split: Split,
    ) -> CorpusResult<bool> {
        let key = self.source.corpus_key(split);
        self.cache.invalidate(&key)
    }

    /// Drop the cached vocabulary, and with it every cached encoding, since
    /// those ids are only meaningful against the vocabulary that produced them.
    ///
    /// Returns whether anything was removed.
    pub fn invalidate_vocabulary(&mut self) -> CorpusResult<bool> {
        let mut removed = false;
        for split in Split::iter() {
            removed |= self.invalidate_split(split)?;
        }
        removed |= self.cache.invalidate(self.vocab.vocab_key())?;
        self.vocab.forget();
        Ok(removed)
    }
}
