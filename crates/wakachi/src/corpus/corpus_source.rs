//! # Corpus Source Configuration

use crate::types::Split;

/// Upstream resource holding the train split.
pub const AOZORA_TRAIN_RESOURCE: &str = "20200516merge.txt";

/// Prefix shared by all cached artifact names.
pub const AOZORA_ARTIFACT_PREFIX: &str = "aozorabunko";

/// Where each split's raw text comes from, and what its artifacts are called.
///
/// Only the train split has an upstream resource by default; validation and
/// test must be configured with [`CorpusSource::with_resource`] before they
/// can be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    /// Raw-text resource name of the train split.
    pub train: Option<String>,

    /// Raw-text resource name of the validation split.
    pub validation: Option<String>,

    /// Raw-text resource name of the test split.
    pub test: Option<String>,

    /// Prefix of the cached artifact names.
    pub artifact_prefix: String,
}

impl Default for CorpusSource {
    fn default() -> Self {
        Self {
            train: Some(AOZORA_TRAIN_RESOURCE.to_string()),
            validation: None,
            test: None,
            artifact_prefix: AOZORA_ARTIFACT_PREFIX.to_string(),
        }
    }
}

impl CorpusSource {
    /// Set the raw-text resource name of a split; `None` or `""` unsets it.
    pub fn with_resource<S: AsRef<str>>(
        mut self,
        split: Split,
        resource: Option<S>,
    ) -> Self {
        let resource = resource
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty());
        match split {
            Split::Train => self.train = resource,
            Split::Validation => self.validation = resource,
            Split::Test => self.test = resource,
        }
        self
    }

    /// Set the artifact name prefix.
    pub fn with_artifact_prefix<S: AsRef<str>>(
        mut self,
        prefix: S,
    ) -> Self {
        self.artifact_prefix = prefix.as_ref().to_string();
        self
    }

    /// The raw-text resource name of a split, if configured.
    pub fn resource_name(
        &self,
        split: Split,
    ) -> Option<&str> {
        let name = match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
            Split::Test => &self.test,
        };
        name.as_deref().filter(|s| !s.is_empty())
    }

    /// The artifact key of the vocabulary.
    pub fn vocab_key(&self) -> String {
        format!("{}.vocab.json", self.artifact_prefix)
    }

    /// The artifact key of a split's encoded corpus.
    pub fn corpus_key(
        &self,
        split: Split,
    ) -> String {
        format!("{}.{}.npy", self.artifact_prefix, split.file_stem())
    }
}
