//! # Corpus Loading
//!
//! [`CorpusLoader`] ties the pieces together: it resolves a split name, loads
//! the shared vocabulary, and returns the split's [`Corpus`], building and
//! caching each artifact the first time it is asked for.

pub mod corpus_loader;
pub mod corpus_source;
pub mod encoded_corpus;

#[doc(inline)]
pub use corpus_loader::{CorpusLoader, CorpusLoaderOptions};
#[doc(inline)]
pub use corpus_source::{AOZORA_ARTIFACT_PREFIX, AOZORA_TRAIN_RESOURCE, CorpusSource};
#[doc(inline)]
pub use encoded_corpus::Corpus;
