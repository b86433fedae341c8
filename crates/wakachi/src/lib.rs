//! # `wakachi` Corpus Loader
//!
//! Loads a whitespace-segmented (*wakachi-gaki*) text corpus as integer token ids.
//!
//! The pipeline, per split:
//! 1. fetch the raw text on demand ([`resources`]),
//! 2. split it into tokens ([`tokenizer`]),
//! 3. build the vocabulary from the train split, once ([`vocab`]),
//! 4. encode the split and cache the result ([`corpus`], [`cache`]).
//!
//! Every derived artifact is written to the artifact cache the first time it is
//! built, and read back on every later run. Nothing is ever rebuilt while its
//! cached copy exists; see [`corpus::CorpusLoader::invalidate_vocabulary`] to
//! start over.
//!
//! ```rust,ignore
//! use wakachi::corpus::{CorpusLoader, CorpusLoaderOptions};
//! use wakachi::disk_cache::{WakachiDiskCache, WakachiDiskCacheOptions};
//!
//! let disk_cache = WakachiDiskCache::new(WakachiDiskCacheOptions::default())?;
//! let mut loader = CorpusLoader::from_disk_cache(CorpusLoaderOptions::default(), disk_cache);
//!
//! let (corpus, vocab) = loader.load_corpus("train")?;
//! println!("{} tokens, {} distinct", corpus.len(), vocab.len());
//! ```
#![warn(missing_docs, unused)]

pub mod cache;
pub mod corpus;
pub mod errors;
pub mod resources;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use wakachi_disk_cache as disk_cache;

#[doc(inline)]
pub use corpus::{Corpus, CorpusLoader, CorpusLoaderOptions, CorpusSource};
#[doc(inline)]
pub use errors::{CorpusError, CorpusResult};
#[doc(inline)]
pub use types::{Split, TokenId};
#[doc(inline)]
pub use vocab::VocabularyMapping;
