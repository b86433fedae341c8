//! # Artifact Cache
//!
//! Derived artifacts (the vocabulary, the encoded corpora) are stored through
//! the [`ArtifactCache`] trait, keyed by file-name-like strings.

pub mod artifact_cache;
pub mod disk_artifact_cache;
pub mod memory_artifact_cache;

#[doc(inline)]
pub use artifact_cache::ArtifactCache;
#[doc(inline)]
pub use disk_artifact_cache::DiskArtifactCache;
#[doc(inline)]
pub use memory_artifact_cache::MemoryArtifactCache;
