//! # Disk Artifact Cache
//!
//! * vocabularies: JSON records (see [`crate::vocab::vocab_record`]);
//! * corpora: `.npy` files holding one 1-D `u32` array.
//!
//! Writes go to a staging file that is renamed into place, so a crash
//! mid-write leaves no file under the final key.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use ndarray::{Array1, ArrayView1};
use wakachi_disk_cache::path_utils::{remove_if_exists, staging_path};

use crate::{
    cache::ArtifactCache,
    errors::{CorpusError, CorpusResult},
    types::TokenId,
    vocab::{VocabularyMapping, read_vocab_record, write_vocab_record},
};

/// [`ArtifactCache`] backed by one directory; the key is the file name.
#[derive(Debug, Clone)]
pub struct DiskArtifactCache {
    dir: PathBuf,
}

impl DiskArtifactCache {
    /// Construct a new [`DiskArtifactCache`].
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the path of an artifact.
    ///
    /// * Does not check that the path exists.
    pub fn artifact_path(
        &self,
        key: &str,
    ) -> PathBuf {
        self.dir.join(key)
    }

    fn existing_path(
        &self,
        key: &str,
    ) -> CorpusResult<PathBuf> {
        let path = self.artifact_path(key);
        if path.is_file() {
            Ok(path)
        } else {
            Err(CorpusError::MissingArtifact(key.to_string()))
        }
    }

    /// Write through a staging file, then rename it over `key`.
    fn write_staged<F>(
        &self,
        key: &str,
        write: F,
    ) -> CorpusResult<()>
    where
        F: FnOnce(&Path) -> CorpusResult<()>,
    {
        fs::create_dir_all(&self.dir)?;

        let path = self.artifact_path(key);
        let staging = staging_path(&path);
        remove_if_exists(&staging)?;

        if let Err(err) = write(&staging) {
            remove_if_exists(&staging)?;
            return Err(err);
        }
        fs::rename(&staging, &path)?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl ArtifactCache for DiskArtifactCache {
    fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.artifact_path(key).is_file()
    }

    fn get_vocab(
        &self,
        key: &str,
    ) -> CorpusResult<VocabularyMapping> {
        let reader = BufReader::new(File::open(self.existing_path(key)?)?);
        read_vocab_record(reader, key)
    }

    fn put_vocab(
        &mut self,
        key: &str,
        vocab: &VocabularyMapping,
    ) -> CorpusResult<()> {
        self.write_staged(key, |path| {
            let mut writer = BufWriter::new(File::create(path)?);
            write_vocab_record(vocab, &mut writer)?;
            writer.flush()?;
            Ok(())
        })
    }

    fn get_corpus(
        &self,
        key: &str,
    ) -> CorpusResult<Vec<TokenId>> {
        let array: Array1<TokenId> = ndarray_npy::read_npy(self.existing_path(key)?)?;
        Ok(array.to_vec())
    }

    fn put_corpus(
        &mut self,
        key: &str,
        ids: &[TokenId],
    ) -> CorpusResult<()> {
        self.write_staged(key, |path| {
            ndarray_npy::write_npy(path, &ArrayView1::from(ids))?;
            Ok(())
        })
    }

    fn invalidate(
        &mut self,
        key: &str,
    ) -> CorpusResult<bool> {
        let path = self.artifact_path(key);
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        log::info!("invalidated {}", path.display());
        Ok(true)
    }
}
