#![allow(missing_docs)]

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::Path,
    rc::Rc,
};

use tempdir::TempDir;
use wakachi::{
    CorpusError,
    CorpusLoader,
    CorpusLoaderOptions,
    CorpusSource,
    Split,
    cache::{ArtifactCache, DiskArtifactCache},
    disk_cache::{
        RemoteTransfer,
        TransferError,
        TrustMode,
        WakachiDiskCache,
        WakachiDiskCacheOptions,
    },
};

const BASE_URL: &str = "https://corpus.invalid/wakachi";

const TRAIN: &str = "犬 が 猫 を 見 た 。 犬 が 走っ た 。";
const VALID: &str = "猫 が 走っ た 。";

/// Serves fixed texts by URL and logs every URL it is asked for.
#[derive(Clone, Default)]
struct FixtureTransfer {
    texts: Rc<HashMap<String, String>>,
    fetched: Rc<RefCell<Vec<String>>>,
}

impl FixtureTransfer {
    fn new(texts: &[(&str, &str)]) -> Self {
        Self {
            texts: Rc::new(
                texts
                    .iter()
                    .map(|(name, text)| (format!("{BASE_URL}/{name}"), text.to_string()))
                    .collect(),
            ),
            fetched: Default::default(),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetched.borrow().len()
    }
}

impl RemoteTransfer for FixtureTransfer {
    fn transfer(
        &mut self,
        url: &str,
        dest: &Path,
        _trust: TrustMode,
    ) -> Result<(), TransferError> {
        self.fetched.borrow_mut().push(url.to_string());
        match self.texts.get(url) {
            Some(text) => Ok(fs::write(dest, text)?),
            None => Err(TransferError::Rejected {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn source() -> CorpusSource {
    CorpusSource::default().with_resource(Split::Validation, Some("valid.txt"))
}

fn disk_loader(
    dir: &Path,
    transfer: &FixtureTransfer,
) -> CorpusLoader {
    let disk_cache = WakachiDiskCache::new(
        WakachiDiskCacheOptions::default()
            .with_cache_dir(Some(dir))
            .with_base_url(Some(BASE_URL))
            .with_transfer(Some(Box::new(transfer.clone()))),
    )
    .unwrap();
    CorpusLoader::from_disk_cache(
        CorpusLoaderOptions::default().with_source(source()),
        disk_cache,
    )
}

#[test]
fn test_end_to_end_on_disk() {
    let dir = TempDir::new("wakachi_e2e").unwrap();
    let transfer = FixtureTransfer::new(&[("20200516merge.txt", TRAIN), ("valid.txt", VALID)]);
    let mut loader = disk_loader(dir.path(), &transfer);

    let (train, vocab) = loader.load_corpus("train").unwrap();
    assert_eq!(train.ids(), &[0, 1, 2, 3, 4, 5, 6, 0, 1, 7, 5, 6]);
    assert_eq!(vocab.len(), 8);
    assert_eq!(vocab.token_of(7), Some("走っ"));
    assert_eq!(vocab.id_of("<eos>"), Some(6));

    let (valid, _) = loader.load_corpus("val").unwrap();
    assert_eq!(valid.ids(), &[2, 1, 7, 5, 6]);

    // Raw text is downloaded exactly once per resource.
    assert_eq!(transfer.fetch_count(), 2);

    for name in [
        "20200516merge.txt",
        "valid.txt",
        "aozorabunko.vocab.json",
        "aozorabunko.train.npy",
        "aozorabunko.valid.npy",
    ] {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }
    assert!(!dir.path().join("aozorabunko.test.npy").exists());
}

#[test]
fn test_second_run_reads_cache_only() {
    let dir = TempDir::new("wakachi_e2e").unwrap();
    let transfer = FixtureTransfer::new(&[("20200516merge.txt", TRAIN), ("valid.txt", VALID)]);

    let (first_train, first_vocab) = disk_loader(dir.path(), &transfer)
        .load_corpus("train")
        .unwrap();
    let vocab_bytes = fs::read(dir.path().join("aozorabunko.vocab.json")).unwrap();

    // Nothing may be re-fetched or rebuilt, even if the raw text goes away.
    fs::remove_file(dir.path().join("20200516merge.txt")).unwrap();
    let offline = FixtureTransfer::default();

    let mut loader = disk_loader(dir.path(), &offline);
    let (second_train, second_vocab) = loader.load_split(Split::Train).unwrap();

    assert_eq!(first_train, second_train);
    assert_eq!(first_vocab, second_vocab);
    assert_eq!(offline.fetch_count(), 0);
    assert_eq!(
        fs::read(dir.path().join("aozorabunko.vocab.json")).unwrap(),
        vocab_bytes
    );
}

#[test]
fn test_unconfigured_test_split() {
    let dir = TempDir::new("wakachi_e2e").unwrap();
    let transfer = FixtureTransfer::new(&[("20200516merge.txt", TRAIN)]);
    let mut loader = disk_loader(dir.path(), &transfer);

    let results = loader.load_all().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[0].1.is_ok());
    assert!(matches!(
        results[1].1,
        Err(CorpusError::Transfer(TransferError::Rejected { status: 404, .. }))
    ));
    assert!(matches!(
        results[2].1,
        Err(CorpusError::ResourceUnavailable {
            split: Split::Test,
            source: None,
        })
    ));

    // A failed download leaves no partial file behind.
    assert!(!dir.path().join("valid.txt").exists());
    assert!(!dir.path().join("valid.txt.part").exists());
}

#[test]
fn test_rebuild_after_invalidation() {
    let dir = TempDir::new("wakachi_e2e").unwrap();
    let transfer = FixtureTransfer::new(&[("20200516merge.txt", "犬 が")]);
    let mut loader = disk_loader(dir.path(), &transfer);

    let before = loader.load_vocabulary().unwrap();
    assert_eq!(before.len(), 2);
    loader.load_split(Split::Train).unwrap();

    // Replace the cached raw text; the cached vocabulary still wins.
    fs::write(dir.path().join("20200516merge.txt"), "猫 を 見 た").unwrap();
    let (_, still) = loader.load_corpus("train").unwrap();
    assert_eq!(still, before);

    assert!(loader.invalidate_vocabulary().unwrap());
    let artifacts = DiskArtifactCache::new(dir.path());
    assert!(!artifacts.contains("aozorabunko.vocab.json"));
    assert!(!artifacts.contains("aozorabunko.train.npy"));

    let (train, after) = loader.load_corpus("train").unwrap();
    assert_eq!(after.len(), 4);
    assert_eq!(train.decode(&after).unwrap(), vec!["猫", "を", "見", "た"]);
    assert_eq!(transfer.fetch_count(), 1);
}
