use wakachi::{CorpusLoader, CorpusLoaderOptions, CorpusSource, Split};

use crate::disk_cache::DiskCacheArgs;

/// Corpus resource argument group.
#[derive(clap::Args, Debug)]
pub struct CorpusSourceArgs {
    /// Resource name of the train split's raw text.
    #[arg(long, default_value = None)]
    train_resource: Option<String>,

    /// Resource name of the validation split's raw text.
    #[arg(long, default_value = None)]
    validation_resource: Option<String>,

    /// Resource name of the test split's raw text.
    #[arg(long, default_value = None)]
    test_resource: Option<String>,
}

impl CorpusSourceArgs {
    /// Build the corpus source.
    pub fn corpus_source(&self) -> CorpusSource {
        let mut source = CorpusSource::default();
        if let Some(train) = &self.train_resource {
            source = source.with_resource(Split::Train, Some(train));
        }
        source
            .with_resource(Split::Validation, self.validation_resource.as_ref())
            .with_resource(Split::Test, self.test_resource.as_ref())
    }

    /// Build a loader over the disk cache.
    pub fn init_loader(
        &self,
        disk_cache: &DiskCacheArgs,
    ) -> Result<CorpusLoader, Box<dyn std::error::Error>> {
        let disk_cache = disk_cache.init_disk_cache()?;
        log::debug!("cache dir: {}", disk_cache.cache_dir().display());

        let options = CorpusLoaderOptions::default().with_source(self.corpus_source());
        Ok(CorpusLoader::from_disk_cache(options, disk_cache))
    }
}
