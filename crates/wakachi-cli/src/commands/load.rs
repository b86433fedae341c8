use wakachi::{Corpus, CorpusError, CorpusLoader};

/// Args for the load command.
#[derive(clap::Args, Debug, Default)]
pub struct LoadArgs {
    /// Load only this split: train, validation (or val), or test.
    #[arg(long, default_value = None)]
    split: Option<String>,
}

impl LoadArgs {
    /// Run the load command.
    pub fn run(
        &self,
        loader: &mut CorpusLoader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(split) = &self.split {
            let (corpus, vocab) = loader.load_corpus(split)?;
            report(&corpus, vocab.len());
            return Ok(());
        }

        let vocab_size = loader.load_vocabulary()?.len();
        for (split, result) in loader.load_all()? {
            match result {
                Ok(corpus) => report(&corpus, vocab_size),
                Err(CorpusError::ResourceUnavailable { source: None, .. }) => {
                    log::warn!("no resource configured for the {split} split; skipped");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

fn report(
    corpus: &Corpus,
    vocab_size: usize,
) {
    log::info!("{} split: {} tokens", corpus.split(), corpus.len());
    println!("{}\t{}\t{}", corpus.split(), corpus.len(), vocab_size);
}
