pub mod invalidate;
pub mod load;
pub mod vocab;

use wakachi::CorpusLoader;

/// Subcommands for wakachi
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load splits, building and caching whatever is missing.
    Load(load::LoadArgs),

    /// Inspect the vocabulary.
    Vocab(vocab::VocabArgs),

    /// Drop cached artifacts.
    Invalidate(invalidate::InvalidateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(
        &self,
        loader: &mut CorpusLoader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Load(cmd) => cmd.run(loader),
            Commands::Vocab(cmd) => cmd.run(loader),
            Commands::Invalidate(cmd) => cmd.run(loader),
        }
    }
}
