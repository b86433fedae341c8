use wakachi::{CorpusLoader, Split};

/// Args for the invalidate command.
///
/// With no flags, drops every cached artifact.
#[derive(clap::Args, Debug)]
pub struct InvalidateArgs {
    /// Drop the cached encoding of this split.
    #[arg(long, default_value = None)]
    split: Option<String>,

    /// Drop the cached vocabulary and, with it, every cached encoding.
    #[arg(long)]
    vocab: bool,
}

impl InvalidateArgs {
    /// Run the invalidate command.
    pub fn run(
        &self,
        loader: &mut CorpusLoader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let split = self.split.as_deref().map(Split::parse).transpose()?;

        let removed = match split {
            Some(split) if !self.vocab => loader.invalidate_split(split)?,
            _ => loader.invalidate_vocabulary()?,
        };

        if !removed {
            log::info!("nothing cached to invalidate");
        }
        Ok(())
    }
}
