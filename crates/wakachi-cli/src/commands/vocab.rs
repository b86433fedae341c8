use wakachi::{CorpusLoader, TokenId};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Print the id of this token.
    #[arg(long, default_value = None, conflicts_with = "id")]
    lookup: Option<String>,

    /// Print the token with this id.
    #[arg(long, default_value = None)]
    id: Option<TokenId>,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(
        &self,
        loader: &mut CorpusLoader,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = loader.load_vocabulary()?;

        if let Some(token) = &self.lookup {
            let id = vocab
                .id_of(token)
                .ok_or_else(|| format!("token {token:?} is not in the vocabulary"))?;
            println!("{id}");
        } else if let Some(id) = self.id {
            let token = vocab
                .token_of(id)
                .ok_or_else(|| format!("id {id} is out of range (size {})", vocab.len()))?;
            println!("{token}");
        } else {
            println!("{}", vocab.len());
        }
        Ok(())
    }
}
