mod commands;
mod corpus_source;
mod disk_cache;
mod logging;

use clap::Parser;
use commands::{Commands, load::LoadArgs};

use crate::{corpus_source::CorpusSourceArgs, disk_cache::DiskCacheArgs, logging::LogArgs};

/// wakachi: fetch, encode, and cache a whitespace-segmented corpus.
///
/// Without a subcommand, loads the train, validation, and test splits.
#[derive(clap::Parser, Debug)]
#[command(name = "wakachi", version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub disk_cache: DiskCacheArgs,

    #[command(flatten)]
    pub source: CorpusSourceArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(3)?;

    let mut loader = args.source.init_loader(&args.disk_cache)?;

    match &args.command {
        Some(command) => command.run(&mut loader),
        None => LoadArgs::default().run(&mut loader),
    }
}
