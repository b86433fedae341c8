use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Modules whose records reach stderr; dependency chatter (hyper, reqwest) is dropped.
pub const LOGGED_MODULES: &[&str] = &["wakachi", "wakachi_disk_cache"];

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level; `default` applies when no `-v` was given.
    ///
    /// Levels count up from off: 1 is errors, 3 is info (downloads and builds),
    /// 4 adds cache hits.
    pub fn level_filter(
        &self,
        default: u8,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        let level = if let Some(verbose) = self.verbose
            && verbose > 0
        {
            verbose
        } else {
            default
        };

        match level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Initialize `stderrlog` for [`LOGGED_MODULES`].
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level_filter(default) {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .modules(LOGGED_MODULES.iter().copied())
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
