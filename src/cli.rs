use clap::Parser;
use std::path::PathBuf;

use crate::infra::output::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(name = "tvtime-history")]
#[command(about = "Group a TV Time watch-history export into shows, seasons and episodes")]
pub struct Cli {
    /// TV Time seen_episode CSV export
    pub input: PathBuf,

    /// Where to write the grouped JSON document
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Config file with Trakt credentials
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Overwrite an existing output file without asking
    #[arg(long)]
    pub no_confirm: bool,

    /// Print the first grouped show
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
