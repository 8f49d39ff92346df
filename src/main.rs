mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use infra::output::{confirm_overwrite, write_document, WriteOptions, WriteOutcome};
use infra::source::open_history;
use workflows::hierarchy::{build_hierarchy, first_show, summarize};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Credentials belong to the Trakt sync step; grouping never reads them
    let settings = config::load_settings(cli.config.as_deref())?;
    if settings.has_credentials() {
        tracing::info!(username = ?settings.trakt_username, "Trakt credentials configured");
    } else {
        tracing::debug!("no Trakt credentials configured");
    }

    let rows = open_history(&cli.input)?;
    let shows = build_hierarchy(rows)
        .with_context(|| format!("Failed to group {}", cli.input.display()))?;

    let summary = summarize(&shows);
    tracing::info!(
        shows = summary.shows,
        seasons = summary.seasons,
        episodes = summary.episodes,
        "grouped watch history"
    );

    if cli.preview {
        let show = first_show(&shows)?;
        println!("{show:#?}");
    }

    let options = WriteOptions {
        pretty: cli.pretty,
        skip_confirm: cli.no_confirm,
    };
    match write_document(&shows, &cli.output, options, confirm_overwrite)? {
        WriteOutcome::Written => {
            println!(
                "Grouped {} episode(s) into {} season(s) across {} show(s)",
                summary.episodes, summary.seasons, summary.shows
            );
            println!("Wrote {}", cli.output.display());
        }
        WriteOutcome::Skipped => println!("Skipped writing {}", cli.output.display()),
    }

    Ok(())
}
