//! Terminal front end for the job board search.

mod terminal;

use std::path::PathBuf;

use clap::Parser;

use terminal::config::{AppConfig, Overrides};
use terminal::logging::{self, LogDestination};

/// Browse and filter job postings from a job board API.
#[derive(Parser)]
#[command(name = "jobboard", version, about)]
struct Cli {
    /// RON config file (default: ./jobboard.ron when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Origin serving /api/jobs
    #[arg(long)]
    base_url: Option<String>,

    /// Jobs per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Start with the local-jobs toggle on
    #[arg(long)]
    local: bool,

    /// Raw page parameters, e.g. "local=true"
    #[arg(long, conflicts_with = "local")]
    params: Option<String>,

    /// Where log output goes
    #[arg(long, value_enum)]
    log: Option<LogDestination>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::resolve(cli.config.as_deref())?;
    config.apply(Overrides {
        base_url: cli.base_url,
        page_size: cli.page_size,
        log_destination: cli.log,
    });
    logging::initialize(config.log_destination, config.level());

    let mount_params = if cli.local {
        Some("local=true".to_string())
    } else {
        cli.params
    };
    terminal::run_app(&config, mount_params)
}
