use crate::engine::{Engine, EngineOptions, Launcher};
use crate::services::{ChromeLauncher, CsvFileWriter, ReplayLauncher, DEFAULT_OUTPUT_PATH};
use crate::types::{Roster, RunReport};
use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn, LevelFilter};
use std::path::PathBuf;

pub const DEFAULT_ROSTER_PATH: &str = "schools.json";

#[derive(Parser)]
#[command(
    name = "schoolstats",
    version,
    about = "Scrape school result pages into one CSV"
)]
pub struct Cli {
    /// JSON object mapping school names to page URLs, in visiting order
    #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
    roster: PathBuf,
    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,
    /// Run Chrome without a visible window
    #[arg(long)]
    headless: bool,
    /// Replay saved page snapshots from this directory instead of launching Chrome
    #[arg(long, value_name = "DIR")]
    replay: Option<PathBuf>,
    /// Skip the settle pauses between page actions
    #[arg(long)]
    fast: bool,
    /// Log extracted records
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roster = Roster::load(&cli.roster)
        .with_context(|| format!("failed to load roster {}", cli.roster.display()))?;

    let mut opts = EngineOptions {
        headless: cli.headless,
        ..EngineOptions::default()
    };
    if cli.fast {
        opts = opts.without_pauses();
    }

    let launcher: Box<dyn Launcher> = match &cli.replay {
        Some(dir) => Box::new(ReplayLauncher::new(dir)),
        None => Box::new(ChromeLauncher),
    };
    let writer = CsvFileWriter::new(&cli.out);
    let engine = Engine::new(&*launcher, &writer, opts);

    let runtime = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let report = runtime
        .block_on(engine.run(&roster))
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    log_report(&report)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn log_report(report: &RunReport) -> anyhow::Result<()> {
    info!(
        "Finished in {}s: {}/{} schools scraped",
        report.elapsed_secs(),
        report.scraped,
        report.attempted
    );
    if !report.failed.is_empty() {
        warn!("Failed schools: {}", report.failed.join(", "));
    }
    debug!("Run report: {}", report.to_json()?);
    Ok(())
}
