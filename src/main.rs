//! Confsim - Main binary
//!
//! Loads a conference document, drives every track through the review
//! lifecycle (Reception → Bidding → Review → Selection), and prints a
//! per-track summary with the selected items.
//!
//! The core is synchronous and single-process: the only inputs are the
//! JSON document and the CLI/env settings, and a fixed seed reproduces a
//! run exactly.

mod config;

use clap::Parser;
use lifecycle::{ConferenceManager, RunReport, load_conference, run_to_selection};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub use config::RunConfig;

/// Conference review simulation
#[derive(Parser, Debug)]
#[command(name = "confsim")]
#[command(about = "Drive a conference's tracks from submission intake to paper selection")]
#[command(version)]
struct Args {
    /// Conference document (JSON)
    input: PathBuf,

    /// Selection threshold passed to every track's strategy
    #[arg(long, env = "CONFSIM_THRESHOLD")]
    threshold: Option<i32>,

    /// Base seed for simulated reviewers without a pinned seed
    #[arg(long, env = "CONFSIM_SEED")]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(long, env = "CONFSIM_VERBOSE")]
    verbose: bool,
}

fn build_config(args: &Args) -> RunConfig {
    let mut config = RunConfig::default();
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.verbose = args.verbose;
    config
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_report(report: &RunReport) {
    eprintln!("╔═══════════════════════════════════════════════════════╗");
    eprintln!("║  Track: {:<45} ║", truncate(&report.track, 45));
    eprintln!("╠═══════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Phase: {:<10} Items: {:>3}  Bids: {:>3}  Reviews: {:>3} ║",
        report.phase, report.items, report.bids, report.reviews
    );
    match &report.error {
        Some(error) => eprintln!("║  Failed: {:<44} ║", truncate(error, 44)),
        None => eprintln!("║  Selected: {:<42} ║", report.selected.len()),
    }
    eprintln!("╚═══════════════════════════════════════════════════════╝");

    for title in &report.selected {
        println!("{}\t{}", report.track, title);
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.len() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = build_config(&args);

    let conference = match load_conference(&args.input, config.seed) {
        Ok(conference) => conference,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Running conference '{}' ({} tracks, {} chairs, {} authors) with threshold {}",
        conference.name(),
        conference.track_count(),
        conference.chairs().len(),
        conference.authors().len(),
        config.threshold
    );

    let mut manager = ConferenceManager::new(conference);
    let reports = run_to_selection(&mut manager, config.threshold);

    let mut failed = 0usize;
    for report in &reports {
        print_report(report);
        if report.error.is_some() {
            failed += 1;
        }
    }

    eprintln!(
        "Done: {} track(s), {} failed, {} item(s) selected",
        reports.len(),
        failed,
        reports.iter().map(|r| r.selected.len()).sum::<usize>()
    );

    if failed == reports.len() && !reports.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
