use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use unshard::cli::{Cli, Commands};
use unshard::commands;
use unshard::domain::Share;
use unshard::screen::StatsPolicy;

fn stats_policy(float_stats: bool) -> StatsPolicy {
    if float_stats {
        StatsPolicy::FloatingPoint
    } else {
        StatsPolicy::TruncatingInteger
    }
}

fn print_anomalies(path: &Path, anomalies: &[Share]) {
    if anomalies.is_empty() {
        println!("{}: no anomalous shares", path.display());
    } else {
        let listed: Vec<String> = anomalies.iter().map(Share::to_string).collect();
        println!("{}: anomalous shares: {}", path.display(), listed.join(", "));
    }
}

/// Processes every input, reporting failures without aborting the rest
///
/// Each record is an independent unit: a malformed file is reported on stderr
/// and the remaining files are still processed.
fn for_each_input(
    inputs: &[PathBuf],
    mut process: impl FnMut(&Path) -> Result<()>,
) -> Result<()> {
    let mut failures = 0usize;
    for path in inputs {
        if let Err(error) = process(path) {
            eprintln!("{}: {error:#}", path.display());
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs failed", inputs.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recover {
            inputs,
            screen,
            float_stats,
        } => {
            let policy = screen.then(|| stats_policy(float_stats));
            for_each_input(&inputs, |path| {
                let report = commands::process_file(path, policy)?;
                if let Some(anomalies) = &report.anomalies {
                    print_anomalies(path, anomalies);
                }
                println!("{}: secret = {}", path.display(), report.secret);
                Ok(())
            })
        }
        Commands::Screen { inputs, float_stats } => {
            let policy = stats_policy(float_stats);
            for_each_input(&inputs, |path| {
                let anomalies = commands::screen_file(path, policy)?;
                print_anomalies(path, &anomalies);
                Ok(())
            })
        }
    }
}
