mod accuracy;
mod baseline;
mod bayes;
mod data;
mod error;
mod split;
mod trial;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use data::{Dataset, TargetColumn};
use trial::TrialConfig;

/// Compare a naive categorical classifier against random guessing over
/// repeated train/test splits.
#[derive(Parser)]
#[command(name = "bayes_trials")]
struct Args {
    /// Comma delimited dataset, one record per line.
    #[arg(default_value = "datasets/flags/flag.data")]
    path: PathBuf,

    /// Label column. Negative values count from the last column.
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    target: isize,

    /// Fraction of rows used for training in each trial.
    #[arg(long, default_value_t = 0.7)]
    ratio: f64,

    /// Number of random splits to evaluate.
    #[arg(long, default_value_t = 100)]
    trials: usize,

    /// Labels the random baseline chooses from.
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,3,4,5,6")]
    domain: Vec<String>,

    /// Seed the random source for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Treat the first record as a header row.
    #[arg(long)]
    headers: bool,

    /// Log every trial.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level).context("failed to start logger")?;

    let dataset = Dataset::from_path(&args.path, args.headers)?;
    let config = TrialConfig {
        target: TargetColumn(args.target),
        ratio: args.ratio,
        trials: args.trials,
        domain: args.domain,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = trial::run_trials(&dataset, &config, &mut rng)?;
    print!("{}", summary);

    Ok(())
}
