use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::accuracy::accuracy;
use crate::baseline;
use crate::bayes;
use crate::data::{Dataset, TargetColumn};
use crate::error::{Error, Result};
use crate::split::{split, train_size, Split};

/// Everything a run needs besides the data and the random source.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub target: TargetColumn,
    pub ratio: f64,
    pub trials: usize,
    pub domain: Vec<String>,
}

impl TrialConfig {
    /// Checks the configuration against the dataset before any trial runs and
    /// returns the resolved target column.
    pub fn validate(&self, dataset: &Dataset) -> Result<usize> {
        if !(self.ratio > 0.0 && self.ratio < 1.0) {
            return Err(Error::InvalidRatio(self.ratio));
        }
        if self.trials == 0 {
            return Err(Error::NoTrials);
        }
        if self.domain.is_empty() {
            return Err(Error::EmptyDomain);
        }
        let target = self.target.resolve(dataset.width())?;

        let train = train_size(dataset.len(), self.ratio);
        if train == 0 || train == dataset.len() {
            return Err(Error::DegenerateSplit {
                rows: dataset.len(),
                ratio: self.ratio,
            });
        }

        Ok(target)
    }
}

/// Running accuracy figures for one predictor over a fixed number of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub elapsed: Duration,
}

impl TrialStats {
    pub fn new() -> Self {
        TrialStats {
            average: 0.0,
            maximum: 0.0,
            minimum: 100.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Folds one trial's accuracy in. `trials` is the total number of trials
    /// the average is taken over.
    pub fn update(&mut self, accuracy: f64, trials: usize) {
        self.average += accuracy / trials as f64;
        if accuracy > self.maximum {
            self.maximum = accuracy;
        }
        if accuracy < self.minimum {
            self.minimum = accuracy;
        }
    }

    fn summarize(&self) -> PredictorSummary {
        PredictorSummary {
            average: round4(self.average),
            maximum: round4(self.maximum),
            minimum: round4(self.minimum),
            seconds: round4(self.elapsed.as_secs_f64()),
        }
    }
}

impl Default for TrialStats {
    fn default() -> Self {
        Self::new()
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Rounded figures for one predictor: accuracies in percent, time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorSummary {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
    pub seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub bayes: PredictorSummary,
    pub random: PredictorSummary,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, s) in [("Bayes", &self.bayes), ("Random", &self.random)] {
            writeln!(f, "{} Accuracy Average: {:.4}%", name, s.average)?;
            writeln!(f, "{} Accuracy Maximum: {:.4}%", name, s.maximum)?;
            writeln!(f, "{} Accuracy Minimum: {:.4}%", name, s.minimum)?;
            writeln!(f, "{} Accuracy Time: {:.4} seconds", name, s.seconds)?;
        }
        Ok(())
    }
}

/// Re-splits the dataset `config.trials` times and scores the naive classifier
/// and the random baseline on the same split each time.
pub fn run_trials<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &TrialConfig,
    rng: &mut R,
) -> Result<Summary> {
    let target = config.validate(dataset)?;
    log::info!(
        "running {} trials, target column {}, split ratio {}",
        config.trials,
        target,
        config.ratio
    );

    let mut bayes_stats = TrialStats::new();
    let mut random_stats = TrialStats::new();

    for trial in 0..config.trials {
        let Split { train, test } = split(dataset.rows(), config.ratio, &mut *rng)?;

        let start = Instant::now();
        let predicted = bayes::predictions(&train, &test, target);
        let bayes_accuracy = accuracy(&test, &predicted, target)?;
        bayes_stats.elapsed += start.elapsed();
        bayes_stats.update(bayes_accuracy, config.trials);

        if predicted.iter().any(Option::is_none) {
            log::warn!("trial {}: classifier left some rows without a prediction", trial);
        }

        let start = Instant::now();
        let guessed = baseline::random_predictions(&test, &config.domain, &mut *rng);
        let random_accuracy = accuracy(&test, &guessed, target)?;
        random_stats.elapsed += start.elapsed();
        random_stats.update(random_accuracy, config.trials);

        log::debug!(
            "trial {}: bayes {:.4}%, random {:.4}%",
            trial,
            bayes_accuracy,
            random_accuracy
        );
    }

    Ok(Summary {
        bayes: bayes_stats.summarize(),
        random: random_stats.summarize(),
    })
}
