use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("split ratio must lie strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("target column {target} is out of range for rows of width {width}")]
    TargetOutOfRange { target: isize, width: usize },

    #[error("dataset contains no rows")]
    EmptyDataset,

    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("label domain for the random baseline is empty")]
    EmptyDomain,

    #[error("number of trials must be at least 1")]
    NoTrials,

    #[error("splitting {rows} rows at ratio {ratio} leaves the train or test set empty")]
    DegenerateSplit { rows: usize, ratio: f64 },

    #[error("{test} test rows but {predictions} predictions")]
    LengthMismatch { test: usize, predictions: usize },

    #[error("cannot compute accuracy over an empty test set")]
    EmptyTestSet,
}
