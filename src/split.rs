use rand::Rng;

use crate::data::Row;
use crate::error::{Error, Result};

/// A random train/test partition borrowing the rows of a dataset.
#[derive(Debug)]
pub struct Split<'a> {
    pub train: Vec<&'a Row>,
    pub test: Vec<&'a Row>,
}

/// Number of rows that go to the training side for a given ratio.
pub fn train_size(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).floor() as usize
}

/// Samples `floor(len * ratio)` rows without replacement into the training set;
/// whatever is left over becomes the test set.
///
/// Every draw removes from the middle of a vector, so a split costs O(n^2).
/// That is fine for the small tables this is meant for but does not scale.
pub fn split<'a, R: Rng + ?Sized>(rows: &'a [Row], ratio: f64, rng: &mut R) -> Result<Split<'a>> {
    // Also rejects NaN:
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(Error::InvalidRatio(ratio));
    }

    let size = train_size(rows.len(), ratio);
    let mut test: Vec<&Row> = rows.iter().collect();
    let mut train = Vec::with_capacity(size);
    while train.len() < size {
        let index = rng.gen_range(0..test.len());
        train.push(test.remove(index));
    }

    Ok(Split { train, test })
}
