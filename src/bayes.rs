use std::collections::{hash_map::Entry, HashMap};

use crate::data::Row;

/// Returned for a value that never occurs in the column, so that one unseen
/// attribute does not zero out the whole product. This is not smoothing: the
/// probabilities of a column no longer sum to one.
pub const UNSEEN_PROBABILITY: f64 = 1e-10;

/// Empirical frequency of `value` among `column`.
pub fn probability<'a, I>(value: &str, column: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let (count, len) = column.into_iter().fold((0usize, 0usize), |(count, len), x| {
        if x == value {
            (count + 1, len + 1)
        } else {
            (count, len + 1)
        }
    });

    if count > 0 {
        count as f64 / len as f64
    } else {
        UNSEEN_PROBABILITY
    }
}

/// Rows grouped by their label, in the order each label was first seen.
///
/// The order matters: `predict` breaks ties in favour of the earlier label.
#[derive(Debug)]
pub struct ClassGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a Row>)>,
}

impl<'a> ClassGroups<'a> {
    pub fn new(train: &[&'a Row], target: usize) -> Self {
        let mut groups: Vec<(&'a str, Vec<&'a Row>)> = Vec::new();
        let mut index = HashMap::new();

        for &row in train {
            let label = &row[target];
            let position = match index.entry(label) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    groups.push((label, Vec::new()));
                    *entry.insert(groups.len() - 1)
                }
            };
            groups[position].1.push(row);
        }

        ClassGroups { groups }
    }

    /// Likelihood of `row` under every class, in first-seen order. There is no
    /// class prior in the product.
    pub fn class_scores(&self, row: &Row, target: usize) -> Vec<(&'a str, f64)> {
        self.groups
            .iter()
            .map(|(label, members)| {
                let width = match members.first() {
                    Some(first) => first.len(),
                    None => return (*label, 0.0),
                };

                let score = (0..width).filter(|&i| i != target).fold(1.0, |acc, i| {
                    let value = row.get(i).unwrap_or_default();
                    acc * probability(value, members.iter().map(|member| &member[i]))
                });

                (*label, score)
            })
            .collect()
    }
}

/// Predicts the label of `row` from the training rows, or `None` if there are
/// no training rows to learn from.
pub fn predict<'a>(row: &Row, train: &[&'a Row], target: usize) -> Option<&'a str> {
    let groups = ClassGroups::new(train, target);

    // First strictly greater score wins:
    let (best_label, _) = groups.class_scores(row, target).into_iter().fold(
        (None, -1.0),
        |(best_label, best_score), (label, score)| {
            if score > best_score {
                (Some(label), score)
            } else {
                (best_label, best_score)
            }
        },
    );

    best_label
}

/// Predictions for every test row, index aligned with `test`.
pub fn predictions<'a>(train: &[&'a Row], test: &[&Row], target: usize) -> Vec<Option<&'a str>> {
    test.iter().map(|row| predict(row, train, target)).collect()
}
