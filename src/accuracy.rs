use crate::data::Row;
use crate::error::{Error, Result};

/// Percentage of test rows whose label in `target` equals the prediction at the
/// same index. A missing prediction is always wrong.
pub fn accuracy(test: &[&Row], predictions: &[Option<&str>], target: usize) -> Result<f64> {
    if test.len() != predictions.len() {
        return Err(Error::LengthMismatch {
            test: test.len(),
            predictions: predictions.len(),
        });
    }
    if test.is_empty() {
        return Err(Error::EmptyTestSet);
    }

    let correct = test
        .iter()
        .zip(predictions)
        .filter(|(row, predicted)| row.get(target) == **predicted)
        .count();

    Ok(correct as f64 / test.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::rows;

    #[test]
    fn perfect_predictions_score_one_hundred() {
        let data = rows(&[&["a", "0"], &["b", "1"], &["c", "0"]]);
        let test: Vec<&Row> = data.iter().collect();
        let labels: Vec<Option<&str>> = test.iter().map(|r| r.get(1)).collect();
        assert_eq!(accuracy(&test, &labels, 1), Ok(100.0));
    }

    #[test]
    fn counts_exact_matches_only() {
        let data = rows(&[&["a", "0"], &["b", "1"], &["c", "0"], &["d", "1"]]);
        let test: Vec<&Row> = data.iter().collect();
        let predicted = [Some("0"), Some("0"), None, Some("1")];
        assert_eq!(accuracy(&test, &predicted, 1), Ok(50.0));

        let wrong = [Some("1"), Some("0"), Some("1"), Some("0 ")];
        assert_eq!(accuracy(&test, &wrong, 1), Ok(0.0));
    }

    #[test]
    fn lengths_must_agree() {
        let data = rows(&[&["a", "0"], &["b", "1"]]);
        let test: Vec<&Row> = data.iter().collect();
        assert_eq!(
            accuracy(&test, &[Some("0")], 1),
            Err(Error::LengthMismatch {
                test: 2,
                predictions: 1
            })
        );
        assert_eq!(accuracy(&[], &[], 1), Err(Error::EmptyTestSet));
    }
}
