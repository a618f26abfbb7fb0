use rand::{seq::SliceRandom, Rng};

use crate::data::Row;

/// Guesses a label for every test row by drawing uniformly from `domain`,
/// without looking at the row. An empty domain yields no predictions.
pub fn random_predictions<'d, R: Rng + ?Sized>(
    test: &[&Row],
    domain: &'d [String],
    rng: &mut R,
) -> Vec<Option<&'d str>> {
    test.iter()
        .map(|_| domain.choose(&mut *rng).map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::rows;
    use rand::{rngs::StdRng, SeedableRng};

    fn domain() -> Vec<String> {
        (0..7).map(|class| class.to_string()).collect()
    }

    #[test]
    fn one_prediction_per_row_from_the_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let data = rows(&[&["a", "9"], &["b", "9"], &["c", "9"]]);
        let test: Vec<&Row> = data.iter().collect();
        let domain = domain();

        let predicted = random_predictions(&test, &domain, &mut rng);
        assert_eq!(predicted.len(), 3);
        assert!(predicted
            .iter()
            .all(|p| domain.iter().any(|d| Some(d.as_str()) == *p)));
    }

    #[test]
    fn draws_are_close_to_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = rows(&[&["x", "0"]]);
        let test: Vec<&Row> = std::iter::repeat(&data[0]).take(70_000).collect();
        let domain = domain();

        let predicted = random_predictions(&test, &domain, &mut rng);
        for label in &domain {
            let share = predicted
                .iter()
                .filter(|p| **p == Some(label.as_str()))
                .count() as f64
                / predicted.len() as f64;
            assert!((share - 1.0 / 7.0).abs() < 0.01, "{} drawn {}", label, share);
        }
    }

    #[test]
    fn empty_domain_predicts_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let data = rows(&[&["x", "0"]]);
        let test: Vec<&Row> = data.iter().collect();
        assert_eq!(random_predictions(&test, &[], &mut rng), vec![None]);
    }
}
