//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Works on a population whose `fitness_percent` values have already been
//! normalised to sum to one.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::types::Individual;
use rand::Rng;

/// Selects the index of one parent with probability equal to its
/// `fitness_percent`.
///
/// A single draw `r` in `[0, 1]` is compared against the cumulative
/// intervals `[start, start + percent]` in population order; the first
/// interval containing `r` wins. When rounding leaves `r` above the last
/// interval, the last individual is returned.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let spin: f64 = rng.random_range(0.0..=1.0);
    let mut start = 0.0;
    for (index, individual) in population.iter().enumerate() {
        let end = start + individual.fitness_percent();
        if start <= spin && spin <= end {
            return index;
        }
        start = end;
    }

    population.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        percent: f64,
    }

    impl Individual for TestInd {
        fn fitness_percent(&self) -> f64 {
            self.percent
        }
        fn set_fitness_percent(&mut self, percent: f64) {
            self.percent = percent;
        }
    }

    fn make_population(percents: &[f64]) -> Vec<TestInd> {
        percents.iter().map(|&p| TestInd { percent: p }).collect()
    }

    #[test]
    fn test_frequencies_follow_percentages() {
        let pop = make_population(&[0.2, 0.3, 0.5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        let n = 100_000;
        for _ in 0..n {
            counts[roulette(&pop, &mut rng)] += 1;
        }
        for (i, &expected) in [0.2, 0.3, 0.5].iter().enumerate() {
            let observed = counts[i] as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "index {i}: expected {expected}, observed {observed} ({counts:?})"
            );
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[1.0]);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(roulette(&pop, &mut rng), 0);
        }
    }

    #[test]
    fn test_zero_share_never_selected() {
        let pop = make_population(&[0.0, 1.0]);
        let mut rng = create_rng(7);
        // index 0 owns only the point 0.0
        let picked_first = (0..10_000)
            .filter(|_| roulette(&pop, &mut rng) == 0)
            .count();
        assert!(picked_first <= 1, "picked_first={picked_first}");
    }

    #[test]
    fn test_falls_back_to_last_when_sum_is_short() {
        // the shares sum to 0.3, so most draws land past every interval
        let pop = make_population(&[0.1, 0.1, 0.1]);
        let mut rng = create_rng(3);
        let mut counts = [0u32; 3];
        for _ in 0..1_000 {
            counts[roulette(&pop, &mut rng)] += 1;
        }
        assert!(counts[2] > counts[0] + counts[1], "counts={counts:?}");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        roulette(&pop, &mut rng);
    }
}
