//! Property tests for the route operators and the engine.

use proptest::prelude::*;
use route_ga::ga::fitness::fitness_score;
use route_ga::ga::operators::{half_and_tail_crossover, per_gene_swap_mutation};
use route_ga::ga::{Coordinate, Route, RouteEngine, RouteGaConfig};
use route_ga::random::create_rng;

fn sorted_bits(stops: &[Coordinate]) -> Vec<(u64, u64)> {
    let mut bits: Vec<(u64, u64)> = stops
        .iter()
        .map(|c| (c.x().to_bits(), c.y().to_bits()))
        .collect();
    bits.sort_unstable();
    bits
}

/// Distinct points on a small integer lattice.
fn point_set() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::hash_set((0i32..40, 0i32..40), 2..12).prop_map(|set| {
        set.into_iter()
            .map(|(x, y)| Coordinate::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

/// A base sequence and two shuffles of it.
fn parents() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    prop::collection::vec(0u32..6, 0..16).prop_flat_map(|base| {
        let a = Just(base.clone()).prop_shuffle();
        let b = Just(base).prop_shuffle();
        (a, b)
    })
}

proptest! {
    #[test]
    fn crossover_keeps_multiset((a, b) in parents()) {
        let child = half_and_tail_crossover(&a, &b);
        let mut got = child.clone();
        let mut want = a.clone();
        got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(got, want);
        prop_assert_eq!(&child[..a.len() / 2], &a[..a.len() / 2]);
    }

    #[test]
    fn mutation_keeps_multiset(
        mut genes in prop::collection::vec(any::<u16>(), 0..32),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut want = genes.clone();
        let mut rng = create_rng(seed);
        per_gene_swap_mutation(&mut genes, rate, &mut rng);
        genes.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(genes, want);
    }

    #[test]
    fn shorter_route_is_fitter(
        d1 in 0.001f64..1e6,
        d2 in 0.001f64..1e6,
        novel in any::<bool>(),
        factor in 0.1f64..10.0,
    ) {
        prop_assume!(d1 < d2);
        let f1 = fitness_score(d1, novel, factor).unwrap();
        let f2 = fitness_score(d2, novel, factor).unwrap();
        prop_assert!(f1 > f2);
    }

    #[test]
    fn novelty_scales_by_factor(d in 0.001f64..1e6, factor in 0.1f64..10.0) {
        let novel = fitness_score(d, true, factor).unwrap();
        let seen = fitness_score(d, false, factor).unwrap();
        prop_assert!((seen / novel - factor).abs() < 1e-9 * factor);
    }

    #[test]
    fn route_distance_matches_order(points in point_set(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let route = Route::shuffled(&points, &mut rng);
        let expected: f64 = route
            .stops()
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum();
        prop_assert!((route.total_distance() - expected).abs() < 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn generations_keep_permutations_and_normalisation(
        points in point_set(),
        population_size in 1usize..16,
        mutation_rate in 0.0f64..=0.5,
        factor in 0.5f64..2.0,
        seed in any::<u64>(),
    ) {
        let config = RouteGaConfig::default()
            .with_population_size(population_size)
            .with_mutation_rate(mutation_rate)
            .with_minimizing_factor(factor)
            .with_seed(seed);
        let mut engine = RouteEngine::new(&points, &config).unwrap();
        let want = sorted_bits(&points);

        for _ in 0..8 {
            prop_assert_eq!(engine.population().len(), population_size);
            for route in engine.population() {
                prop_assert_eq!(sorted_bits(route.stops()), want.clone());
            }
            let sum: f64 = engine.population().iter().map(Route::fitness_percent).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
            engine.advance();
        }
    }
}
