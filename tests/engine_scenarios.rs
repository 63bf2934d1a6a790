//! End-to-end runs of the route engine.

use route_ga::ga::{Coordinate, Route, RouteEngine, RouteGaConfig, RouteRunner};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn unit_square() -> Vec<Coordinate> {
    [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .into_iter()
        .map(Coordinate::from)
        .collect()
}

fn ring(n: usize, radius: f64) -> Vec<Coordinate> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            Coordinate::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[test]
fn unit_square_best_never_worse_than_generation_one() {
    let config = RouteGaConfig::default()
        .with_population_size(20)
        .with_mutation_rate(0.05)
        .with_minimizing_factor(1.1)
        .with_seed(42);
    let mut engine = RouteEngine::new(&unit_square(), &config).unwrap();

    engine.advance();
    let first = engine.best_ever().total_distance();

    for _ in 1..200 {
        engine.advance();
        assert!(
            engine.best_ever().total_distance() <= first,
            "best distance {} worse than generation one {}",
            engine.best_ever().total_distance(),
            first
        );
    }
    assert_eq!(engine.generation(), 200);
    // the shortest open path around a unit square walks three sides
    assert!((engine.best_ever().total_distance() - 3.0).abs() < 1e-9);
}

#[test]
fn best_route_is_a_permutation_of_the_input() {
    let points = ring(10, 50.0);
    let config = RouteGaConfig::default()
        .with_population_size(40)
        .with_mutation_rate(0.02)
        .with_max_generations(100)
        .with_stagnation_limit(0)
        .with_seed(7);
    let result = RouteRunner::run(&points, &config).unwrap();

    assert_eq!(result.best.len(), points.len());
    for point in &points {
        assert_eq!(
            result.best.stops().iter().filter(|&&p| p == *point).count(),
            1,
            "{point:?} not visited exactly once"
        );
    }
}

#[test]
fn search_improves_on_random_routes() {
    let points = ring(12, 100.0);
    let config = RouteGaConfig::default()
        .with_population_size(60)
        .with_mutation_rate(0.02)
        .with_max_generations(300)
        .with_stagnation_limit(0)
        .with_seed(3);
    let result = RouteRunner::run(&points, &config).unwrap();

    let first = result.history.first().unwrap();
    let mean_random: f64 = {
        let mut rng = route_ga::random::create_rng(99);
        let total: f64 = (0..200)
            .map(|_| Route::shuffled(&points, &mut rng).total_distance())
            .sum();
        total / 200.0
    };
    assert!(result.best.total_distance() <= first.best_distance);
    assert!(
        result.best.total_distance() < mean_random,
        "best {} not below random mean {}",
        result.best.total_distance(),
        mean_random
    );
}

#[test]
fn threshold_run_stops_on_stagnation() {
    let config = RouteGaConfig::default()
        .with_population_size(20)
        .with_stagnation_limit(25)
        .with_seed(11);
    let result = RouteRunner::run(&unit_square(), &config).unwrap();

    assert!(result.stagnated);
    assert_eq!(result.generations - result.best_generation, 25);
    assert_eq!(result.history.len(), result.generations);
}

#[test]
fn endless_run_stops_on_cancel() {
    let config = RouteGaConfig::default()
        .with_population_size(20)
        .with_stagnation_limit(0)
        .with_seed(5);
    let cancel = Arc::new(AtomicBool::new(false));

    let cancel_clone = cancel.clone();
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(10));
        cancel_clone.store(true, Ordering::Relaxed);
    });

    let result = RouteRunner::run_with_cancel(&ring(8, 10.0), &config, Some(cancel)).unwrap();
    assert!(result.cancelled, "expected cancelled result");
}

#[test]
fn runs_are_independent() {
    let config = RouteGaConfig::default()
        .with_population_size(10)
        .with_max_generations(20)
        .with_seed(1);
    let a = RouteRunner::run(&ring(6, 5.0), &config).unwrap();
    let b = RouteRunner::run(&ring(6, 5.0), &config).unwrap();
    assert_eq!(a.best, b.best);
    assert_eq!(a.history, b.history);
}
