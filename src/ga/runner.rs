//! Run loop around [`RouteEngine`].
//!
//! [`RouteRunner`] creates an engine and advances it until one of the
//! configured stopping rules fires: generation cap, stagnation limit,
//! wall-clock limit or an external cancellation flag. The engine itself
//! never stops on its own.

use super::config::RouteGaConfig;
use super::engine::{GenerationStats, RouteEngine};
use super::types::{Coordinate, Route};
use crate::error::GaError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Result of a route search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// The best route found during the entire run.
    pub best: Route,

    /// Generation in which `best` was found.
    pub best_generation: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because the best route stopped improving.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the wall-clock limit was reached.
    pub timed_out: bool,

    /// Statistics after each generation (generation 1 onwards).
    pub history: Vec<GenerationStats>,
}

/// Executes the route search loop.
///
/// # Usage
///
/// ```
/// use route_ga::ga::{Coordinate, RouteGaConfig, RouteRunner};
///
/// let points: Vec<Coordinate> = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]
///     .into_iter()
///     .map(Coordinate::from)
///     .collect();
/// let config = RouteGaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = RouteRunner::run(&points, &config).unwrap();
/// assert!(result.generations <= 50);
/// assert_eq!(result.history.len(), result.generations);
/// ```
pub struct RouteRunner;

impl RouteRunner {
    /// Runs the search until a configured stopping rule fires.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if the configuration or coordinates are
    /// invalid, or if no stopping rule is configured.
    pub fn run(coordinates: &[Coordinate], config: &RouteGaConfig) -> Result<RouteResult, GaError> {
        Self::run_with_cancel(coordinates, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best route so far. With a
    /// token, a configuration without any other stopping rule is accepted.
    pub fn run_with_cancel(
        coordinates: &[Coordinate],
        config: &RouteGaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RouteResult, GaError> {
        Self::run_with_observer(coordinates, config, cancel, |_, _| {})
    }

    /// Runs the search, calling `observer` after every generation.
    ///
    /// The observer sees the engine (for the current routes) and the
    /// statistics just recorded. It is the hook for live display.
    pub fn run_with_observer<F>(
        coordinates: &[Coordinate],
        config: &RouteGaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<RouteResult, GaError>
    where
        F: FnMut(&RouteEngine, &GenerationStats),
    {
        if cancel.is_none() && !config.has_stopping_condition() {
            return Err(GaError::config(
                "no stopping condition: set max_generations, stagnation_limit, time_limit_ms or pass a cancel flag",
            ));
        }

        let mut engine = RouteEngine::new(coordinates, config)?;
        let started = Instant::now();

        let mut history = Vec::new();
        let mut stagnated = false;
        let mut cancelled = false;
        let mut timed_out = false;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(max) = config.max_generations {
                if engine.generation() >= max {
                    break;
                }
            }
            if config.stagnation_limit > 0 && engine.stagnation() >= config.stagnation_limit {
                stagnated = true;
                break;
            }
            if let Some(ms) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(ms) {
                    timed_out = true;
                    break;
                }
            }

            engine.advance();
            let stats = engine.stats();
            observer(&engine, &stats);
            history.push(stats);
        }

        info!(
            generations = engine.generation(),
            best_generation = engine.best_generation(),
            best_distance = engine.best_ever().total_distance(),
            stagnated,
            cancelled,
            timed_out,
            "route search finished"
        );

        Ok(RouteResult {
            best: engine.best_ever().clone(),
            best_generation: engine.best_generation(),
            generations: engine.generation(),
            stagnated,
            cancelled,
            timed_out,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
