//! Route search configuration.
//!
//! [`RouteGaConfig`] holds the engine parameters (population size,
//! mutation rate, minimizing factor, seed) and the stopping rules used by
//! [`RouteRunner`](super::RouteRunner).

use super::fitness::worst_case_length;
use super::types::Coordinate;
use crate::error::GaError;

/// Configuration for the route search.
///
/// # Defaults
///
/// ```
/// use route_ga::ga::RouteGaConfig;
///
/// let config = RouteGaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.stagnation_limit, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use route_ga::ga::RouteGaConfig;
///
/// let config = RouteGaConfig::default()
///     .with_population_size(20)
///     .with_mutation_rate(0.05)
///     .with_minimizing_factor(1.1)
///     .with_max_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteGaConfig {
    /// Number of routes in every generation.
    pub population_size: usize,

    /// Per-position probability of a swap during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Divisor applied to the fitness of routes never produced before.
    ///
    /// Values above 1 lower the score of first-time routes relative to
    /// repeats; 1 makes novelty irrelevant.
    pub minimizing_factor: f64,

    /// Stop after this many generations. `None` for no cap.
    pub max_generations: Option<usize>,

    /// Stop once the best route is this many generations old.
    ///
    /// Set to 0 to disable.
    pub stagnation_limit: usize,

    /// Optional wall-clock limit in milliseconds, checked before each
    /// generation.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RouteGaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.01,
            minimizing_factor: 1.0,
            max_generations: None,
            stagnation_limit: 100,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl RouteGaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_minimizing_factor(mut self, factor: f64) -> Self {
        self.minimizing_factor = factor;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether any built-in rule will eventually end a run.
    pub fn has_stopping_condition(&self) -> bool {
        self.max_generations.is_some() || self.stagnation_limit > 0 || self.time_limit_ms.is_some()
    }

    /// Validates the engine and run parameters.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::config("population_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !self.minimizing_factor.is_finite() || self.minimizing_factor <= 0.0 {
            return Err(GaError::config(format!(
                "minimizing_factor must be a positive number, got {}",
                self.minimizing_factor
            )));
        }
        if self.time_limit_ms == Some(0) {
            return Err(GaError::config("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

/// Validates the input point set: at least two points, all finite, and
/// spread narrowly enough that the length of every route through them is a
/// finite `f64`.
pub fn validate_coordinates(coordinates: &[Coordinate]) -> Result<(), GaError> {
    if coordinates.len() < 2 {
        return Err(GaError::config(format!(
            "at least 2 coordinates are required, got {}",
            coordinates.len()
        )));
    }
    if let Some(index) = coordinates.iter().position(|c| !c.is_finite()) {
        return Err(GaError::config(format!(
            "coordinate {index} is not finite"
        )));
    }
    if !worst_case_length(coordinates).is_finite() {
        return Err(GaError::config(
            "coordinates span too wide a range: route lengths would overflow",
        ));
    }
    Ok(())
}
