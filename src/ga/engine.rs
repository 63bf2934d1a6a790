//! Generation-by-generation evolution of a route population.
//!
//! [`RouteEngine`] owns one run: the population, the run-wide path history
//! and the best-route bookkeeping. Each call to [`RouteEngine::advance`]
//! breeds a complete replacement population:
//!
//! selection → crossover → mutation → scoring → replacement → ranking
//!
//! Parents are always drawn from the previous, fully ranked generation.
//! The new population is assembled separately and swapped in at the end.

use super::config::{validate_coordinates, RouteGaConfig};
use super::fitness::{fitness_score, worst_case_length, PathHistory, DEGENERATE_FITNESS};
use super::selection::roulette;
use super::types::{Coordinate, Individual, Route};
use crate::error::GaError;
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Snapshot of the engine after a generation.
///
/// One of these per generation is enough to plot best distance by
/// generation and best-ever against current-best fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,

    /// Generation in which the best-ever route was found.
    pub best_generation: usize,

    pub best_distance: f64,
    pub best_fitness: f64,

    /// Best route of this generation alone.
    pub current_best_distance: f64,
    pub current_best_fitness: f64,

    pub average_fitness: f64,
}

/// Evolution engine for one run.
///
/// # Usage
///
/// ```
/// use route_ga::ga::{Coordinate, RouteEngine, RouteGaConfig};
///
/// let points = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
/// ];
/// let config = RouteGaConfig::default().with_population_size(20).with_seed(42);
/// let mut engine = RouteEngine::new(&points, &config).unwrap();
/// for _ in 0..10 {
///     engine.advance();
/// }
/// assert_eq!(engine.generation(), 10);
/// assert_eq!(engine.best_ever().len(), 4);
/// ```
#[derive(Debug)]
pub struct RouteEngine {
    config: RouteGaConfig,
    rng: StdRng,
    generation: usize,
    population: Vec<Route>,
    best_ever: Route,
    best_generation: usize,
    current_best: Route,
    average_fitness: f64,
    history: PathHistory,
    degenerate_count: usize,
}

/// Result of one ranking pass over a freshly scored population.
struct Ranking {
    current_best: Route,
    new_best_ever: Option<Route>,
    average_fitness: f64,
}

impl RouteEngine {
    /// Creates the engine and its scored, ranked initial population.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if `config` or `coordinates` is invalid.
    pub fn new(coordinates: &[Coordinate], config: &RouteGaConfig) -> Result<Self, GaError> {
        config.validate()?;
        validate_coordinates(coordinates)?;
        if !(worst_case_length(coordinates) * config.minimizing_factor.max(1.0)).is_finite() {
            return Err(GaError::config(format!(
                "minimizing_factor {} overflows the route lengths of these coordinates",
                config.minimizing_factor
            )));
        }

        let mut rng = rng_from_seed(config.seed);
        let mut history = PathHistory::new();
        let mut degenerate_count = 0;

        // each route is registered before the next is created, so later
        // members of the first population may already be repeats
        let mut population = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let mut route = Route::shuffled(coordinates, &mut rng);
            if !score_route(&mut route, &history, config.minimizing_factor) {
                degenerate_count += 1;
            }
            history.insert(&route);
            population.push(route);
        }

        let ranking = rank_population(&mut population, None, 0.0);
        let best_ever = ranking
            .new_best_ever
            .unwrap_or_else(|| ranking.current_best.clone());

        info!(
            population_size = config.population_size,
            coordinates = coordinates.len(),
            best_distance = best_ever.total_distance(),
            "initial population ranked"
        );

        Ok(Self {
            config: config.clone(),
            rng,
            generation: 0,
            population,
            best_ever,
            best_generation: 0,
            current_best: ranking.current_best,
            average_fitness: ranking.average_fitness,
            history,
            degenerate_count,
        })
    }

    /// Breeds and ranks the next generation.
    pub fn advance(&mut self) {
        self.generation += 1;

        let mut next = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let a = roulette(&self.population, &mut self.rng);
            let b = roulette(&self.population, &mut self.rng);

            let mut child = self.population[a].clone();
            child.crossover(&self.population[b]);
            child.mutate(self.config.mutation_rate, &mut self.rng);

            if !score_route(&mut child, &self.history, self.config.minimizing_factor) {
                self.degenerate_count += 1;
            }
            self.history.insert(&child);
            next.push(child);
        }

        let ranking = rank_population(&mut next, Some(&self.best_ever), self.average_fitness);
        if let Some(best) = ranking.new_best_ever {
            info!(
                generation = self.generation,
                distance = best.total_distance(),
                fitness = best.fitness_score(),
                "new best route"
            );
            self.best_ever = best;
            self.best_generation = self.generation;
        }
        self.current_best = ranking.current_best;
        self.average_fitness = ranking.average_fitness;
        self.population = next;

        debug!(
            generation = self.generation,
            current_best_distance = self.current_best.total_distance(),
            average_fitness = self.average_fitness,
            unique_paths = self.history.len(),
            "generation advanced"
        );
    }

    pub fn config(&self) -> &RouteGaConfig {
        &self.config
    }

    /// Number of completed advances. The initial population is generation 0.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population, ascending by `fitness_percent`.
    pub fn population(&self) -> &[Route] {
        &self.population
    }

    /// Fittest route seen in this run.
    pub fn best_ever(&self) -> &Route {
        &self.best_ever
    }

    /// Generation in which [`best_ever`](Self::best_ever) was found.
    pub fn best_generation(&self) -> usize {
        self.best_generation
    }

    /// Fittest route of the current population.
    pub fn best_of_generation(&self) -> &Route {
        &self.current_best
    }

    /// Running blend of fitness scores.
    ///
    /// Each ranked route updates it as `average = (average + score) / 2`, in
    /// population order, so it weights recent routes most heavily. It is not
    /// an arithmetic mean.
    pub fn average_fitness(&self) -> f64 {
        self.average_fitness
    }

    /// Generations since the best-ever route was found.
    pub fn stagnation(&self) -> usize {
        self.generation - self.best_generation
    }

    /// Number of distinct stop sequences produced so far.
    pub fn unique_paths(&self) -> usize {
        self.history.len()
    }

    /// Number of zero-length routes that were given [`DEGENERATE_FITNESS`].
    pub fn degenerate_count(&self) -> usize {
        self.degenerate_count
    }

    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            best_generation: self.best_generation,
            best_distance: self.best_ever.total_distance(),
            best_fitness: self.best_ever.fitness_score(),
            current_best_distance: self.current_best.total_distance(),
            current_best_fitness: self.current_best.fitness_score(),
            average_fitness: self.average_fitness,
        }
    }
}

/// Scores `route` against `history`. Returns `false` when the route was
/// degenerate and received the sentinel score instead.
fn score_route(route: &mut Route, history: &PathHistory, minimizing_factor: f64) -> bool {
    let is_novel = !history.contains(route.stops());
    match fitness_score(route.total_distance(), is_novel, minimizing_factor) {
        Ok(score) => {
            route.set_fitness_score(score);
            true
        }
        Err(err) => {
            warn!(%err, "zero-length route, using sentinel fitness");
            route.set_fitness_score(DEGENERATE_FITNESS);
            false
        }
    }
}

/// Normalises fitness into percentages, collects the best routes and the
/// running average, then sorts ascending by percentage.
///
/// A route replaces `incumbent` only with a strictly greater score; with no
/// incumbent the first route is taken.
///
/// `population` must not be empty.
fn rank_population(population: &mut [Route], incumbent: Option<&Route>, average: f64) -> Ranking {
    let total: f64 = population.iter().map(Route::fitness_score).sum();

    let mut best_ever_score = incumbent.map(Route::fitness_score);
    let mut best_ever_index = None;
    let mut current_best_index = 0;
    let mut current_best_score = f64::NEG_INFINITY;
    let mut average_fitness = average;

    for (index, route) in population.iter_mut().enumerate() {
        route.set_fitness_percent(route.fitness_score() / total);
        let score = route.fitness_score();

        if best_ever_score.map_or(true, |best| score > best) {
            best_ever_score = Some(score);
            best_ever_index = Some(index);
        }
        if index == 0 || score > current_best_score {
            current_best_index = index;
            current_best_score = score;
        }
        average_fitness = (average_fitness + score) / 2.0;
    }

    let ranking = Ranking {
        current_best: population[current_best_index].clone(),
        new_best_ever: best_ever_index.map(|index| population[index].clone()),
        average_fitness,
    };

    population.sort_by(Route::cmp_by_fitness_percent);
    ranking
}
