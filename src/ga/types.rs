//! Core data types: points on the plane and candidate routes over them.
//!
//! A [`Route`] is one individual of the population. It carries its
//! visiting order together with the scores the engine assigns to it.
//! [`Individual`] is the seam selection works against.

use super::fitness::path_length;
use super::operators::{half_and_tail_crossover, per_gene_swap_mutation};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An immutable point on the plane.
///
/// `-0.0` is stored as `0.0`, so equality and hashing agree on the
/// bit patterns of the stored values.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Coordinate {
    x: f64,
    y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x + 0.0,
            y: y + 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

/// A member of a scored population.
///
/// Roulette selection only needs the normalised share of each member.
pub trait Individual: Clone {
    /// Share of the population's total fitness held by this individual.
    fn fitness_percent(&self) -> f64;

    fn set_fitness_percent(&mut self, percent: f64);
}

/// One candidate route: every input coordinate, visited once, in order.
///
/// `total_distance` always matches `stops`. The fitness fields are reset
/// whenever the stops change and are only meaningful once the engine has
/// scored the route (and, for `fitness_percent`, its whole population).
///
/// Two routes are equal when their stop sequences are equal; scores are
/// ignored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<Coordinate>,
    total_distance: f64,
    fitness_score: f64,
    fitness_percent: f64,
}

impl Route {
    /// Creates an unscored route visiting `stops` in the given order.
    pub fn new(stops: Vec<Coordinate>) -> Self {
        let total_distance = path_length(&stops);
        Self {
            stops,
            total_distance,
            fitness_score: 0.0,
            fitness_percent: 0.0,
        }
    }

    /// Creates an unscored route visiting `source` in a random order.
    pub fn shuffled<R: Rng>(source: &[Coordinate], rng: &mut R) -> Self {
        let mut stops = source.to_vec();
        stops.shuffle(rng);
        Self::new(stops)
    }

    pub fn stops(&self) -> &[Coordinate] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Length of the open path through all stops (no closing edge).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn fitness_score(&self) -> f64 {
        self.fitness_score
    }

    pub fn fitness_percent(&self) -> f64 {
        self.fitness_percent
    }

    /// Consecutive pairs of stops, i.e. the segments a renderer draws.
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.stops.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Ascending order by `fitness_percent`.
    pub fn cmp_by_fitness_percent(&self, other: &Route) -> Ordering {
        self.fitness_percent.total_cmp(&other.fitness_percent)
    }

    /// Replaces this route with its half-and-tail child with `other`.
    ///
    /// See [`half_and_tail_crossover`].
    pub fn crossover(&mut self, other: &Route) {
        let child = half_and_tail_crossover(&self.stops, &other.stops);
        self.replace_stops(child);
    }

    /// Applies one per-gene swap mutation pass and returns the number of
    /// swaps performed.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) -> usize {
        let swaps = per_gene_swap_mutation(&mut self.stops, mutation_rate, rng);
        if swaps > 0 {
            self.total_distance = path_length(&self.stops);
            self.clear_scores();
        }
        swaps
    }

    pub(crate) fn set_fitness_score(&mut self, score: f64) {
        self.fitness_score = score;
    }

    fn replace_stops(&mut self, stops: Vec<Coordinate>) {
        self.total_distance = path_length(&stops);
        self.stops = stops;
        self.clear_scores();
    }

    fn clear_scores(&mut self) {
        self.fitness_score = 0.0;
        self.fitness_percent = 0.0;
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.stops == other.stops
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stops.hash(state);
    }
}

impl Individual for Route {
    fn fitness_percent(&self) -> f64 {
        self.fitness_percent
    }

    fn set_fitness_percent(&mut self, percent: f64) {
        self.fitness_percent = percent;
    }
}
