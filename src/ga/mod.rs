//! Genetic algorithm for short visiting orders over 2-D points.
//!
//! A population of candidate [`Route`]s evolves generation by generation
//! toward a shorter total path length. Each generation is bred in full from
//! the previous one.
//!
//! # Key Types
//!
//! - [`Coordinate`], [`Route`]: the input points and one candidate order
//! - [`RouteGaConfig`]: engine parameters and stopping rules
//! - [`RouteEngine`]: owns one run and advances it one generation at a time
//! - [`RouteRunner`]: drives an engine until a stopping rule fires
//!
//! # Submodules
//!
//! - [`fitness`]: inverse-distance scoring and the run-wide path history
//! - [`selection`]: roulette wheel parent selection
//! - [`operators`]: half-and-tail crossover and per-gene swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{validate_coordinates, RouteGaConfig};
pub use engine::{GenerationStats, RouteEngine};
pub use runner::{RouteResult, RouteRunner};
pub use types::{Coordinate, Individual, Route};
