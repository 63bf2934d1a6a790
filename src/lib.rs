//! Route search over 2-D points with a genetic algorithm.
//!
//! Given a set of points, the crate looks for a short open path that visits
//! every point once:
//!
//! - **Engine**: [`ga::RouteEngine`] keeps a population of candidate
//!   orders and replaces it each generation through roulette selection,
//!   half-and-tail crossover and per-gene swap mutation.
//! - **Runner**: [`ga::RouteRunner`] advances an engine until a generation
//!   cap, stagnation limit, time limit or cancellation flag stops it, and
//!   records per-generation statistics.
//!
//! # Architecture
//!
//! The library is single-threaded and owns no global state: every run is
//! one engine value. Drawing, plotting and input capture belong to the
//! caller; the `route-ga` binary is a headless example of such a caller.

pub mod error;
pub mod ga;
pub mod points;
pub mod random;

pub use error::GaError;
