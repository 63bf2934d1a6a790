//! Fitness scoring for routes.
//!
//! Shorter routes score higher: fitness is the inverse of the open path
//! length. Whether a route has been produced before in the current run
//! changes the score by the caller's minimizing factor:
//!
//! - novel route: `1 / (distance * minimizing_factor)`
//! - repeated route: `1 / distance`
//!
//! [`PathHistory`] is the run-wide record used for that novelty check. It
//! is never pruned.

use super::types::{Coordinate, Route};
use crate::error::GaError;
use rustc_hash::FxHashSet;

/// Upper bound on every fitness score.
///
/// Zero-length routes receive it, and any score that would exceed it (a
/// route shorter than `f64::EPSILON`) is clamped to it. It is finite, so a
/// whole population of them sums without overflow.
pub const DEGENERATE_FITNESS: f64 = 1.0 / f64::EPSILON;

/// Sum of the Euclidean distances between consecutive stops.
///
/// The path is open: there is no edge from the last stop back to the first.
pub fn path_length(stops: &[Coordinate]) -> f64 {
    stops.windows(2).map(|pair| pair[0].distance(&pair[1])).sum()
}

/// Fitness for a route of length `total_distance`.
///
/// Scores are clamped to `[0, DEGENERATE_FITNESS]`. A route too long to
/// measure (infinite or NaN length) scores 0, the minimum.
///
/// # Errors
/// [`GaError::DegenerateFitness`] when the distance is zero or negative.
pub fn fitness_score(
    total_distance: f64,
    is_novel: bool,
    minimizing_factor: f64,
) -> Result<f64, GaError> {
    if total_distance <= 0.0 {
        return Err(GaError::DegenerateFitness {
            distance: total_distance,
        });
    }
    if !total_distance.is_finite() {
        return Ok(0.0);
    }
    let score = if is_novel {
        1.0 / (total_distance * minimizing_factor)
    } else {
        1.0 / total_distance
    };
    Ok(score.min(DEGENERATE_FITNESS))
}

/// Upper bound on the length of any route through `coordinates`: every
/// edge is at most the diagonal of their bounding box.
pub fn worst_case_length(coordinates: &[Coordinate]) -> f64 {
    let Some(first) = coordinates.first() else {
        return 0.0;
    };
    let (mut min_x, mut max_x) = (first.x(), first.x());
    let (mut min_y, mut max_y) = (first.y(), first.y());
    for c in &coordinates[1..] {
        min_x = min_x.min(c.x());
        max_x = max_x.max(c.x());
        min_y = min_y.min(c.y());
        max_y = max_y.max(c.y());
    }
    let edges = coordinates.len().saturating_sub(1) as f64;
    (max_x - min_x).hypot(max_y - min_y) * edges
}

/// Every stop sequence produced so far in a run.
#[derive(Debug, Default, Clone)]
pub struct PathHistory {
    seen: FxHashSet<Vec<Coordinate>>,
}

impl PathHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `stops` has been recorded before.
    pub fn contains(&self, stops: &[Coordinate]) -> bool {
        self.seen.contains(stops)
    }

    /// Records the stop sequence of `route`. Returns `true` if it was new.
    pub fn insert(&mut self, route: &Route) -> bool {
        if self.seen.contains(route.stops()) {
            return false;
        }
        self.seen.insert(route.stops().to_vec())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
