//! Permutation crossover and mutation operators for routes.
//!
//! Both operators work on plain slices so they can be exercised on any
//! gene type; [`Route`](super::Route) wraps them and keeps its distance in
//! step with the new order.
//!
//! # Crossover
//!
//! - [`half_and_tail_crossover`]: first half of one parent, the rest in the
//!   other parent's order. Deterministic.
//!
//! # Mutation
//!
//! - [`per_gene_swap_mutation`]: one trial per position, each successful
//!   trial swaps two random positions.

use rand::Rng;
use rustc_hash::FxHashMap;
use std::hash::Hash;

// ============================================================================
// Crossover
// ============================================================================

/// Half-and-tail crossover.
///
/// The child starts with the first `len / 2` genes of `parent_a`, in place.
/// The remaining genes are taken from `parent_b` in `parent_b`'s order,
/// skipping each gene already contributed by the prefix. Occurrences are
/// counted, so a gene that appears twice in the parents appears twice in
/// the child.
///
/// When both parents are permutations of the same multiset, so is the
/// child.
///
/// # Example
///
/// ```
/// use route_ga::ga::operators::half_and_tail_crossover;
///
/// let child = half_and_tail_crossover(&[0, 1, 2, 3], &[3, 2, 0, 1]);
/// assert_eq!(child, vec![0, 1, 3, 2]);
/// ```
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn half_and_tail_crossover<T: Copy + Eq + Hash>(parent_a: &[T], parent_b: &[T]) -> Vec<T> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    let mid = n / 2;
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent_a[..mid]);

    let mut taken: FxHashMap<T, usize> = FxHashMap::default();
    for gene in &child {
        *taken.entry(*gene).or_insert(0) += 1;
    }

    for gene in parent_b {
        match taken.get_mut(gene) {
            Some(count) if *count > 0 => *count -= 1,
            _ => child.push(*gene),
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-gene swap mutation.
///
/// Runs one trial for every position. A trial succeeds when a fresh draw
/// from `[0, 1]` is `<= mutation_rate`; it then swaps two independently
/// drawn positions (which may coincide, and need not include the trial
/// position). Returns the number of successful trials.
///
/// # Complexity
/// O(n)
pub fn per_gene_swap_mutation<T, R: Rng>(genes: &mut [T], mutation_rate: f64, rng: &mut R) -> usize {
    let n = genes.len();
    let mut swaps = 0;
    for _ in 0..n {
        if rng.random_range(0.0..=1.0) <= mutation_rate {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            genes.swap(i, j);
            swaps += 1;
        }
    }
    swaps
}

// ============================================================================
// Tests
// ============================================================================
