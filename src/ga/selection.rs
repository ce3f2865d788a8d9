//! Tournament selection.
//!
//! Contestants are drawn uniformly **with replacement**, so the same
//! genome can be drawn more than once and the tournament may be larger
//! than the population. The lowest-cost contestant wins; on ties the
//! earliest draw wins.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::fitness::fitness_of;
use super::types::Genome;
use crate::error::GraphError;
use crate::graph::{Vertex, WeightedGraph};
use rand::Rng;

/// Selects a parent by scoring sampled contestants against `graph`.
///
/// # Panics
/// Panics if `population` is empty or `tournament_size` is 0.
///
/// # Errors
/// Returns the [`GraphError`] of the first contestant that cannot be scored.
pub fn tournament_select<'a, V: Vertex, R: Rng>(
    graph: &WeightedGraph<V>,
    population: &'a [Genome<V>],
    tournament_size: usize,
    rng: &mut R,
) -> Result<&'a Genome<V>, GraphError> {
    let idx = tournament(population.len(), tournament_size, rng, |i| {
        fitness_of(graph, &population[i])
    })?;
    Ok(&population[idx])
}

/// Selects a parent index using fitness already computed for the
/// population (`fitness[i]` belongs to genome `i`).
///
/// Picks the same winner as [`tournament_select`] for the same random
/// draws, without re-scoring contestants.
///
/// # Panics
/// Panics if `fitness` is empty or `tournament_size` is 0.
pub fn tournament_index<R: Rng>(fitness: &[f64], tournament_size: usize, rng: &mut R) -> usize {
    let scored: Result<usize, std::convert::Infallible> =
        tournament(fitness.len(), tournament_size, rng, |i| Ok(fitness[i]));
    match scored {
        Ok(idx) => idx,
        Err(never) => match never {},
    }
}

fn tournament<R, E, F>(n: usize, k: usize, rng: &mut R, mut cost: F) -> Result<usize, E>
where
    R: Rng,
    F: FnMut(usize) -> Result<f64, E>,
{
    assert!(n > 0, "cannot select from empty population");
    assert!(k > 0, "tournament size must be at least 1");

    let mut best_idx = rng.random_range(0..n);
    let mut best_cost = cost(best_idx)?;
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let c = cost(idx)?;
        if c < best_cost {
            best_idx = idx;
            best_cost = c;
        }
    }
    Ok(best_idx)
}
