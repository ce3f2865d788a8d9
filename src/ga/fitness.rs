//! Fitness evaluation.
//!
//! Fitness is the path cost of a genome under the graph's edge weights.
//! Lower is better. Evaluation is pure and deterministic.

use super::types::Genome;
use crate::error::GraphError;
use crate::graph::{Vertex, WeightedGraph};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Path cost of a single genome.
pub fn fitness_of<V: Vertex>(
    graph: &WeightedGraph<V>,
    genome: &Genome<V>,
) -> Result<f64, GraphError> {
    graph.path_cost(genome)
}

/// Path cost of every genome, aligned by index with `population`.
///
/// Fails on the first genome that cannot be scored.
pub fn fitness_of_all<V: Vertex>(
    graph: &WeightedGraph<V>,
    population: &[Genome<V>],
) -> Result<Vec<f64>, GraphError> {
    population.iter().map(|g| fitness_of(graph, g)).collect()
}

/// Parallel variant of [`fitness_of_all`] using rayon.
#[cfg(feature = "parallel")]
pub fn par_fitness_of_all<V: Vertex>(
    graph: &WeightedGraph<V>,
    population: &[Genome<V>],
) -> Result<Vec<f64>, GraphError> {
    population.par_iter().map(|g| fitness_of(graph, g)).collect()
}

/// Evaluate the population, in parallel when requested.
#[cfg(feature = "parallel")]
pub(crate) fn evaluate_population<V: Vertex>(
    graph: &WeightedGraph<V>,
    population: &[Genome<V>],
    parallel: bool,
) -> Result<Vec<f64>, GraphError> {
    if parallel {
        par_fitness_of_all(graph, population)
    } else {
        fitness_of_all(graph, population)
    }
}

/// Evaluate the population sequentially (`parallel` feature disabled).
#[cfg(not(feature = "parallel"))]
pub(crate) fn evaluate_population<V: Vertex>(
    graph: &WeightedGraph<V>,
    population: &[Genome<V>],
    _parallel: bool,
) -> Result<Vec<f64>, GraphError> {
    fitness_of_all(graph, population)
}

/// Index of the lowest fitness (first one on ties).
///
/// # Panics
/// Panics if `fitness` is empty.
pub(crate) fn argmin(fitness: &[f64]) -> usize {
    assert!(!fitness.is_empty(), "cannot take argmin of empty fitness");
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f < fitness[best] {
            best = i;
        }
    }
    best
}
