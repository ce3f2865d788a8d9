//! Permutation-preserving genetic operators.
//!
//! - [`crossover`]: order-preserving segment crossover, one offspring per call
//! - [`mutate`]: probabilistic transposition of a segment's two boundary alleles
//!
//! Both pick their segment with [`segment_bounds`]: a random `[low, high]`
//! with `low < high` and `high - low <= ceil(n / 2)`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::Genome;
use crate::graph::Vertex;
use rand::Rng;
use std::collections::HashSet;

/// Rejected draws tolerated before falling back to the widest span.
const MAX_SEGMENT_DRAWS: usize = 64;

// ============================================================================
// Segment sampling
// ============================================================================

/// Picks a random segment `[low, high]` within `0..n`.
///
/// `low` is uniform over `0..n-1` and `high` over `low+1..n`; draws whose
/// span exceeds `ceil(n / 2)` are redrawn. After a bounded number of
/// rejections the widest valid span starting at the last `low` is used.
///
/// Returns `None` when `n < 2`, where no segment with `low < high` exists.
pub fn segment_bounds<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    sample_segment(n, rng, MAX_SEGMENT_DRAWS)
}

fn sample_segment<R: Rng>(n: usize, rng: &mut R, max_draws: usize) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    if n == 2 {
        return Some((0, 1));
    }

    let max_span = n.div_ceil(2);
    let mut low = 0;
    for _ in 0..max_draws {
        low = rng.random_range(0..n - 1);
        let high = rng.random_range(low + 1..n);
        if high - low <= max_span {
            return Some((low, high));
        }
    }
    Some((low, (low + max_span).min(n - 1)))
}

// ============================================================================
// Crossover
// ============================================================================

/// Order-preserving segment crossover.
///
/// Copies a random segment of `parent1` in place, then fills the remaining
/// positions with the missing alleles in `parent2`'s order. Parents of
/// length 0 or 1 yield a copy of `parent1`.
///
/// # Panics
/// Panics if the parents differ in length or are not permutations of the
/// same vertex set.
pub fn crossover<V: Vertex, R: Rng>(
    parent1: &Genome<V>,
    parent2: &Genome<V>,
    rng: &mut R,
) -> Genome<V> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    match segment_bounds(parent1.len(), rng) {
        Some((low, high)) => segment_crossover(parent1, parent2, low, high),
        None => parent1.clone(),
    }
}

/// Crossover over a fixed segment `[low, high]`.
///
/// # Algorithm
///
/// 1. Copy `parent1[low..=high]` into the offspring at the same positions
/// 2. Open positions are `0..low` followed by `high+1..n`
/// 3. Walk `parent2` in order; each allele not yet in the offspring takes
///    the next open position
///
/// # Panics
/// Panics if `low > high`, `high` is out of bounds, or the parents are not
/// permutations of the same vertex set.
pub fn segment_crossover<V: Vertex>(
    parent1: &Genome<V>,
    parent2: &Genome<V>,
    low: usize,
    high: usize,
) -> Genome<V> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(low <= high && high < n, "segment [{low}, {high}] out of bounds for length {n}");

    let mut offspring: Vec<Option<V>> = vec![None; n];
    let mut placed: HashSet<&V> = HashSet::with_capacity(n);

    for i in low..=high {
        offspring[i] = Some(parent1[i].clone());
        placed.insert(&parent1[i]);
    }

    let mut open = (0..low).chain(high + 1..n);
    for allele in parent2.iter() {
        if placed.contains(allele) {
            continue;
        }
        let Some(pos) = open.next() else {
            break;
        };
        offspring[pos] = Some(allele.clone());
        placed.insert(allele);
    }

    offspring
        .into_iter()
        .map(|slot| slot.expect("parents must be permutations of the same vertices"))
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Swaps the boundary alleles of a random segment with probability
/// `mutation_rate`.
///
/// The probability is drawn once per call. Only the two alleles at `low`
/// and `high` move; the segment interior is untouched. Genomes shorter
/// than 2 are returned unchanged.
pub fn mutate<V, R: Rng>(genome: Genome<V>, mutation_rate: f64, rng: &mut R) -> Genome<V> {
    if rng.random::<f64>() >= mutation_rate {
        return genome;
    }

    match segment_bounds(genome.len(), rng) {
        Some((low, high)) => {
            let mut alleles = genome.into_inner();
            alleles.swap(low, high);
            Genome::new(alleles)
        }
        None => genome,
    }
}

// ============================================================================
// Tests
// ============================================================================
