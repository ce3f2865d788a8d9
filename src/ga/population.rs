//! Random population initialization.

use super::types::{Genome, Population};
use crate::error::{ConfigError, Error, GraphError};
use crate::graph::Vertex;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `population_size` independent uniform shuffles of `vertices`.
///
/// Genomes may repeat; no distinctness is enforced.
///
/// # Errors
///
/// - [`GraphError::Empty`] if `vertices` is empty
/// - [`ConfigError::ZeroPopulation`] if `population_size` is 0
pub fn make_population<V: Vertex, R: Rng>(
    vertices: &[V],
    population_size: usize,
    rng: &mut R,
) -> Result<Population<V>, Error> {
    if vertices.is_empty() {
        return Err(GraphError::Empty.into());
    }
    if population_size == 0 {
        return Err(ConfigError::ZeroPopulation.into());
    }

    Ok((0..population_size)
        .map(|_| {
            let mut alleles = vertices.to_vec();
            alleles.shuffle(rng);
            Genome::new(alleles)
        })
        .collect())
}
