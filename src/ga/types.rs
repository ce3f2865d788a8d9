//! Genome and population representation.
//!
//! A [`Genome`] is one candidate path: an ordering of every graph vertex,
//! each appearing exactly once. Operators always build new genomes and
//! never break that invariant.

use crate::graph::Vertex;
use std::collections::HashSet;
use std::ops::Deref;

/// A candidate Hamiltonian path.
///
/// Dereferences to `[V]`, so slice methods (`len`, `iter`, `windows`)
/// work directly.
///
/// ```
/// use u_hampath::ga::Genome;
///
/// let genome = Genome::new(vec!['a', 'c', 'b']);
/// assert_eq!(genome.len(), 3);
/// assert!(genome.is_permutation_of(&['a', 'b', 'c']));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Genome<V>(Vec<V>);

/// A fixed-size generation of genomes.
pub type Population<V> = Vec<Genome<V>>;

impl<V> Genome<V> {
    /// Wraps an ordering of vertices.
    pub fn new(alleles: Vec<V>) -> Self {
        Self(alleles)
    }

    /// The vertex ordering.
    pub fn alleles(&self) -> &[V] {
        &self.0
    }

    /// Unwraps into the underlying vector.
    pub fn into_inner(self) -> Vec<V> {
        self.0
    }
}

impl<V: Vertex> Genome<V> {
    /// Returns `true` if this genome contains every vertex of `vertices`
    /// exactly once and nothing else.
    pub fn is_permutation_of(&self, vertices: &[V]) -> bool {
        if self.0.len() != vertices.len() {
            return false;
        }
        let seen: HashSet<&V> = self.0.iter().collect();
        seen.len() == self.0.len() && vertices.iter().all(|v| seen.contains(v))
    }
}

impl<V> Deref for Genome<V> {
    type Target = [V];

    fn deref(&self) -> &[V] {
        &self.0
    }
}

impl<V> From<Vec<V>> for Genome<V> {
    fn from(alleles: Vec<V>) -> Self {
        Self(alleles)
    }
}

impl<V> FromIterator<V> for Genome<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns `true` if every genome equals the first one.
///
/// An empty population counts as converged.
pub fn is_converged<V: PartialEq>(population: &[Genome<V>]) -> bool {
    match population.split_first() {
        Some((first, rest)) => rest.iter().all(|g| g == first),
        None => true,
    }
}
