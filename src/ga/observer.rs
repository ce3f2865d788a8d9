//! Per-generation progress reporting.
//!
//! Observers receive a read-only snapshot after each generation is
//! evaluated. They have no influence on control flow.

use super::types::Genome;

/// Snapshot of one evaluated generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationEvent<'a, V> {
    /// 1-based generation number.
    pub generation: usize,

    /// The population evaluated in this generation.
    pub population: &'a [Genome<V>],

    /// Fitness of each genome, aligned by index with `population`.
    pub fitness: &'a [f64],

    /// Index of the lowest-cost genome (first one on ties).
    pub current_best: usize,
}

impl<'a, V> GenerationEvent<'a, V> {
    /// The lowest-cost genome of this generation.
    pub fn best_genome(&self) -> &'a Genome<V> {
        &self.population[self.current_best]
    }

    /// Fitness of [`best_genome`](Self::best_genome).
    pub fn best_fitness(&self) -> f64 {
        self.fitness[self.current_best]
    }
}

/// Receives a [`GenerationEvent`] once per generation.
///
/// Implemented for any `FnMut(&GenerationEvent<V>)` closure.
pub trait GenerationObserver<V> {
    fn on_generation(&mut self, event: &GenerationEvent<'_, V>);
}

impl<V, F> GenerationObserver<V> for F
where
    F: FnMut(&GenerationEvent<'_, V>),
{
    fn on_generation(&mut self, event: &GenerationEvent<'_, V>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<V> GenerationObserver<V> for NoopObserver {
    fn on_generation(&mut self, _event: &GenerationEvent<'_, V>) {}
}
