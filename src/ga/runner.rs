//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → convergence check → repeat.

use super::config::GaConfig;
use super::fitness::{argmin, evaluate_population};
use super::observer::{GenerationEvent, GenerationObserver, NoopObserver};
use super::operators::{crossover, mutate};
use super::population::make_population;
use super::selection::tournament_index;
use super::types::{is_converged, Genome, Population};
use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Result of a GA optimization run.
///
/// Contains the best genome observed across every evaluated population,
/// along with statistics about the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult<V> {
    /// The lowest-cost genome observed during the entire run.
    pub best: Genome<V>,

    /// Path cost of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because every genome became identical.
    pub converged: bool,

    /// Best fitness of each evaluated population, starting with the
    /// initial one. Has `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_hampath::ga::{GaConfig, GaRunner};
/// use u_hampath::graph::WeightedGraph;
///
/// let graph = WeightedGraph::from_edges([
///     ('a', 'b', 4.0), ('a', 'c', 4.0), ('b', 'c', 2.0),
/// ]).unwrap();
/// let config = GaConfig::default().with_generations(10).with_seed(42);
///
/// let result = GaRunner::optimize(&graph, &config).unwrap();
/// assert!(result.best.is_permutation_of(graph.vertices()));
/// assert_eq!(result.best_fitness, 6.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization from a random initial population.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`](crate::error::ConfigError) if `config` is invalid,
    ///   before any generation runs
    /// - [`GraphError`](crate::error::GraphError) if the graph is empty or a
    ///   genome cannot be scored
    pub fn optimize<V: Vertex>(graph: &WeightedGraph<V>, config: &GaConfig) -> Result<GaResult<V>> {
        Self::optimize_with_observer(graph, config, &mut NoopObserver)
    }

    /// Runs the optimization, reporting each generation to `observer`.
    pub fn optimize_with_observer<V: Vertex, O: GenerationObserver<V>>(
        graph: &WeightedGraph<V>,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult<V>> {
        config.validate()?;

        let mut rng = create_rng(config.seed);
        let population = make_population(graph.vertices(), config.population_size, &mut rng)?;

        Self::evolve(graph, config, population, &mut rng, observer)
    }

    /// Runs the optimization from a caller-supplied initial population.
    ///
    /// # Panics
    /// Panics if `population` does not hold exactly
    /// `config.population_size` genomes, each a permutation of the graph's
    /// vertices.
    pub fn optimize_from_population<V: Vertex, O: GenerationObserver<V>>(
        graph: &WeightedGraph<V>,
        config: &GaConfig,
        population: Population<V>,
        observer: &mut O,
    ) -> Result<GaResult<V>> {
        config.validate()?;
        assert_eq!(
            population.len(),
            config.population_size,
            "initial population size must match config"
        );
        assert!(
            population.iter().all(|g| g.is_permutation_of(graph.vertices())),
            "initial population must contain permutations of the graph vertices"
        );

        let mut rng = create_rng(config.seed);
        Self::evolve(graph, config, population, &mut rng, observer)
    }

    fn evolve<V: Vertex, R: Rng, O: GenerationObserver<V>>(
        graph: &WeightedGraph<V>,
        config: &GaConfig,
        mut population: Population<V>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<GaResult<V>> {
        let elite_count = config.elitism_count();
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            generations = config.generations,
            population = config.population_size,
            elites = elite_count,
            "optimizing path"
        );

        let mut fitness = evaluate_population(graph, &population, config.parallel)?;
        let mut current_best = argmin(&fitness);
        let mut best = population[current_best].clone();
        let mut best_fitness = fitness[current_best];

        // Grows with the generations actually run; the budget may be huge
        let mut fitness_history = vec![best_fitness];

        let mut generations = 0usize;
        let mut converged = false;

        for gen in 1..=config.generations {
            observer.on_generation(&GenerationEvent {
                generation: gen,
                population: &population,
                fitness: &fitness,
                current_best,
            });
            debug!(
                generation = gen,
                current_best = fitness[current_best],
                best_so_far = best_fitness,
                "generation evaluated"
            );

            population = reproduce(&population, &fitness, elite_count, config, rng);
            generations = gen;

            fitness = evaluate_population(graph, &population, config.parallel)?;
            current_best = argmin(&fitness);
            if fitness[current_best] < best_fitness {
                best = population[current_best].clone();
                best_fitness = fitness[current_best];
            }
            fitness_history.push(fitness[current_best]);

            if is_converged(&population) {
                converged = true;
                info!(generation = gen, "population converged");
                break;
            }
        }

        info!(
            generations,
            converged,
            best_fitness,
            best = ?best,
            "optimization finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            converged,
            fitness_history,
        })
    }
}

/// Builds the next population: elites first, then mutated offspring.
fn reproduce<V: Vertex, R: Rng>(
    population: &[Genome<V>],
    fitness: &[f64],
    elite_count: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Population<V> {
    let size = population.len();

    // Stable sort: equal fitness keeps population order
    let mut ranked: Vec<usize> = (0..size).collect();
    ranked.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

    let mut next: Population<V> = Vec::with_capacity(size);
    next.extend(ranked[..elite_count].iter().map(|&i| population[i].clone()));

    let offspring: Vec<Genome<V>> = (elite_count..size)
        .map(|_| {
            let p1 = tournament_index(fitness, config.tournament_size, rng);
            let p2 = tournament_index(fitness, config.tournament_size, rng);
            crossover(&population[p1], &population[p2], rng)
        })
        .collect();
    trace!(elites = elite_count, offspring = offspring.len(), "reproduced");

    next.extend(
        offspring
            .into_iter()
            .map(|child| mutate(child, config.mutation_rate, rng)),
    );

    debug_assert!(
        next.iter().all(|g| g.is_permutation_of(&population[0])),
        "reproduction broke the permutation invariant"
    );
    next
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error, GraphError};

    fn five_vertex_graph() -> WeightedGraph<char> {
        WeightedGraph::from_edges([
            ('a', 'b', 4.0),
            ('a', 'c', 4.0),
            ('a', 'd', 7.0),
            ('a', 'e', 3.0),
            ('b', 'c', 2.0),
            ('b', 'd', 3.0),
            ('b', 'e', 5.0),
            ('c', 'd', 2.0),
            ('c', 'e', 3.0),
            ('d', 'e', 6.0),
        ])
        .unwrap()
    }

    fn scenario_config() -> GaConfig {
        GaConfig::default()
            .with_generations(20)
            .with_population_size(7)
            .with_tournament_size(2)
            .with_mutation_rate(0.2)
            .with_elitism_rate(0.1)
    }

    /// Collects every event's best fitness and worst fitness.
    #[derive(Default)]
    struct Recorder {
        generations: Vec<usize>,
        best: Vec<f64>,
        worst: Vec<f64>,
    }

    impl<V> GenerationObserver<V> for Recorder {
        fn on_generation(&mut self, event: &GenerationEvent<'_, V>) {
            assert_eq!(event.population.len(), event.fitness.len());
            for &f in event.fitness {
                assert!(event.best_fitness() <= f);
            }
            self.generations.push(event.generation);
            self.best.push(event.best_fitness());
            self.worst
                .push(event.fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let graph = five_vertex_graph();
        assert_eq!(scenario_config().elitism_count(), 1);

        for seed in 0..20 {
            let config = scenario_config().with_seed(seed);
            let mut recorder = Recorder::default();
            let result = GaRunner::optimize_with_observer(&graph, &config, &mut recorder).unwrap();

            assert!(result.best.is_permutation_of(graph.vertices()));
            assert!(
                result.best_fitness <= recorder.worst[0],
                "best {} worse than initial worst {}",
                result.best_fitness,
                recorder.worst[0]
            );
            // No Hamiltonian path in this graph costs less than 11
            assert!(result.best_fitness >= 11.0);
        }
    }

    #[test]
    fn test_best_fitness_matches_best_genome() {
        let graph = five_vertex_graph();
        for seed in 0..20 {
            let config = scenario_config().with_seed(seed);
            let result = GaRunner::optimize(&graph, &config).unwrap();
            let cost = graph.path_cost(&result.best).unwrap();
            assert!((cost - result.best_fitness).abs() < 1e-12);

            let min_history = result
                .fitness_history
                .iter()
                .cloned()
                .fold(f64::INFINITY, f64::min);
            assert!((min_history - result.best_fitness).abs() < 1e-12);
        }
    }

    #[test]
    fn test_elitism_monotonic() {
        let graph = five_vertex_graph();
        for seed in 0..20 {
            let config = scenario_config()
                .with_generations(50)
                .with_mutation_rate(0.5)
                .with_seed(seed);
            let result = GaRunner::optimize(&graph, &config).unwrap();

            assert_eq!(result.fitness_history.len(), result.generations + 1);
            for window in result.fitness_history.windows(2) {
                assert!(
                    window[1] <= window[0],
                    "fitness should be non-increasing with elitism: {} > {}",
                    window[1],
                    window[0]
                );
            }
        }
    }

    #[test]
    fn test_convergence_stops_early() {
        let graph = five_vertex_graph();
        let genome = Genome::new(vec!['c', 'a', 'e', 'b', 'd']);
        let config = GaConfig::default()
            .with_generations(100)
            .with_population_size(6)
            .with_mutation_rate(0.0)
            .with_seed(7);

        let population = vec![genome.clone(); 6];
        let mut recorder = Recorder::default();
        let result =
            GaRunner::optimize_from_population(&graph, &config, population, &mut recorder).unwrap();

        assert!(result.converged);
        assert!(result.generations < config.generations);
        assert_eq!(result.generations, 1);
        assert_eq!(recorder.generations, vec![1]);
        assert_eq!(result.best, genome);
        assert_eq!(result.best_fitness, graph.path_cost(&genome).unwrap());
    }

    #[test]
    fn test_runs_all_generations_without_convergence() {
        let graph = five_vertex_graph();
        let config = GaConfig::default()
            .with_generations(15)
            .with_population_size(30)
            .with_mutation_rate(1.0)
            .with_elitism_rate(0.0)
            .with_seed(3);
        let mut recorder = Recorder::default();
        let result = GaRunner::optimize_with_observer(&graph, &config, &mut recorder).unwrap();

        assert!(!result.converged, "fully mutated offspring should not collapse");
        assert_eq!(result.generations, 15);
        assert_eq!(result.fitness_history.len(), 16);
        assert_eq!(recorder.generations, (1..=15).collect::<Vec<_>>());
        assert_eq!(recorder.best, result.fitness_history[..15]);
    }

    #[test]
    fn test_unbounded_generation_budget_converges() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex('a');
        for generations in [usize::MAX, 1 << 40] {
            let config = GaConfig::default()
                .with_generations(generations)
                .with_population_size(1)
                .with_seed(9);
            let result = GaRunner::optimize(&graph, &config).unwrap();
            assert!(result.converged);
            assert_eq!(result.generations, 1);
            assert_eq!(result.fitness_history, vec![0.0, 0.0]);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let graph = five_vertex_graph();
        let config = scenario_config().with_seed(42);
        let a = GaRunner::optimize(&graph, &config).unwrap();
        let b = GaRunner::optimize(&graph, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_elitism_rate_rejected_before_run() {
        let graph = five_vertex_graph();
        for population_size in [1, 7, 50] {
            let config = scenario_config()
                .with_population_size(population_size)
                .with_elitism_rate(1.5);
            let mut recorder = Recorder::default();
            let err = GaRunner::optimize_with_observer(&graph, &config, &mut recorder).unwrap_err();
            assert!(matches!(
                err,
                Error::Config(ConfigError::ElitismRateOutOfRange(_))
            ));
            assert!(recorder.generations.is_empty());
        }
    }

    #[test]
    fn test_empty_graph_rejected() {
        let graph: WeightedGraph<char> = WeightedGraph::new();
        let err = GaRunner::optimize(&graph, &GaConfig::default()).unwrap_err();
        assert_eq!(err, Error::Graph(GraphError::Empty));
    }

    #[test]
    fn test_missing_edge_is_fatal() {
        let mut graph = WeightedGraph::from_edges([('a', 'b', 1.0)]).unwrap();
        graph.add_vertex('c');
        let err = GaRunner::optimize(&graph, &scenario_config().with_seed(1)).unwrap_err();
        assert!(matches!(err, Error::Graph(GraphError::MissingEdge { .. })));
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("hub");
        let result = GaRunner::optimize(&graph, &scenario_config().with_seed(5)).unwrap();
        assert_eq!(result.best, Genome::new(vec!["hub"]));
        assert_eq!(result.best_fitness, 0.0);
        assert!(result.converged);
    }

    #[test]
    fn test_full_elitism_keeps_population() {
        let graph = five_vertex_graph();
        let config = scenario_config()
            .with_generations(5)
            .with_elitism_rate(1.0)
            .with_seed(11);
        let result = GaRunner::optimize(&graph, &config).unwrap();
        // No offspring: every generation re-ranks the same genomes
        assert!(result.fitness_history.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_improves_on_chain_graph() {
        // Path 0-1-2-...-7 costs 7; every other edge costs 10
        let n = 8u32;
        let mut graph = WeightedGraph::new();
        for u in 0..n {
            for v in (u + 1)..n {
                let w = if v == u + 1 { 1.0 } else { 10.0 };
                graph.add_edge(u, v, w).unwrap();
            }
        }
        let config = GaConfig::default()
            .with_generations(300)
            .with_population_size(60)
            .with_tournament_size(3)
            .with_mutation_rate(0.3)
            .with_elitism_rate(0.05)
            .with_seed(42);

        let result = GaRunner::optimize(&graph, &config).unwrap();
        assert!(result.best.is_permutation_of(graph.vertices()));
        assert!(
            result.best_fitness <= 34.0,
            "expected at most three expensive edges, got {}",
            result.best_fitness
        );
    }
}
