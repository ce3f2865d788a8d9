//! Genetic-algorithm search for low-cost Hamiltonian paths.
//!
//! Given a small weighted, undirected graph, evolves permutations of its
//! vertices toward a path whose summed edge weights are low:
//!
//! - **Graph**: [`graph::WeightedGraph`] — symmetric weights over any
//!   hashable vertex type, with path costing.
//! - **GA**: [`ga::GaRunner`] — population initialization, tournament
//!   selection, order-preserving segment crossover, boundary-swap mutation,
//!   elitism and convergence detection.
//!
//! The path is not closed back to its starting vertex. Results are
//! heuristic: the search may settle in a local minimum.
//!
//! # Example
//!
//! ```
//! use u_hampath::ga::{GaConfig, GaRunner};
//! use u_hampath::graph::WeightedGraph;
//!
//! let graph = WeightedGraph::from_edges([
//!     ('a', 'b', 4.0), ('a', 'c', 4.0), ('a', 'd', 7.0), ('a', 'e', 3.0),
//!     ('b', 'c', 2.0), ('b', 'd', 3.0), ('b', 'e', 5.0),
//!     ('c', 'd', 2.0), ('c', 'e', 3.0), ('d', 'e', 6.0),
//! ])?;
//!
//! let config = GaConfig::default()
//!     .with_generations(20)
//!     .with_population_size(7)
//!     .with_tournament_size(2)
//!     .with_mutation_rate(0.2)
//!     .with_elitism_rate(0.1)
//!     .with_seed(42);
//!
//! let result = GaRunner::optimize(&graph, &config)?;
//! assert!(result.best.is_permutation_of(graph.vertices()));
//! # Ok::<(), u_hampath::error::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod graph;

pub use error::{ConfigError, Error, GraphError, Result};
