//! Genetic Algorithm for low-cost Hamiltonian paths.
//!
//! Genomes are permutations of the graph's vertices; fitness is the path
//! cost under the graph's edge weights (lower is better).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (generations, population, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best genome observed, with run statistics
//! - [`Genome`] / [`Population`]: Candidate paths
//! - [`GenerationObserver`]: Per-generation progress callback
//!
//! # Operators
//!
//! - [`make_population`]: Uniform random shuffles of the vertex set
//! - [`fitness_of`] / [`fitness_of_all`]: Path-cost evaluation
//! - [`tournament_select`]: Tournament selection with replacement
//! - [`operators`]: Segment crossover and boundary-swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod observer;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
#[cfg(feature = "parallel")]
pub use fitness::par_fitness_of_all;
pub use fitness::{fitness_of, fitness_of_all};
pub use observer::{GenerationEvent, GenerationObserver, NoopObserver};
pub use operators::{crossover, mutate};
pub use population::make_population;
pub use runner::{GaResult, GaRunner};
pub use selection::{tournament_index, tournament_select};
pub use types::{is_converged, Genome, Population};
