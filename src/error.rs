//! Error types.
//!
//! Every failure is reported synchronously and aborts the current
//! optimization run. There is no recovery inside a generation.

use thiserror::Error;

/// Invalid optimizer configuration.
///
/// Raised by [`GaConfig::validate`](crate::ga::GaConfig::validate) before
/// the first generation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("population_size must be at least 1")]
    ZeroPopulation,

    #[error("tournament_size must be at least 1")]
    ZeroTournament,

    #[error("mutation_rate must be in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("elitism_rate must be in [0, 1], got {0}")]
    ElitismRateOutOfRange(f64),

    #[error("elitism count {elites} exceeds population size {population}")]
    ElitismExceedsPopulation { elites: usize, population: usize },
}

/// Failures of the weighted graph cost model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A vertex was referenced that was never added to the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Two consecutive path vertices have no declared edge.
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: String, to: String },

    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("self-loop on vertex {0}")]
    SelfLoop(String),

    #[error("graph has no vertices")]
    Empty,
}

/// Crate-level error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
