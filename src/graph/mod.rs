//! Weighted undirected graph.
//!
//! [`WeightedGraph`] is the cost model consulted by fitness evaluation.
//! It is built once by the caller and only read by the optimizer.
//!
//! # Key Types
//!
//! - [`Vertex`]: Bound satisfied by any usable vertex identifier
//! - [`WeightedGraph`]: Symmetric adjacency structure with path costing

mod weighted;

pub use weighted::{Vertex, WeightedGraph};
