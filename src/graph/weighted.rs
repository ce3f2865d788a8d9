//! Adjacency-list graph with symmetric `f64` edge weights.

use crate::error::GraphError;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Marker trait for vertex identifiers.
///
/// Any comparable, hashable, cloneable value works: `char`, `&str`,
/// `String`, integer ids, or a domain newtype. Identifiers carry no
/// meaning beyond identity.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + fmt::Debug + Send + Sync> Vertex for T {}

/// Undirected graph with non-negative edge weights.
///
/// Vertices are kept in insertion order so that [`vertices`](Self::vertices)
/// and population initialization are deterministic for a given seed.
///
/// # Examples
///
/// ```
/// use u_hampath::graph::WeightedGraph;
///
/// let graph = WeightedGraph::from_edges([('a', 'b', 4.0), ('b', 'c', 2.0), ('c', 'd', 2.0)])
///     .unwrap();
/// assert_eq!(graph.path_cost(&['a', 'b', 'c', 'd']).unwrap(), 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    // adjacency[i] holds (neighbor index, weight), in insertion order
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples, inserting each with
    /// [`add_edge`](Self::add_edge).
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Adds `v` with no edges. Does nothing if it is already present.
    pub fn add_vertex(&mut self, v: V) -> &mut Self {
        self.ensure_vertex(v);
        self
    }

    /// Sets `w(u, v) = w(v, u) = weight`, adding missing endpoints.
    ///
    /// Overwrites any previous weight for the pair. Self-loops and
    /// negative or non-finite weights are rejected.
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) -> Result<&mut Self, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        if u == v {
            return Err(GraphError::SelfLoop(format!("{u:?}")));
        }

        let ui = self.ensure_vertex(u);
        let vi = self.ensure_vertex(v);
        set_weight(&mut self.adjacency[ui], vi, weight);
        set_weight(&mut self.adjacency[vi], ui, weight);
        Ok(self)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Adjacent vertices of `v` with their edge weights, in insertion order.
    pub fn neighbors(&self, v: &V) -> Result<Vec<(&V, f64)>, GraphError> {
        let i = self.lookup(v)?;
        Ok(self.adjacency[i]
            .iter()
            .map(|&(j, w)| (&self.vertices[j], w))
            .collect())
    }

    /// Weight of the edge `u`–`v`, or `None` if either endpoint is unknown
    /// or the pair is not connected.
    pub fn weight(&self, u: &V, v: &V) -> Option<f64> {
        let ui = *self.index.get(u)?;
        let vi = *self.index.get(v)?;
        edge_weight(&self.adjacency[ui], vi)
    }

    /// Returns `true` if `v` has been added.
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of edge weights between consecutive vertices of `path`.
    ///
    /// The path is not closed back to its first vertex. Paths of length
    /// 0 or 1 cost 0.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownVertex`] if a vertex was never added
    /// - [`GraphError::MissingEdge`] if two consecutive vertices are not connected
    pub fn path_cost(&self, path: &[V]) -> Result<f64, GraphError> {
        if let [only] = path {
            self.lookup(only)?;
        }

        let mut cost = 0.0;
        for pair in path.windows(2) {
            let ui = self.lookup(&pair[0])?;
            let vi = self.lookup(&pair[1])?;
            cost += edge_weight(&self.adjacency[ui], vi).ok_or_else(|| {
                GraphError::MissingEdge {
                    from: format!("{:?}", pair[0]),
                    to: format!("{:?}", pair[1]),
                }
            })?;
        }
        Ok(cost)
    }

    fn lookup(&self, v: &V) -> Result<usize, GraphError> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{v:?}")))
    }

    fn ensure_vertex(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        i
    }
}

fn edge_weight(adjacent: &[(usize, f64)], target: usize) -> Option<f64> {
    adjacent
        .iter()
        .find(|&&(j, _)| j == target)
        .map(|&(_, w)| w)
}

fn set_weight(adjacent: &mut Vec<(usize, f64)>, target: usize, weight: f64) {
    match adjacent.iter_mut().find(|(j, _)| *j == target) {
        Some(entry) => entry.1 = weight,
        None => adjacent.push((target, weight)),
    }
}

impl<V: Vertex> fmt::Display for WeightedGraph<V> {
    /// Every adjacency entry as `(u, v, w)`, tab separated. Each undirected
    /// edge therefore appears once from each endpoint.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, adjacent) in self.adjacency.iter().enumerate() {
            for &(j, w) in adjacent {
                write!(f, "({:?}, {:?}, {})\t", self.vertices[i], self.vertices[j], w)?;
            }
        }
        Ok(())
    }
}
