//! Unified graph facade over a storage representation.
//!
//! [`Graph`] wraps one [`GraphStore`] (adjacency-list by default) and
//! exposes the full mutation/query contract alongside the algorithmic
//! layer. Every algorithm reads the store through the trait only;
//! [`Graph::prune_random_edges`] is the sole mutating algorithm.

mod components;
mod metrics;
mod paths;
mod prune;
mod spanning;

#[cfg(test)]
mod property;

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    marker::PhantomData,
};

use rand::Rng;
use tracing::{instrument, warn};

use crate::{
    edge::Edge,
    error::GraphError,
    store::{AdjacencyListGraph, AdjacencyMatrixGraph, GraphStore},
};

pub use paths::NO_PATH;

/// A weighted undirected graph with incremental mutation and a suite of
/// correctness-critical algorithms.
///
/// # Examples
/// ```
/// use skein_core::{Edge, Graph, Vertex};
///
/// let a = Vertex::new(1, "a");
/// let b = Vertex::new(2, "b");
/// let c = Vertex::new(3, "c");
/// let mut graph = Graph::new();
/// for v in [&a, &b, &c] {
///     graph.add_vertex(v.clone());
/// }
/// graph.add_edge(Edge::with_length(a.clone(), b.clone(), 5)?);
/// graph.add_edge(Edge::with_length(b.clone(), c.clone(), 7)?);
///
/// let path = graph.shortest_path(&a, &c);
/// assert_eq!(path, vec![a, b, c]);
/// assert_eq!(graph.path_length(&path), 12);
/// # Ok::<(), skein_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, S = AdjacencyListGraph<V>> {
    store: S,
    vertex_type: PhantomData<V>,
}

impl<V: Clone + Eq + Hash> Graph<V, AdjacencyListGraph<V>> {
    /// Creates an empty adjacency-list-backed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(AdjacencyListGraph::new())
    }
}

impl<V: Clone + Eq + Hash> Default for Graph<V, AdjacencyListGraph<V>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> Graph<V, AdjacencyMatrixGraph<V>> {
    /// Creates an empty adjacency-matrix-backed graph holding at most
    /// `capacity` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityTooSmall`] when `capacity` is below
    /// the matrix minimum of 2.
    pub fn with_capacity(capacity: usize) -> Result<Self, GraphError> {
        Ok(Self::with_store(AdjacencyMatrixGraph::new(capacity)?))
    }
}

impl<V: Clone + Eq + Hash, S: GraphStore<V>> Graph<V, S> {
    /// Wraps an existing store.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            vertex_type: PhantomData,
        }
    }

    /// Returns a shared view of the wrapped store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the graph into its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Adds a vertex; `false` when already present or the store is full.
    pub fn add_vertex(&mut self, v: V) -> bool {
        self.store.add_vertex(v)
    }

    /// Returns `true` when `v` is a member of the graph.
    #[must_use]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.store.has_vertex(v)
    }

    /// Adds an edge; `false` when the pair is already connected or an
    /// endpoint is missing.
    pub fn add_edge(&mut self, e: Edge<V>) -> bool {
        self.store.add_edge(e)
    }

    /// Returns `true` when an edge equal to `e` is a member of the graph.
    #[must_use]
    pub fn has_edge(&self, e: &Edge<V>) -> bool {
        self.store.has_edge(e)
    }

    /// Returns `true` when an edge connects `v1` and `v2`.
    #[must_use]
    pub fn has_edge_between(&self, v1: &V, v2: &V) -> bool {
        self.store.has_edge_between(v1, v2)
    }

    /// Returns the length of the `v1`–`v2` edge, or `-1` when absent.
    #[must_use]
    pub fn edge_length(&self, v1: &V, v2: &V) -> i64 {
        self.store.edge_length(v1, v2)
    }

    /// Returns the sum of lengths over the deduplicated edge set.
    #[must_use]
    pub fn edge_length_sum(&self) -> i64 {
        self.store.edge_length_sum()
    }

    /// Removes the edge connecting `e`'s endpoints; `false` when absent.
    pub fn remove_edge(&mut self, e: &Edge<V>) -> bool {
        self.store.remove_edge(e)
    }

    /// Removes `v` and all incident edges; `false` when absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        self.store.remove_vertex(v)
    }

    /// Returns an owned copy of the vertex set.
    #[must_use]
    pub fn vertices(&self) -> HashSet<V> {
        self.store.vertices()
    }

    /// Returns an owned copy of the deduplicated edge set.
    #[must_use]
    pub fn edges(&self) -> HashSet<Edge<V>> {
        self.store.edges()
    }

    /// Returns an owned copy of the edges incident to `v`.
    #[must_use]
    pub fn incident_edges(&self, v: &V) -> HashSet<Edge<V>> {
        self.store.incident_edges(v)
    }

    /// Maps each direct neighbour of `v` to the connecting edge.
    #[must_use]
    pub fn neighbours(&self, v: &V) -> HashMap<V, Edge<V>> {
        self.store.neighbours(v)
    }

    /// Returns the unique edge connecting `v1` and `v2`, or `None` when the
    /// pair is not connected.
    #[must_use]
    pub fn get_edge(&self, v1: &V, v2: &V) -> Option<Edge<V>> {
        self.store
            .incident_edges(v1)
            .into_iter()
            .find(|edge| edge.connects(v1, v2))
    }

    /// Computes a shortest path from `source` to `sink`, both endpoints
    /// included.
    ///
    /// Empty when either endpoint is absent or edgeless or when no path
    /// exists; `[source]` when the endpoints coincide.
    #[must_use]
    pub fn shortest_path(&self, source: &V, sink: &V) -> Vec<V> {
        paths::shortest_path(&self.store, source, sink)
    }

    /// Sums the consecutive edge lengths along `path`.
    ///
    /// Returns [`NO_PATH`] for an empty path; a single-vertex path has
    /// length zero.
    #[must_use]
    pub fn path_length(&self, path: &[V]) -> i64 {
        paths::path_length(&self.store, path)
    }

    /// Filters the direct neighbours of `v` to those within shortest-path
    /// distance `range`.
    ///
    /// Only direct neighbours are candidates: a vertex reachable within
    /// `range` solely through multiple hops is never included, while a
    /// direct neighbour qualifies through an indirect shorter route.
    #[must_use]
    pub fn neighbours_within(&self, v: &V, range: i64) -> HashMap<V, Edge<V>> {
        let mut neighbours = self.store.neighbours(v);
        neighbours.retain(|candidate, _| {
            paths::path_length(&self.store, &paths::shortest_path(&self.store, v, candidate))
                <= range
        });
        neighbours
    }

    /// Partitions the graph into `k` connected subgraphs approximating a
    /// forest of minimum spanning trees.
    ///
    /// `None` when the graph already has more than `k` natural components.
    /// With `k = 1` the result is the minimum spanning forest; with `k`
    /// equal to the vertex count it is the singleton edgeless partition.
    #[must_use]
    #[instrument(name = "graph.minimum_spanning_components", skip(self), fields(k = k))]
    pub fn minimum_spanning_components(&self, k: usize) -> Option<Vec<Graph<V>>> {
        let partition = spanning::minimum_spanning_components(&self.store, k);
        if partition.is_none() {
            warn!(k, "graph has more natural components than requested partitions");
        }
        partition
    }

    /// Computes the length of the longest shortest path within the largest
    /// connected component. Zero for an empty graph.
    #[must_use]
    pub fn diameter(&self) -> i64 {
        metrics::diameter(&self.store)
    }

    /// Finds the vertex of minimum eccentricity within the largest
    /// connected component. `None` for an empty graph.
    #[must_use]
    pub fn centre(&self) -> Option<V> {
        metrics::centre(&self.store)
    }

    /// Removes a random selection of edges while preserving connectivity.
    ///
    /// Expects a connected graph; on a disconnected graph only the start
    /// vertex's component is pruned. Every possible random sample leaves
    /// the graph connected, because only non-spanning-tree edges are ever
    /// candidates.
    #[instrument(name = "graph.prune_random_edges", skip_all)]
    pub fn prune_random_edges<R: Rng>(&mut self, rng: &mut R) {
        prune::prune_random_edges(&mut self.store, rng);
    }
}
