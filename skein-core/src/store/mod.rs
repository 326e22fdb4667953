//! Graph storage representations behind one capability interface.
//!
//! Two interchangeable stores implement [`GraphStore`]: an adjacency-list
//! store with unbounded capacity and an adjacency-matrix store with a fixed
//! capacity declared at construction. The algorithmic layer is written
//! against the trait only and never reaches into a representation.

pub(crate) mod adjacency_list;
pub(crate) mod adjacency_matrix;

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::edge::Edge;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::{AdjacencyMatrixGraph, MIN_CAPACITY};

/// Mutation and query contract shared by every graph representation.
///
/// Expected conditions (duplicate insert, missing endpoint, missing edge)
/// are reported through boolean returns and the `-1` length sentinel; no
/// method panics or errors for them. Every returned collection is an owned
/// copy: mutating it never affects the store.
pub trait GraphStore<V: Clone + Eq + Hash> {
    /// Adds a vertex. Succeeds iff `v` is not already present (and, for
    /// bounded stores, capacity remains).
    fn add_vertex(&mut self, v: V) -> bool;

    /// Returns `true` when `v` is a member of the graph.
    fn has_vertex(&self, v: &V) -> bool;

    /// Adds an edge. Succeeds iff no edge connects the pair yet and both
    /// endpoints are members.
    fn add_edge(&mut self, e: Edge<V>) -> bool;

    /// Returns `true` when an edge equal to `e` (same unordered pair) is a
    /// member of the graph.
    fn has_edge(&self, e: &Edge<V>) -> bool;

    /// Returns `true` when an edge connects `v1` and `v2`, in either
    /// orientation.
    fn has_edge_between(&self, v1: &V, v2: &V) -> bool;

    /// Returns the length of the `v1`–`v2` edge, or `-1` when no such edge
    /// exists.
    fn edge_length(&self, v1: &V, v2: &V) -> i64;

    /// Returns the sum of lengths over the deduplicated edge set.
    fn edge_length_sum(&self) -> i64;

    /// Removes the edge connecting `e`'s endpoint pair. Returns whether a
    /// removal occurred.
    fn remove_edge(&mut self, e: &Edge<V>) -> bool;

    /// Removes `v` and every edge incident to it. Returns whether `v` was
    /// present.
    fn remove_vertex(&mut self, v: &V) -> bool;

    /// Returns an owned copy of the vertex set.
    fn vertices(&self) -> HashSet<V>;

    /// Returns an owned copy of the deduplicated edge set.
    fn edges(&self) -> HashSet<Edge<V>>;

    /// Returns an owned copy of the edges incident to `v`; empty when `v`
    /// is absent.
    fn incident_edges(&self, v: &V) -> HashSet<Edge<V>>;

    /// For every edge incident to `v`, maps the opposite endpoint to that
    /// edge. Empty when `v` is absent.
    fn neighbours(&self, v: &V) -> HashMap<V, Edge<V>>;
}
