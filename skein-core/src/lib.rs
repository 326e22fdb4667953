//! Skein core library: a weighted, undirected, in-memory graph engine.
//!
//! Two interchangeable storage representations ([`AdjacencyListGraph`] and
//! [`AdjacencyMatrixGraph`]) implement the [`GraphStore`] mutation/query
//! contract; the [`Graph`] facade layers the algorithms on top: Dijkstra
//! shortest paths, Prim minimum spanning trees, connected-component
//! decomposition, k-way minimum spanning components, diameter and centre,
//! bounded-radius neighbourhoods, and connectivity-preserving random edge
//! pruning.

mod edge;
mod error;
mod graph;
mod store;
mod vertex;

pub use crate::{
    edge::Edge,
    error::{GraphError, GraphErrorCode},
    graph::{Graph, NO_PATH},
    store::{AdjacencyListGraph, AdjacencyMatrixGraph, GraphStore, MIN_CAPACITY},
    vertex::Vertex,
};
