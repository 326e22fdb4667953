//! Adjacency-list graph storage.
//!
//! Maps each vertex to the list of edges incident to it; an edge is
//! registered under both of its endpoints. Incidence lookups cost
//! O(degree); whole-graph edge queries deduplicate through the
//! pair-identity edge set.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{edge::Edge, store::GraphStore};

/// Unbounded adjacency-list store.
///
/// # Examples
/// ```
/// use skein_core::{AdjacencyListGraph, Edge, GraphStore, Vertex};
///
/// let a = Vertex::new(1, "a");
/// let b = Vertex::new(2, "b");
/// let mut store = AdjacencyListGraph::new();
/// assert!(store.add_vertex(a.clone()));
/// assert!(store.add_vertex(b.clone()));
/// assert!(store.add_edge(Edge::with_length(a.clone(), b.clone(), 5)?));
/// assert_eq!(store.edge_length(&a, &b), 5);
/// assert_eq!(store.edge_length(&b, &a), 5);
/// # Ok::<(), skein_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct AdjacencyListGraph<V> {
    incidence: HashMap<V, Vec<Edge<V>>>,
}

impl<V: Clone + Eq + Hash> AdjacencyListGraph<V> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            incidence: HashMap::new(),
        }
    }

    fn find_between(&self, v1: &V, v2: &V) -> Option<&Edge<V>> {
        self.incidence
            .get(v1)?
            .iter()
            .find(|edge| edge.connects(v1, v2))
    }
}

impl<V: Clone + Eq + Hash> GraphStore<V> for AdjacencyListGraph<V> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.incidence.contains_key(&v) {
            return false;
        }
        self.incidence.insert(v, Vec::new());
        true
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.incidence.contains_key(v)
    }

    fn add_edge(&mut self, e: Edge<V>) -> bool {
        if self.has_edge_between(e.v1(), e.v2()) {
            return false;
        }
        if !self.incidence.contains_key(e.v1()) || !self.incidence.contains_key(e.v2()) {
            return false;
        }
        let second = e.v2().clone();
        if let Some(list) = self.incidence.get_mut(e.v1()) {
            list.push(e.clone());
        }
        if let Some(list) = self.incidence.get_mut(&second) {
            list.push(e);
        }
        true
    }

    fn has_edge(&self, e: &Edge<V>) -> bool {
        self.has_edge_between(e.v1(), e.v2())
    }

    fn has_edge_between(&self, v1: &V, v2: &V) -> bool {
        self.find_between(v1, v2).is_some()
    }

    fn edge_length(&self, v1: &V, v2: &V) -> i64 {
        self.find_between(v1, v2)
            .map_or(-1, |edge| i64::from(edge.length()))
    }

    fn edge_length_sum(&self) -> i64 {
        // An edge sits in both endpoints' lists; deduplicate before summing.
        let unique: HashSet<&Edge<V>> = self.incidence.values().flatten().collect();
        unique.iter().map(|edge| i64::from(edge.length())).sum()
    }

    fn remove_edge(&mut self, e: &Edge<V>) -> bool {
        if !self.has_edge_between(e.v1(), e.v2()) {
            return false;
        }
        if let Some(list) = self.incidence.get_mut(e.v1()) {
            list.retain(|existing| existing != e);
        }
        if let Some(list) = self.incidence.get_mut(e.v2()) {
            list.retain(|existing| existing != e);
        }
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(incident) = self.incidence.get(v).cloned() else {
            return false;
        };
        for edge in &incident {
            self.remove_edge(edge);
        }
        self.incidence.remove(v);
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.incidence.keys().cloned().collect()
    }

    fn edges(&self) -> HashSet<Edge<V>> {
        self.incidence.values().flatten().cloned().collect()
    }

    fn incident_edges(&self, v: &V) -> HashSet<Edge<V>> {
        self.incidence
            .get(v)
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn neighbours(&self, v: &V) -> HashMap<V, Edge<V>> {
        let Some(list) = self.incidence.get(v) else {
            return HashMap::new();
        };
        list.iter()
            .filter_map(|edge| {
                edge.other_endpoint(v)
                    .map(|other| (other.clone(), edge.clone()))
            })
            .collect()
    }
}
