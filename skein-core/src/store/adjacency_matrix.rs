//! Adjacency-matrix graph storage.
//!
//! An ordered vertex list (position = matrix index) plus a flat
//! `capacity * capacity` weight matrix. `None` cells mean "no edge"; weights
//! are stored symmetrically at `[i][j]` and `[j][i]`. Identity-to-index
//! translation is a linear scan, so incidence operations cost O(V).
//!
//! Vertex removal compacts: the vertex leaves the ordered list and every
//! higher index shifts down, keeping subsequent lookups valid.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use crate::{edge::Edge, error::GraphError, store::GraphStore};

/// Smallest admissible matrix capacity.
pub const MIN_CAPACITY: usize = 2;

/// Fixed-capacity adjacency-matrix store.
///
/// # Examples
/// ```
/// use skein_core::{AdjacencyMatrixGraph, Edge, GraphStore, Vertex};
///
/// let a = Vertex::new(1, "a");
/// let b = Vertex::new(2, "b");
/// let mut store = AdjacencyMatrixGraph::new(4)?;
/// assert!(store.add_vertex(a.clone()));
/// assert!(store.add_vertex(b.clone()));
/// assert!(store.add_edge(Edge::with_length(a.clone(), b.clone(), 3)?));
/// assert_eq!(store.edge_length(&a, &b), 3);
/// # Ok::<(), skein_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixGraph<V> {
    vertices: Vec<V>,
    weights: Vec<Option<u32>>,
    capacity: usize,
}

impl<V: Clone + Eq + Hash> AdjacencyMatrixGraph<V> {
    /// Creates an empty store holding at most `capacity` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityTooSmall`] when `capacity` is below
    /// [`MIN_CAPACITY`]; capacity violations fail construction rather than
    /// truncate.
    pub fn new(capacity: usize) -> Result<Self, GraphError> {
        if capacity < MIN_CAPACITY {
            return Err(GraphError::CapacityTooSmall { got: capacity });
        }
        Ok(Self {
            vertices: Vec::with_capacity(capacity),
            weights: vec![None; capacity.saturating_mul(capacity)],
            capacity,
        })
    }

    /// Returns the fixed vertex capacity declared at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn index_of(&self, v: &V) -> Option<usize> {
        self.vertices.iter().position(|member| member == v)
    }

    fn cell(&self, row: usize, column: usize) -> Option<u32> {
        self.weights
            .get(row.saturating_mul(self.capacity).saturating_add(column))
            .copied()
            .flatten()
    }

    fn set_cell(&mut self, row: usize, column: usize, weight: Option<u32>) {
        let forward = row.saturating_mul(self.capacity).saturating_add(column);
        let backward = column.saturating_mul(self.capacity).saturating_add(row);
        if let Some(slot) = self.weights.get_mut(forward) {
            *slot = weight;
        }
        if let Some(slot) = self.weights.get_mut(backward) {
            *slot = weight;
        }
    }

    /// Rebuilds the matrix without row/column `removed`, shifting all
    /// higher indices down by one.
    fn compact(&mut self, removed: usize) {
        let survivors = self.vertices.len();
        let mut next = vec![None; self.capacity.saturating_mul(self.capacity)];
        let old_index = |new: usize| if new < removed { new } else { new + 1 };
        for new_row in 0..survivors {
            for new_column in 0..survivors {
                let weight = self.cell(old_index(new_row), old_index(new_column));
                if let Some(slot) =
                    next.get_mut(new_row.saturating_mul(self.capacity).saturating_add(new_column))
                {
                    *slot = weight;
                }
            }
        }
        self.weights = next;
    }

    fn edge_at(&self, row: usize, column: usize) -> Option<Edge<V>> {
        let weight = self.cell(row, column)?;
        let v1 = self.vertices.get(row)?;
        let v2 = self.vertices.get(column)?;
        Some(Edge::from_known_distinct(v1.clone(), v2.clone(), weight))
    }
}

impl<V: Clone + Eq + Hash> GraphStore<V> for AdjacencyMatrixGraph<V> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.vertices.len() == self.capacity || self.index_of(&v).is_some() {
            return false;
        }
        self.vertices.push(v);
        true
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.index_of(v).is_some()
    }

    fn add_edge(&mut self, e: Edge<V>) -> bool {
        let (Some(row), Some(column)) = (self.index_of(e.v1()), self.index_of(e.v2())) else {
            return false;
        };
        if self.cell(row, column).is_some() {
            return false;
        }
        self.set_cell(row, column, Some(e.length()));
        true
    }

    fn has_edge(&self, e: &Edge<V>) -> bool {
        self.has_edge_between(e.v1(), e.v2())
    }

    fn has_edge_between(&self, v1: &V, v2: &V) -> bool {
        match (self.index_of(v1), self.index_of(v2)) {
            (Some(row), Some(column)) => self.cell(row, column).is_some(),
            _ => false,
        }
    }

    fn edge_length(&self, v1: &V, v2: &V) -> i64 {
        match (self.index_of(v1), self.index_of(v2)) {
            (Some(row), Some(column)) => self
                .cell(row, column)
                .map_or(-1, i64::from),
            _ => -1,
        }
    }

    fn edge_length_sum(&self) -> i64 {
        // The upper triangle visits each undirected edge exactly once.
        let mut sum = 0_i64;
        for row in 0..self.vertices.len() {
            for column in (row + 1)..self.vertices.len() {
                if let Some(weight) = self.cell(row, column) {
                    sum += i64::from(weight);
                }
            }
        }
        sum
    }

    fn remove_edge(&mut self, e: &Edge<V>) -> bool {
        let (Some(row), Some(column)) = (self.index_of(e.v1()), self.index_of(e.v2())) else {
            return false;
        };
        if self.cell(row, column).is_none() {
            return false;
        }
        self.set_cell(row, column, None);
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(index) = self.index_of(v) else {
            return false;
        };
        self.vertices.remove(index);
        self.compact(index);
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.iter().cloned().collect()
    }

    fn edges(&self) -> HashSet<Edge<V>> {
        let mut edges = HashSet::new();
        for row in 0..self.vertices.len() {
            for column in (row + 1)..self.vertices.len() {
                if let Some(edge) = self.edge_at(row, column) {
                    edges.insert(edge);
                }
            }
        }
        edges
    }

    fn incident_edges(&self, v: &V) -> HashSet<Edge<V>> {
        let Some(index) = self.index_of(v) else {
            return HashSet::new();
        };
        (0..self.vertices.len())
            .filter_map(|other| self.edge_at(index, other))
            .collect()
    }

    fn neighbours(&self, v: &V) -> HashMap<V, Edge<V>> {
        let Some(index) = self.index_of(v) else {
            return HashMap::new();
        };
        (0..self.vertices.len())
            .filter_map(|other| {
                let edge = self.edge_at(index, other)?;
                self.vertices
                    .get(other)
                    .map(|neighbour| (neighbour.clone(), edge))
            })
            .collect()
    }
}
