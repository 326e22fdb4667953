//! Whole-graph distance metrics: diameter and centre.
//!
//! Both operations restrict themselves to the largest connected component
//! (ties broken by first-found under iteration order) and evaluate all
//! pairs explicitly, one Dijkstra sweep per source vertex.

use std::hash::Hash;

use crate::{
    graph::{
        components::{largest_component, split_into_components},
        paths::single_source_distances,
    },
    store::{AdjacencyListGraph, GraphStore},
};

/// Computes the length of the longest shortest path within the largest
/// component. Empty graphs have diameter zero.
pub(crate) fn diameter<V, S>(store: &S) -> i64
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    let Some(component) = largest_component(split_into_components(store)) else {
        return 0;
    };
    component
        .vertices()
        .iter()
        .map(|source| eccentricity(&component, source))
        .max()
        .unwrap_or(0)
}

/// Finds the vertex of minimum eccentricity within the largest component.
/// Ties go to the first vertex found under iteration order; an empty graph
/// has no centre.
pub(crate) fn centre<V, S>(store: &S) -> Option<V>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    let component = largest_component(split_into_components(store))?;
    let mut best: Option<(i64, V)> = None;
    for vertex in component.vertices() {
        let ecc = eccentricity(&component, &vertex);
        let replace = best.as_ref().is_none_or(|(least, _)| ecc < *least);
        if replace {
            best = Some((ecc, vertex));
        }
    }
    best.map(|(_, vertex)| vertex)
}

/// Maximum shortest-path distance from `source` to any other vertex of its
/// component. A single-vertex component has eccentricity zero.
fn eccentricity<V>(component: &AdjacencyListGraph<V>, source: &V) -> i64
where
    V: Clone + Eq + Hash,
{
    single_source_distances(component, source)
        .into_iter()
        .filter_map(|(vertex, distance)| (vertex != *source).then_some(distance))
        .max()
        .unwrap_or(0)
}
