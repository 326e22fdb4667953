//! Connected-component decomposition.
//!
//! Explicit-stack depth-first traversal (recursion would risk unbounded
//! depth on long paths). Each sweep collects the vertices and edges
//! reachable from an unvisited start; sweeps repeat until every vertex is
//! claimed. The resulting component graphs partition both the vertex set
//! and the edge set of the input.

use std::{
    collections::HashSet,
    hash::Hash,
};

use crate::{
    edge::Edge,
    store::{AdjacencyListGraph, GraphStore},
};

/// Decomposes `store` into its maximal connected subgraphs.
pub(crate) fn split_into_components<V, S>(store: &S) -> Vec<AdjacencyListGraph<V>>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    let mut components = Vec::new();
    let mut visited: HashSet<V> = HashSet::new();

    for start in store.vertices() {
        if visited.contains(&start) {
            continue;
        }

        let mut component_vertices: Vec<V> = Vec::new();
        let mut component_edges: HashSet<Edge<V>> = HashSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            component_vertices.push(current.clone());
            for edge in store.incident_edges(&current) {
                if let Some(other) = edge.other_endpoint(&current) {
                    stack.push(other.clone());
                }
                component_edges.insert(edge);
            }
        }

        let mut component = AdjacencyListGraph::new();
        for vertex in component_vertices {
            component.add_vertex(vertex);
        }
        for edge in component_edges {
            component.add_edge(edge);
        }
        components.push(component);
    }

    components
}

/// Picks the component with the most vertices; ties go to the first found
/// under iteration order (implementation-defined).
pub(crate) fn largest_component<V>(
    components: Vec<AdjacencyListGraph<V>>,
) -> Option<AdjacencyListGraph<V>>
where
    V: Clone + Eq + Hash,
{
    let mut largest: Option<(usize, AdjacencyListGraph<V>)> = None;
    for component in components {
        let size = component.vertices().len();
        let replace = largest.as_ref().is_none_or(|(best, _)| size > *best);
        if replace {
            largest = Some((size, component));
        }
    }
    largest.map(|(_, component)| component)
}
