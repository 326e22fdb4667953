//! Minimum spanning structures: Prim trees and the k-way partition.
//!
//! Heap entries index into a side pool of edges so that ordering never
//! requires `V: Ord`; ties between equal lengths resolve by pool position,
//! which is arbitrary but total.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
    hash::Hash,
};

use tracing::debug;

use crate::{
    edge::Edge,
    graph::{Graph, components::split_into_components},
    store::{AdjacencyListGraph, GraphStore},
};

/// Priority-queue entry referencing a pooled edge by slot.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
struct PooledEdge {
    length: u32,
    slot: usize,
}

/// Builds the minimum spanning tree of a single connected component using
/// Prim's algorithm.
///
/// The result keeps every component vertex (isolated vertices stay present,
/// edgeless) and contains exactly the selected tree edges.
pub(crate) fn minimum_spanning_tree<V>(component: &AdjacencyListGraph<V>) -> AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash,
{
    let vertices: Vec<V> = component.vertices().into_iter().collect();
    let mut tree = AdjacencyListGraph::new();
    for vertex in &vertices {
        tree.add_vertex(vertex.clone());
    }
    let Some(start) = vertices.first() else {
        return tree;
    };

    let target_edges = vertices.len().saturating_sub(1);
    let mut edge_count = 0_usize;
    let mut visited: HashSet<V> = HashSet::new();
    let mut pool: Vec<Edge<V>> = Vec::new();
    let mut frontier: BinaryHeap<Reverse<PooledEdge>> = BinaryHeap::new();

    settle(component, start, &mut visited, &mut pool, &mut frontier);
    while edge_count != target_edges {
        let Some(Reverse(entry)) = frontier.pop() else {
            break;
        };
        let Some(edge) = pool.get(entry.slot).cloned() else {
            continue;
        };
        // The far endpoint is whichever side is still unvisited; an edge
        // whose both ends are settled closes a cycle and is skipped.
        let next = match (visited.contains(edge.v1()), visited.contains(edge.v2())) {
            (true, false) => edge.v2().clone(),
            (false, true) => edge.v1().clone(),
            _ => continue,
        };
        tree.add_edge(edge);
        edge_count += 1;
        settle(component, &next, &mut visited, &mut pool, &mut frontier);
    }

    tree
}

/// Marks `vertex` visited and enqueues its edges towards unvisited
/// neighbours.
fn settle<V>(
    component: &AdjacencyListGraph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    pool: &mut Vec<Edge<V>>,
    frontier: &mut BinaryHeap<Reverse<PooledEdge>>,
) where
    V: Clone + Eq + Hash,
{
    visited.insert(vertex.clone());
    for (neighbour, edge) in component.neighbours(vertex) {
        if visited.contains(&neighbour) {
            continue;
        }
        frontier.push(Reverse(PooledEdge {
            length: edge.length(),
            slot: pool.len(),
        }));
        pool.push(edge);
    }
}

/// Partitions `store` into `k` connected subgraphs approximating a forest of
/// minimum spanning trees.
///
/// Returns `None` when the graph already has more than `k` natural
/// components. Otherwise builds one MST per component, pools the tree edges
/// into a descending-length priority queue, removes the longest pooled edge
/// once per missing fragment (each removal splits one tree in two), and
/// re-decomposes the fragments into the final partition.
pub(crate) fn minimum_spanning_components<V, S>(store: &S, k: usize) -> Option<Vec<Graph<V>>>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    let components = split_into_components(store);
    if components.len() > k {
        return None;
    }

    let mut fragments: Vec<AdjacencyListGraph<V>> = Vec::with_capacity(components.len());
    let mut pool: Vec<Edge<V>> = Vec::new();
    let mut longest_first: BinaryHeap<PooledEdge> = BinaryHeap::new();
    for component in components {
        if component.edges().is_empty() {
            fragments.push(component);
            continue;
        }
        let tree = minimum_spanning_tree(&component);
        for edge in tree.edges() {
            longest_first.push(PooledEdge {
                length: edge.length(),
                slot: pool.len(),
            });
            pool.push(edge);
        }
        fragments.push(tree);
    }

    let mut splits = 0_usize;
    for _ in fragments.len()..k {
        let Some(entry) = longest_first.pop() else {
            break;
        };
        let Some(head) = pool.get(entry.slot) else {
            break;
        };
        for fragment in &mut fragments {
            fragment.remove_edge(head);
        }
        splits += 1;
    }
    debug!(splits, target = k, "split spanning forest into fragments");

    let mut partition = Vec::new();
    for fragment in &fragments {
        for piece in split_into_components(fragment) {
            partition.push(Graph::with_store(piece));
        }
    }
    Some(partition)
}
