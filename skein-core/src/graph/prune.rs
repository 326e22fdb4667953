//! Connectivity-preserving random edge pruning.
//!
//! A depth-first sweep classifies edges into spanning-tree edges (kept) and
//! back edges (removal candidates), then deletes a uniformly random count of
//! candidates. Because no tree edge is ever deleted, connectivity survives
//! every possible sample.

use std::{
    collections::HashSet,
    hash::Hash,
};

use rand::Rng;
use tracing::debug;

use crate::{edge::Edge, store::GraphStore};

/// Removes a random selection of non-tree edges in place.
///
/// Expects a connected graph; on a disconnected graph only the component of
/// the arbitrarily chosen start vertex is pruned. Empty graphs and graphs
/// whose DFS yields no candidates (trees) are left untouched.
pub(crate) fn prune_random_edges<V, S, R>(store: &mut S, rng: &mut R)
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
    R: Rng,
{
    let Some(start) = store.vertices().into_iter().next() else {
        return;
    };

    let mut visited: HashSet<V> = HashSet::new();
    let mut keep: HashSet<Edge<V>> = HashSet::new();
    let mut candidates: Vec<Edge<V>> = Vec::new();
    let mut stack: Vec<(V, Option<Edge<V>>)> = vec![(start, None)];

    while let Some((vertex, via)) = stack.pop() {
        if visited.insert(vertex.clone()) {
            if let Some(edge) = via {
                keep.insert(edge);
            }
            for edge in store.incident_edges(&vertex) {
                if let Some(other) = edge.other_endpoint(&vertex) {
                    stack.push((other.clone(), Some(edge.clone())));
                }
            }
        } else if let Some(edge) = via {
            // A back edge reaches here once per endpoint; record it once.
            if !keep.contains(&edge) && !candidates.contains(&edge) {
                candidates.push(edge);
            }
        }
    }

    if candidates.is_empty() {
        return;
    }
    let removals = rng.gen_range(0..candidates.len());
    debug!(removals, candidates = candidates.len(), "pruning non-tree edges");
    for _ in 0..removals {
        let index = rng.gen_range(0..candidates.len());
        let trim = candidates.swap_remove(index);
        store.remove_edge(&trim);
    }
}
