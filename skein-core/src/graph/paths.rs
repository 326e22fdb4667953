//! Single-source shortest paths over any [`GraphStore`].
//!
//! Dijkstra with a binary min-heap, lazy deletion and a settled set. Edge
//! lengths are non-negative by construction, which the relaxation step
//! relies on. Distances are `i64` with `i64::MAX` as the infinity sentinel.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    hash::Hash,
};

use crate::store::GraphStore;

/// Sentinel returned by [`path_length`] for an empty path, distinguishing
/// "no path" from a zero-length path.
pub const NO_PATH: i64 = i64::MAX;

struct ShortestPaths<V> {
    distances: HashMap<V, i64>,
    predecessors: HashMap<V, V>,
}

/// Runs Dijkstra from `source`, returning best distances and predecessors
/// for every reached vertex. Unreached vertices are absent from both maps;
/// the source carries distance zero and no predecessor.
fn run_dijkstra<V, S>(store: &S, source: &V) -> ShortestPaths<V>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    let mut distances: HashMap<V, i64> = HashMap::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut settled: HashSet<V> = HashSet::new();
    // Heap entries index into `discovered` so that ordering never needs
    // V: Ord; stale entries are skipped on pop.
    let mut discovered: Vec<V> = vec![source.clone()];
    let mut frontier: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();

    distances.insert(source.clone(), 0);
    frontier.push(Reverse((0, 0)));

    while let Some(Reverse((tentative, slot))) = frontier.pop() {
        let Some(current) = discovered.get(slot).cloned() else {
            continue;
        };
        if !settled.insert(current.clone()) {
            continue;
        }
        let Some(&best) = distances.get(&current) else {
            continue;
        };
        if tentative > best {
            continue;
        }
        for (neighbour, edge) in store.neighbours(&current) {
            if settled.contains(&neighbour) {
                continue;
            }
            let relaxed = best.saturating_add(i64::from(edge.length()));
            let improves = distances
                .get(&neighbour)
                .is_none_or(|&known| relaxed < known);
            if improves {
                distances.insert(neighbour.clone(), relaxed);
                predecessors.insert(neighbour.clone(), current.clone());
                discovered.push(neighbour);
                frontier.push(Reverse((relaxed, discovered.len() - 1)));
            }
        }
    }

    ShortestPaths {
        distances,
        predecessors,
    }
}

/// Computes the ordered vertex sequence of a shortest path from `source` to
/// `sink`, both endpoints included.
///
/// Returns an empty sequence when either endpoint is absent, either endpoint
/// has no incident edges, or no path exists; returns `[source]` when source
/// and sink coincide. Tie-breaking among equally short paths is
/// implementation-defined, but the result is always a true shortest path.
pub(crate) fn shortest_path<V, S>(store: &S, source: &V, sink: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    if !store.has_vertex(source) || !store.has_vertex(sink) {
        return Vec::new();
    }
    if store.incident_edges(source).is_empty() || store.incident_edges(sink).is_empty() {
        return Vec::new();
    }
    if source == sink {
        return vec![source.clone()];
    }

    let result = run_dijkstra(store, source);
    if !result.distances.contains_key(sink) {
        return Vec::new();
    }

    let mut path = vec![sink.clone()];
    let mut current = sink;
    while current != source {
        let Some(previous) = result.predecessors.get(current) else {
            return Vec::new();
        };
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}

/// Returns every reached vertex's shortest-path distance from `source`.
///
/// The source maps to zero; vertices with no path to `source` are absent.
pub(crate) fn single_source_distances<V, S>(store: &S, source: &V) -> HashMap<V, i64>
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    if !store.has_vertex(source) {
        return HashMap::new();
    }
    run_dijkstra(store, source).distances
}

/// Sums the consecutive edge lengths along an ordered vertex sequence.
///
/// Returns [`NO_PATH`] for an empty sequence; a single-vertex path has
/// length zero.
pub(crate) fn path_length<V, S>(store: &S, path: &[V]) -> i64
where
    V: Clone + Eq + Hash,
    S: GraphStore<V>,
{
    if path.is_empty() {
        return NO_PATH;
    }
    path.windows(2)
        .map(|pair| match pair {
            [from, to] => store.edge_length(from, to),
            _ => 0,
        })
        .sum()
}
