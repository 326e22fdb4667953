//! Fixture generation for graph property tests.
//!
//! Fixtures are generated from a proptest-supplied seed through a
//! [`SmallRng`], so every case is reproducible from its seed alone.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{edge::Edge, graph::Graph, vertex::Vertex};

/// Smallest generated vertex count.
const MIN_VERTICES: u32 = 2;
/// Largest generated vertex count; all-pairs oracles are quadratic, so the
/// fixtures stay small.
const MAX_VERTICES: u32 = 12;
/// Largest generated edge length.
const MAX_LENGTH: u32 = 50;

/// A reproducible random graph: `vertex_count` vertices identified
/// `1..=vertex_count` and unique-pair weighted edges.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) vertex_count: u32,
    pub(super) edges: Vec<(u32, u32, u32)>,
}

impl GraphFixture {
    /// Materialises the fixture into an adjacency-list graph.
    pub(super) fn build(&self) -> Graph<Vertex> {
        let mut graph = Graph::new();
        for id in 1..=self.vertex_count {
            assert!(graph.add_vertex(vertex(id)));
        }
        for &(a, b, length) in &self.edges {
            let edge = Edge::with_length(vertex(a), vertex(b), length).expect("distinct endpoints");
            assert!(graph.add_edge(edge));
        }
        graph
    }

    /// Materialises the fixture with its edges inserted in a shuffled
    /// order.
    pub(super) fn build_shuffled(&self, seed: u64) -> Graph<Vertex> {
        let mut shuffled = self.clone();
        let mut rng = SmallRng::seed_from_u64(seed);
        shuffled.edges.shuffle(&mut rng);
        shuffled.build()
    }
}

pub(super) fn vertex(id: u32) -> Vertex {
    Vertex::new(id, format!("v{id}"))
}

/// Generates graphs with an arbitrary edge set (possibly disconnected).
pub(super) fn sparse_fixture() -> impl Strategy<Value = GraphFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
        let edge_probability = rng.gen_range(0.1_f64..0.6);
        let mut edges = Vec::new();
        for a in 1..=vertex_count {
            for b in (a + 1)..=vertex_count {
                if rng.gen_bool(edge_probability) {
                    edges.push((a, b, rng.gen_range(1..=MAX_LENGTH)));
                }
            }
        }
        GraphFixture {
            vertex_count,
            edges,
        }
    })
}

/// Generates connected graphs: a random spanning path plus extra chords.
pub(super) fn connected_fixture() -> impl Strategy<Value = GraphFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);

        let mut order: Vec<u32> = (1..=vertex_count).collect();
        order.shuffle(&mut rng);
        let mut edges: Vec<(u32, u32, u32)> = order
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some((*a.min(b), *a.max(b), rng.gen_range(1..=MAX_LENGTH))),
                _ => None,
            })
            .collect();

        let chord_probability = rng.gen_range(0.0_f64..0.4);
        for a in 1..=vertex_count {
            for b in (a + 1)..=vertex_count {
                let on_path = edges.iter().any(|&(x, y, _)| x == a && y == b);
                if !on_path && rng.gen_bool(chord_probability) {
                    edges.push((a, b, rng.gen_range(1..=MAX_LENGTH)));
                }
            }
        }
        GraphFixture {
            vertex_count,
            edges,
        }
    })
}
