//! Property-based tests for the algorithmic layer.
//!
//! Verifies Dijkstra against a Floyd–Warshall oracle, the spanning-forest
//! partition against a sequential Kruskal oracle, connectivity preservation
//! under pruning for arbitrary seeds, and insertion-order invariance of the
//! edge-length sum, over seeded random graph fixtures.

mod oracle;
mod strategies;
