//! Trusted sequential oracles for graph property verification.
//!
//! Floyd–Warshall provides all-pairs shortest distances to check Dijkstra
//! against; a plain sequential Kruskal provides minimum-spanning-forest
//! totals to check the Prim-based partition against.

use super::strategies::GraphFixture;

/// All-pairs shortest distances; `None` means no path. Vertex `id` maps to
/// index `id - 1`.
pub(super) fn floyd_warshall(fixture: &GraphFixture) -> Vec<Vec<Option<i64>>> {
    let n = fixture.vertex_count as usize;
    let mut dist: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for (index, row) in dist.iter_mut().enumerate() {
        if let Some(slot) = row.get_mut(index) {
            *slot = Some(0);
        }
    }
    for &(a, b, length) in &fixture.edges {
        let (i, j) = ((a - 1) as usize, (b - 1) as usize);
        let length = i64::from(length);
        if let Some(row) = dist.get_mut(i) {
            if let Some(slot) = row.get_mut(j) {
                *slot = Some(slot.map_or(length, |known: i64| known.min(length)));
            }
        }
        if let Some(row) = dist.get_mut(j) {
            if let Some(slot) = row.get_mut(i) {
                *slot = Some(slot.map_or(length, |known: i64| known.min(length)));
            }
        }
    }

    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                let Some(first) = dist[from][via] else {
                    continue;
                };
                let Some(second) = dist[via][to] else {
                    continue;
                };
                let relaxed = first.saturating_add(second);
                let current = dist[from][to];
                if current.is_none_or(|known| relaxed < known) {
                    dist[from][to] = Some(relaxed);
                }
            }
        }
    }
    dist
}

/// Total weight and component count of the minimum spanning forest,
/// computed by sequential Kruskal over a rank-free union-find.
pub(super) fn kruskal_forest(fixture: &GraphFixture) -> (i64, usize) {
    let n = fixture.vertex_count as usize;
    let mut parent: Vec<usize> = (0..n).collect();

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            let grandparent = parent[parent[current]];
            parent[current] = grandparent;
            current = parent[current];
        }
        current
    }

    let mut edges = fixture.edges.clone();
    edges.sort_unstable_by_key(|&(_, _, length)| length);

    let mut total = 0_i64;
    let mut components = n;
    for (a, b, length) in edges {
        let left = find(&mut parent, (a - 1) as usize);
        let right = find(&mut parent, (b - 1) as usize);
        if left != right {
            parent[right] = left;
            total += i64::from(length);
            components -= 1;
        }
    }
    (total, components)
}
