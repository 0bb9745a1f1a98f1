use crate::graph::{AdjacencyMap, WeightMatrix};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a dense random digraph with `n` nodes.
///
/// Each ordered pair `i != j` receives an edge with probability `density` and an
/// integer weight drawn from `min_weight..=max_weight`. The diagonal is zero.
/// The same `seed` always yields the same matrix.
pub fn random_dense(
    n: usize,
    density: f64,
    min_weight: i64,
    max_weight: i64,
    seed: u64,
) -> WeightMatrix<i64> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");
    assert!((0.0..=1.0).contains(&density), "density must be in [0, 1]");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![None; n]; n];

    for (i, row) in rows.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            if i == j {
                *entry = Some(0);
            } else if rng.gen_bool(density) {
                *entry = Some(rng.gen_range(min_weight..=max_weight));
            }
        }
    }

    WeightMatrix::from_square_rows(rows)
}

/// Generates a dense random undirected graph (symmetric matrix) with non-negative weights
pub fn random_symmetric(n: usize, density: f64, max_weight: i64, seed: u64) -> WeightMatrix<i64> {
    assert!(max_weight >= 0, "max_weight must be non-negative");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![None; n]; n];

    for i in 0..n {
        rows[i][i] = Some(0);
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                let weight = rng.gen_range(0..=max_weight);
                rows[i][j] = Some(weight);
                rows[j][i] = Some(weight);
            }
        }
    }

    WeightMatrix::from_square_rows(rows)
}

/// Generates a sparse random digraph over nodes `0..n` with about `edge_factor * n`
/// edges and non-negative integer weights in `0..=max_weight`.
pub fn random_sparse(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> AdjacencyMap<usize, u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyMap::with_capacity(n);

    for v in 0..n {
        graph.add_node(v);
    }

    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight));
        }
    }

    graph
}
