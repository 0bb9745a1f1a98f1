use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::graph::{Weight, WeightMatrix};
use crate::{Error, Result};

/// All-pairs shortest paths with the algorithm of Floyd and Warshall.
///
/// Runs in O(V³) time and O(V²) space. Negative edge weights are allowed; a
/// negative-weight cycle makes the call fail with [`Error::NegativeCycle`].
/// A path length that does not fit in `W` fails with [`Error::InvalidGraph`].
#[derive(Debug, Clone, Copy)]
pub struct FloydWarshall {
    /// Clamp the diagonal to `min(W[i][i], 0)` before relaxing
    zero_diagonal: bool,
}

impl Default for FloydWarshall {
    fn default() -> Self {
        Self::new()
    }
}

impl FloydWarshall {
    /// Creates a new solver that normalizes the diagonal
    pub fn new() -> Self {
        FloydWarshall { zero_diagonal: true }
    }

    /// Whether a missing or positive diagonal entry is replaced by zero.
    ///
    /// Negative self-loops are kept either way and reported as a negative cycle.
    /// When disabled the diagonal is used exactly as given, so `dist[i][i]` is
    /// the shortest cycle through `i`, or `None` if there is none.
    pub fn with_zero_diagonal(mut self, zero_diagonal: bool) -> Self {
        self.zero_diagonal = zero_diagonal;
        self
    }
}

/// Solves all-pairs shortest paths with the default configuration
pub fn solve<W>(graph: &WeightMatrix<W>) -> Result<AllPairsResult<W>>
where
    W: Weight,
{
    FloydWarshall::new().solve(graph)
}

/// First node `i` with `dist[i][i] < 0`, if any
fn negative_diagonal<W>(distances: &[Vec<Option<W>>]) -> Option<usize>
where
    W: Weight,
{
    distances
        .iter()
        .enumerate()
        .find(|(i, row)| matches!(row[*i], Some(d) if d < W::zero()))
        .map(|(i, _)| i)
}

impl<W> AllPairsAlgorithm<W> for FloydWarshall
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn solve(&self, graph: &WeightMatrix<W>) -> Result<AllPairsResult<W>> {
        let n = graph.size();
        log::debug!("Running Floyd-Warshall on {} nodes", n);

        let mut distances: Vec<Vec<Option<W>>> = graph.rows().to_vec();
        let mut predecessors: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for (i, row) in distances.iter_mut().enumerate() {
            if self.zero_diagonal {
                row[i] = match row[i] {
                    Some(d) if d < W::zero() => Some(d),
                    _ => Some(W::zero()),
                };
            }
            for (j, entry) in row.iter().enumerate() {
                if i != j && entry.is_some() {
                    predecessors[i][j] = Some(i);
                }
            }
        }

        // k must stay the outermost loop: after iteration k, distances[i][j] is
        // the shortest path using only intermediates 0..=k.
        for k in 0..n {
            for i in 0..n {
                let Some(dist_ik) = distances[i][k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(dist_kj) = distances[k][j] else {
                        continue;
                    };
                    let Some(candidate) = dist_ik.checked_sum(dist_kj) else {
                        log::warn!("Distance overflow on {} -> {} via {}", i, j, k);
                        return Err(Error::InvalidGraph(format!(
                            "distance overflow on path {} -> {} via {}",
                            i, j, k
                        )));
                    };
                    let improves = match distances[i][j] {
                        None => true,
                        Some(current) => candidate < current,
                    };
                    if improves {
                        distances[i][j] = Some(candidate);
                        predecessors[i][j] = predecessors[k][j];
                    }
                }
            }

            if let Some(node) = negative_diagonal(&distances) {
                log::warn!("Negative cycle through node {} found at intermediate {}", node, k);
                return Err(Error::NegativeCycle { node });
            }
        }

        if let Some(node) = negative_diagonal(&distances) {
            log::warn!("Negative cycle through node {}", node);
            return Err(Error::NegativeCycle { node });
        }

        log::debug!("Floyd-Warshall finished on {} nodes", n);
        Ok(AllPairsResult {
            distances,
            predecessors,
        })
    }
}
