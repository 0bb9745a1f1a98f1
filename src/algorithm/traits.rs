use std::collections::HashMap;

use crate::graph::{NodeId, Weight, WeightMatrix, WeightedDigraph};
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node
    pub source: N,

    /// Distance from the source to every node of the graph; `None` if unreachable
    pub distances: HashMap<N, Option<W>>,

    /// Predecessor of each reached node on its shortest path.
    /// The source and unreached nodes have no entry.
    pub predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Shortest distance to `node`, or `None` if unreachable or not in the graph
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// The node preceding `node` on its shortest path
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    /// Returns true if a path from the source to `node` exists
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// Returns `None` when `target` is unreachable. The walk is bounded by the
    /// number of nodes, so a corrupted predecessor map cannot loop forever.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
            if path.len() > self.distances.len() {
                log::warn!("Predecessor chain from {:?} does not reach the source", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: WeightedDigraph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}

/// Result of an all-pairs shortest path computation over nodes `0..n`
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W>
where
    W: Weight,
{
    /// `distances[i][j]` is the shortest distance from `i` to `j`; `None` if unreachable
    pub distances: Vec<Vec<Option<W>>>,

    /// `predecessors[i][j]` is the node right before `j` on the shortest path from `i`.
    /// `None` on the diagonal and for unreachable pairs.
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: Weight,
{
    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable or out of range
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        self.distances.get(from).and_then(|row| row.get(to)).copied().flatten()
    }

    /// The node preceding `to` on the shortest path from `from`
    pub fn predecessor(&self, from: usize, to: usize) -> Option<usize> {
        self.predecessors.get(from).and_then(|row| row.get(to)).copied().flatten()
    }

    /// Reconstructs the shortest path from `from` to `to` as a list of nodes.
    ///
    /// `path(i, i)` is `[i]`. Returns `None` when `to` is unreachable from `from`.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        if from == to {
            return Some(vec![from]);
        }

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = self.predecessor(from, current)?;
            path.push(current);
            if path.len() > self.node_count() {
                log::warn!("Predecessor chain from {} to {} does not terminate", from, to);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for all-pairs shortest path algorithms on dense graphs
pub trait AllPairsAlgorithm<W>
where
    W: Weight,
{
    /// Compute shortest paths between every ordered pair of nodes
    fn solve(&self, graph: &WeightMatrix<W>) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
