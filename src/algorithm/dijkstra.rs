use std::collections::HashMap;

use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{NodeId, Weight, WeightedDigraph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Requires non-negative edge weights; any other weight is rejected before the
/// search starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the algorithm from every node of the graph in parallel.
    ///
    /// Results come back in the graph's node order. The weights are validated
    /// once up front; after that the only possible failure is a distance
    /// overflow.
    pub fn solve_all_sources<N, W, G>(&self, graph: &G) -> Result<Vec<ShortestPathResult<N, W>>>
    where
        N: NodeId + Send + Sync,
        W: Weight + Ord + Send + Sync,
        G: WeightedDigraph<N, W> + Sync,
    {
        validate_weights::<N, W, G>(graph)?;
        let sources: Vec<N> = graph.nodes().collect();
        log::debug!("Solving single-source shortest paths from {} sources", sources.len());

        sources
            .par_iter()
            .map(|source| search(graph, source))
            .collect()
    }
}

/// Fails with `InvalidWeight` on the first edge whose weight is not `>= 0`
fn validate_weights<N, W, G>(graph: &G) -> Result<()>
where
    N: NodeId,
    W: Weight,
    G: WeightedDigraph<N, W>,
{
    match graph.find_negative_edge() {
        Some((from, to, weight)) => {
            log::warn!("Rejecting edge {:?} -> {:?} with weight {:?}", from, to, weight);
            Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            })
        }
        None => Ok(()),
    }
}

/// The search loop proper. The caller has checked that `source` exists and
/// that every weight is non-negative.
fn search<N, W, G>(graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
where
    N: NodeId,
    W: Weight + Ord,
    G: WeightedDigraph<N, W>,
{
    log::debug!(
        "Running Dijkstra from {:?} on a graph with {} nodes",
        source,
        graph.node_count()
    );

    // Every known node starts unreachable except the source
    let mut distances: HashMap<N, Option<W>> =
        graph.nodes().map(|node| (node, None)).collect();
    let mut predecessors: HashMap<N, N> = HashMap::new();
    distances.insert(source.clone(), Some(W::zero()));

    let mut queue = BinaryHeapWrapper::new();
    queue.push(source.clone(), W::zero());

    while let Some((u, dist_u)) = queue.pop() {
        // Skip stale entries superseded by a shorter path
        if let Some(Some(current_dist)) = distances.get(&u) {
            if *current_dist < dist_u {
                continue;
            }
        }

        // Relax all outgoing edges
        for (v, weight) in graph.neighbors(&u) {
            let Some(new_dist) = dist_u.checked_sum(weight) else {
                log::warn!("Distance overflow relaxing {:?} -> {:?}", u, v);
                return Err(Error::InvalidGraph(format!(
                    "distance overflow on edge {:?} -> {:?}",
                    u, v
                )));
            };

            let should_update = match distances.get(&v).copied().flatten() {
                None => true,
                Some(current_dist) => new_dist < current_dist,
            };

            if should_update {
                log::trace!("Relaxed {:?} -> {:?} to {:?}", u, v, new_dist);
                distances.insert(v.clone(), Some(new_dist));
                predecessors.insert(v.clone(), u.clone());
                queue.push(v, new_dist);
            }
        }
    }

    let result = ShortestPathResult {
        source: source.clone(),
        distances,
        predecessors,
    };
    log::debug!(
        "Dijkstra from {:?} reached {} of {} nodes",
        source,
        result.reachable_count(),
        graph.node_count()
    );

    Ok(result)
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight + Ord,
    G: WeightedDigraph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.contains_node(source) {
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }
        validate_weights::<N, W, G>(graph)?;

        search(graph, source)
    }
}
