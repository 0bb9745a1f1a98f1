use std::collections::HashMap;

use crate::graph::dense::WeightMatrix;
use crate::graph::traits::{NodeId, Weight, WeightedDigraph};

/// A sparse weighted directed graph using adjacency lists keyed by node identifier.
///
/// Nodes keep the order in which they were first seen, which makes iteration
/// (and therefore tie breaking in the solvers) reproducible.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Node identifiers in insertion order
    nodes: Vec<N>,

    /// Node identifier -> position in `nodes`
    index: HashMap<N, usize>,

    /// Outgoing edges for each node position: [(target position, weight)]
    edges: Vec<Vec<(usize, W)>>,
}

impl<N, W> Default for AdjacencyMap<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> AdjacencyMap<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyMap {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyMap {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        edges.into_iter().collect()
    }

    /// Adds a node without edges and returns its position; adding an existing node is a no-op
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&position) = self.index.get(&node) {
            return position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        self.edges.push(Vec::new());
        position
    }

    /// Adds a directed edge, creating missing endpoints. A repeated edge replaces the old weight.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) {
        let from = self.add_node(from);
        let to = self.add_node(to);

        let outgoing = &mut self.edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Removes the edge `from -> to`, returning its weight if it existed
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<W> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        let outgoing = &mut self.edges[from];
        let position = outgoing.iter().position(|(target, _)| *target == to)?;
        Some(outgoing.remove(position).1)
    }

    /// Gets the weight of the edge `from -> to`, if it exists
    pub fn weight(&self, from: &N, to: &N) -> Option<W> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.edges[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|edges| edges.len()).sum()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.find_negative_edge().is_none()
    }

    /// Converts to a dense matrix. The returned vector maps each row/column index back to its node.
    pub fn to_dense(&self) -> (WeightMatrix<W>, Vec<N>) {
        let n = self.nodes.len();
        let mut rows = vec![vec![None; n]; n];
        for (from, outgoing) in self.edges.iter().enumerate() {
            rows[from][from] = Some(W::zero());
            for &(to, weight) in outgoing {
                rows[from][to] = Some(weight);
            }
        }
        (WeightMatrix::from_square_rows(rows), self.nodes.clone())
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyMap<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = AdjacencyMap::new();
        for (from, to, weight) in iter {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

impl<N, W> WeightedDigraph<N, W> for AdjacencyMap<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().cloned())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        match self.index.get(node) {
            Some(&position) => Box::new(
                self.edges[position]
                    .iter()
                    .map(move |&(to, weight)| (self.nodes[to].clone(), weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}
