use crate::graph::traits::{Weight, WeightedDigraph};
use crate::{Error, Result};

/// A dense weighted directed graph stored as a square adjacency matrix.
///
/// Entry `[i][j]` is the weight of the edge `i -> j`, or `None` when there is
/// no such edge. Nodes are the contiguous indices `0..size()`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W> {
    rows: Vec<Vec<Option<W>>>,
}

impl<W> WeightMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix of `size` nodes with no edges and a zero diagonal
    pub fn new(size: usize) -> Self {
        let mut rows = vec![vec![None; size]; size];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = Some(W::zero());
        }
        WeightMatrix { rows }
    }

    /// Builds a matrix from explicit rows, rejecting ragged or non-square input
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(Error::InvalidGraph(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                size
            )));
        }
        Ok(WeightMatrix { rows })
    }

    /// Wraps rows already known to form a square matrix
    pub(crate) fn from_square_rows(rows: Vec<Vec<Option<W>>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        WeightMatrix { rows }
    }

    /// Builds a matrix of `size` nodes from a list of `(from, to, weight)` edges
    pub fn from_edges<I>(size: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = WeightMatrix::new(size);
        for (from, to, weight) in edges {
            matrix.set_edge(from, to, weight)?;
        }
        Ok(matrix)
    }

    /// Returns the number of nodes
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the raw rows of the matrix
    pub fn rows(&self) -> &[Vec<Option<W>>] {
        &self.rows
    }

    /// Gets the weight of the edge `from -> to`, if present and in range
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.rows.get(from).and_then(|row| row.get(to)).copied().flatten()
    }

    /// Sets the weight of the directed edge `from -> to`, replacing any previous weight
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.rows[from][to] = Some(weight);
        Ok(())
    }

    /// Sets the same weight in both directions
    pub fn set_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)
    }

    /// Removes the edge `from -> to`, returning its previous weight
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.rows[from][to].take())
    }

    /// Returns true if `[i][j]` and `[j][i]` agree for every pair
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(Error::InvalidGraph(format!(
                "node index {} out of range for {} nodes",
                index,
                self.size()
            )))
        }
    }
}

impl<W> WeightedDigraph<usize, W> for WeightMatrix<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.size()
    }

    fn contains_node(&self, node: &usize) -> bool {
        *node < self.size()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.size())
    }

    fn neighbors(&self, node: &usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let node = *node;
        match self.rows.get(node) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter(move |(to, _)| *to != node)
                    .filter_map(|(to, weight)| weight.map(|w| (to, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Scans every entry, the diagonal included.
    ///
    /// `neighbors` hides self-loops, so the default scan would never see a
    /// negative diagonal entry.
    fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        self.rows.iter().enumerate().find_map(|(from, row)| {
            row.iter()
                .enumerate()
                .find_map(|(to, weight)| match *weight {
                    Some(w) if !(w >= W::zero()) => Some((from, to, w)),
                    _ => None,
                })
        })
    }
}
