use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::algorithm::{AllPairsResult, ShortestPathResult};
use crate::graph::{AdjacencyMap, WeightMatrix};
use crate::{Error, Result};

/// Weight type used for JSON input
pub type JsonWeight = OrderedFloat<f64>;

/// A dense graph as a square matrix of weights; `null` marks a missing edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseGraphInput {
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl DenseGraphInput {
    /// Validates the shape and converts into a weight matrix
    pub fn into_matrix(self) -> Result<WeightMatrix<JsonWeight>> {
        let rows = self
            .matrix
            .into_iter()
            .map(|row| row.into_iter().map(|w| w.map(OrderedFloat)).collect())
            .collect();
        WeightMatrix::from_rows(rows)
    }
}

/// A sparse graph as `node -> {neighbor -> weight}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparseGraphInput {
    pub adjacency: BTreeMap<String, BTreeMap<String, f64>>,
    /// Add every edge in both directions
    #[serde(default)]
    pub undirected: bool,
}

impl SparseGraphInput {
    /// Converts into an adjacency map; nodes are ordered by name
    pub fn into_graph(self) -> AdjacencyMap<String, JsonWeight> {
        let mut graph = AdjacencyMap::with_capacity(self.adjacency.len());
        for node in self.adjacency.keys() {
            graph.add_node(node.clone());
        }
        for (from, neighbors) in self.adjacency {
            for (to, weight) in neighbors {
                if self.undirected {
                    graph.add_undirected_edge(from.clone(), to, OrderedFloat(weight));
                } else {
                    graph.add_edge(from.clone(), to, OrderedFloat(weight));
                }
            }
        }
        graph
    }

    /// True if `node` has its own entry in `adjacency`
    pub fn lists_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Converts into an adjacency map after checking that `source` is listed.
    ///
    /// Nodes that only appear as neighbors are part of the graph but cannot
    /// start a search.
    pub fn into_graph_from(self, source: &str) -> Result<AdjacencyMap<String, JsonWeight>> {
        if !self.lists_node(source) {
            log::warn!("Source {:?} is not a key of the adjacency map", source);
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }
        Ok(self.into_graph())
    }
}

/// Report of an all-pairs computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPairsReport {
    pub algorithm: String,
    pub nodes: usize,
    pub distances: Vec<Vec<Option<f64>>>,
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl AllPairsReport {
    pub fn new(algorithm: &str, result: &AllPairsResult<JsonWeight>) -> Self {
        AllPairsReport {
            algorithm: algorithm.to_string(),
            nodes: result.node_count(),
            distances: result
                .distances
                .iter()
                .map(|row| row.iter().map(|d| d.map(OrderedFloat::into_inner)).collect())
                .collect(),
            predecessors: result.predecessors.clone(),
        }
    }

    /// Distance matrix with `INF` for unreachable pairs, then the predecessor matrix
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Shortest distances between all pairs of nodes:\n");
        for row in &self.distances {
            for entry in row {
                match entry {
                    Some(d) => out.push_str(&format!("{:>7}", d)),
                    None => out.push_str(&format!("{:>7}", "INF")),
                }
            }
            out.push('\n');
        }

        out.push_str("\nPredecessors (for path reconstruction):\n");
        for row in &self.predecessors {
            let cells: Vec<String> = row
                .iter()
                .map(|p| p.map_or_else(|| "-".to_string(), |p| p.to_string()))
                .collect();
            out.push_str(&format!("[{}]\n", cells.join(", ")));
        }
        out
    }
}

/// Report of a single-source computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleSourceReport {
    pub algorithm: String,
    pub source: String,
    pub distances: BTreeMap<String, Option<f64>>,
    pub predecessors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl SingleSourceReport {
    pub fn new(
        algorithm: &str,
        result: &ShortestPathResult<String, JsonWeight>,
        target: Option<&String>,
    ) -> Self {
        SingleSourceReport {
            algorithm: algorithm.to_string(),
            source: result.source.clone(),
            distances: result
                .distances
                .iter()
                .map(|(node, d)| (node.clone(), d.map(OrderedFloat::into_inner)))
                .collect(),
            predecessors: result
                .predecessors
                .iter()
                .map(|(node, pred)| (node.clone(), pred.clone()))
                .collect(),
            target: target.cloned(),
            path: target.and_then(|t| result.path_to(t)),
        }
    }

    /// One `node: distance` line per node, then the path to the target if one was asked for
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Shortest distances from {}:\n", self.source));
        for (node, distance) in &self.distances {
            match distance {
                Some(d) => out.push_str(&format!("  {}: {}\n", node, d)),
                None => out.push_str(&format!("  {}: INF\n", node)),
            }
        }

        if let Some(target) = &self.target {
            match &self.path {
                Some(path) => out.push_str(&format!(
                    "Shortest path to {}: {}\n",
                    target,
                    path.join(" -> ")
                )),
                None => out.push_str(&format!("No path to {}\n", target)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{floyd_warshall, ShortestPathAlgorithm};
    use crate::graph::WeightedDigraph;
    use crate::Dijkstra;

    #[test]
    fn dense_input_parses_null_as_missing_edge() {
        let input: DenseGraphInput =
            serde_json::from_str(r#"{"matrix": [[0, 4], [null, 0]]}"#).unwrap();
        let matrix = input.into_matrix().unwrap();
        assert_eq!(matrix.weight(0, 1), Some(OrderedFloat(4.0)));
        assert_eq!(matrix.weight(1, 0), None);
    }

    #[test]
    fn all_pairs_text_marks_unreachable_as_inf() {
        let matrix = WeightMatrix::from_edges(2, vec![(0, 1, OrderedFloat(3.0))]).unwrap();
        let result = floyd_warshall::solve(&matrix).unwrap();
        let text = AllPairsReport::new("Floyd-Warshall", &result).render_text();
        assert!(text.contains("      0      3"));
        assert!(text.contains("    INF      0"));
        assert!(text.contains("[-, 0]"));
    }

    fn sample_input(undirected: bool) -> SparseGraphInput {
        let mut input: SparseGraphInput = serde_json::from_str(
            r#"{"adjacency": {"A": {"B": 1, "C": 4}, "B": {"C": 2, "D": 5}, "C": {"D": 1}}}"#,
        )
        .unwrap();
        input.undirected = undirected;
        input
    }

    #[test]
    fn sparse_input_is_directed_by_default() {
        let input = sample_input(false);
        assert!(!input.undirected);

        let graph = input.into_graph();
        assert_eq!(graph.weight(&"A".to_string(), &"B".to_string()), Some(OrderedFloat(1.0)));
        assert_eq!(graph.weight(&"B".to_string(), &"A".to_string()), None);
        // D only appears as a neighbor but is still a node
        assert!(graph.contains_node(&"D".to_string()));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn undirected_flag_adds_reverse_edges() {
        let input: SparseGraphInput =
            serde_json::from_str(r#"{"adjacency": {"A": {"B": 2.5}}, "undirected": true}"#)
                .unwrap();
        let graph = input.into_graph();
        assert_eq!(graph.weight(&"A".to_string(), &"B".to_string()), Some(OrderedFloat(2.5)));
        assert_eq!(graph.weight(&"B".to_string(), &"A".to_string()), Some(OrderedFloat(2.5)));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn source_must_be_listed_in_adjacency() {
        let input = sample_input(false);
        assert!(input.lists_node("C"));
        assert!(!input.lists_node("D"));
        assert!(matches!(
            input.clone().into_graph_from("D"),
            Err(Error::UnknownNode(node)) if node == "\"D\""
        ));
        assert_eq!(input.into_graph_from("A").unwrap().node_count(), 4);
    }

    #[test]
    fn single_source_text_lists_distances_and_path() {
        let graph = sample_input(true).into_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, &"A".to_string()).unwrap();
        let text =
            SingleSourceReport::new("Dijkstra", &result, Some(&"D".to_string())).render_text();
        assert_eq!(
            text,
            "Shortest distances from A:\n  A: 0\n  B: 1\n  C: 3\n  D: 4\n\
             Shortest path to D: A -> B -> C -> D\n"
        );
    }

    #[test]
    fn single_source_text_marks_unreachable_nodes() {
        let graph = sample_input(false).into_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, &"C".to_string()).unwrap();
        let text =
            SingleSourceReport::new("Dijkstra", &result, Some(&"A".to_string())).render_text();
        assert!(text.contains("  A: INF\n"));
        assert!(text.contains("  D: 1\n"));
        assert!(text.ends_with("No path to A\n"));
    }

    #[test]
    fn single_source_json_omits_path_without_target() {
        let graph = sample_input(false).into_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, &"A".to_string()).unwrap();

        let json = serde_json::to_value(SingleSourceReport::new("Dijkstra", &result, None)).unwrap();
        assert_eq!(json["algorithm"], "Dijkstra");
        assert_eq!(json["source"], "A");
        assert_eq!(json["distances"]["D"], 4.0);
        assert_eq!(json["predecessors"]["D"], "C");
        assert!(json.get("target").is_none());
        assert!(json.get("path").is_none());

        let with_target = SingleSourceReport::new("Dijkstra", &result, Some(&"D".to_string()));
        let json = serde_json::to_value(with_target).unwrap();
        assert_eq!(json["path"], serde_json::json!(["A", "B", "C", "D"]));
    }
}
