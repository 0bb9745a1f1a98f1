pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;

pub use traits::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
