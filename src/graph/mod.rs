pub mod dense;
pub mod generators;
pub mod sparse;
pub mod traits;

pub use dense::WeightMatrix;
pub use sparse::AdjacencyMap;
pub use traits::{NodeId, Weight, WeightedDigraph};
