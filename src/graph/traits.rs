use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

/// Numeric edge weight accepted by the solvers.
///
/// Implemented for the primitive integers and floats, and for
/// `ordered_float::OrderedFloat` so that float weights can also be ordered
/// totally where a solver needs `Ord`.
pub trait Weight: Copy + Debug + PartialOrd + Add<Output = Self> + Zero {
    /// Adds two path lengths, or returns `None` if the sum is not representable.
    ///
    /// For floats a sum of two finite values that comes out infinite counts as
    /// an overflow.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if Float::is_infinite(sum) && Float::is_finite(self) && Float::is_finite(other) {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

/// Node identifier of a sparse graph: opaque, comparable and hashable.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Read-only view of a weighted directed graph
pub trait WeightedDigraph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns an iterator over all nodes, in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing edges of a node as `(neighbor, weight)`
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns the first edge whose weight is not `>= 0`, if any
    fn find_negative_edge(&self) -> Option<(N, N, W)> {
        self.nodes().find_map(|from| {
            self.neighbors(&from)
                .find(|(_, weight)| !(*weight >= W::zero()))
                .map(|(to, weight)| (from.clone(), to, weight))
        })
    }
}
