use std::fmt::Debug;
use std::ops::Add;
use num_traits::Zero;

/// Numeric edge weight usable by the shortest path algorithms
///
/// Only a partial order is required, so plain `f64` works as well as integer
/// types and `OrderedFloat<f64>`. Values that are not comparable with
/// themselves (NaN) are rejected when an adjacency matrix is built.
pub trait Weight: Copy + Debug + PartialOrd + Add<Output = Self> + Zero {
    /// Returns true if the weight can be ordered against itself
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// Returns true if the weight is strictly below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T> Weight for T where T: Copy + Debug + PartialOrd + Add<Output = T> + Zero {}

/// Trait representing a weighted directed graph over dense vertex indices
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
