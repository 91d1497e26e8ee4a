pub mod traits;
pub mod matrix;
pub mod labels;
pub mod builder;
pub mod generators;

pub use traits::{Graph, Weight};
pub use matrix::{AdjacencyMatrix, Distance, Matrix};
pub use labels::NodeLabels;
pub use builder::{GraphBuilder, LabeledGraph};
