/*!
# Conversion Pipeline

The adapters between matrices and graphs:

- [`classify`] partitions a tagged graph's edges into forest (row-labeled) and
  co-forest (column-labeled) arrays.
- [`MatrixToGraph`] drives the engine in the matrix-to-graph direction.
- [`GraphToMatrix`] drives it in the graph-to-matrix direction.
- [`render`] turns recognition results into edge-list, DOT, and witness output.
*/

pub mod classify;
pub mod graph_to_matrix;
pub mod matrix_to_graph;
pub mod render;

pub use classify::{classify, Classified};
pub use graph_to_matrix::GraphToMatrix;
pub use matrix_to_graph::MatrixToGraph;
