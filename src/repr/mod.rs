/*!
# Representations

Data objects flowing through a conversion: the tagged multigraph, the 0/±1 matrix in a
compressed sparse row layout, and the submatrix (a row/column index selection into a
matrix, used as the violator witness).
*/

mod graph;
mod matrix;
mod submatrix;

pub use graph::*;
pub use matrix::*;
pub use submatrix::*;
