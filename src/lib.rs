/*!
`graphmat` converts between 0/±1 matrices and undirected graphs and tests matrices for
being **graphic** or **cographic**.

# Background

A matrix is *graphic* if some graph has a spanning forest such that the matrix rows
are the forest edges, the columns are the remaining (co-forest) edges, and entry
`(r, c)` is set exactly if forest edge `r` lies on the forest path between the
endpoints of co-forest edge `c`. A matrix is *cographic* if its transpose is graphic.

# Representation

Nodes are `u32` values in the range `0..n` and edges are tuple-structs
`Edge(Node, Node)`, addressed by their [`EdgeId`]. Matrix coordinates are correlated
with graph edges through [`Element`](element::Element), a closed row-or-column tag
with a 1-based textual label form (`r1`, `c3`).

# Usage

There are *4* core submodules you probably want to interact with:
- [`repr`] holds the data objects of a conversion: [`BinMatrix`](repr::BinMatrix),
  [`TaggedGraph`](repr::TaggedGraph) and the witness [`Submatrix`](repr::Submatrix),
- [`io`] includes handlers for reading and writing the dense/sparse matrix formats
  and the edge-list/DOT graph formats,
- [`engine`] decides (co)graphicness and builds realizations, fundamental matrices,
  and minimal violating submatrices,
- [`convert`] wires the pieces together in both conversion directions and renders
  the results.

```
use graphmat::prelude::*;
use graphmat::engine::{Engine, Mode, RecognitionStats};

let matrix = BinMatrix::from_row_major(2, 3, &[1, 1, 1, 1, 1, 1]);
let mut stats = RecognitionStats::default();

let result = Engine::new()
    .recognize(&matrix, Mode::Graphic, false, &mut stats)
    .unwrap();
assert!(result.matches);
assert_eq!(result.realization.unwrap().graph.number_of_edges(), 5);
```

The `graphmat` binary exposes both directions on the command line; input and output
formats decide the direction.
*/

pub mod convert;
pub mod edge;
pub mod element;
pub mod engine;
pub mod error;
pub mod io;
pub mod node;
pub mod repr;
pub mod utils;

pub use edge::{Edge, EdgeId, NumEdges, INVALID_EDGE};
pub use node::{Node, NumNodes, INVALID_NODE};

/// `graphmat::prelude` includes definitions for nodes, edges, elements and the data
/// objects flowing through a conversion.
pub mod prelude {
    pub use super::{edge::*, element::*, node::*, repr::*};
}
