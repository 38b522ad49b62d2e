/*!
# Recognition Engine

Decides whether a matrix is (co)graphic and constructs the objects witnessing the
verdict: a realizing graph with row/column edge maps on success, a minimal violating
submatrix on failure. The reverse direction builds the fundamental matrix of a graph
from explicit forest/co-forest assignments.

All operations run through an [`Engine`] handle created per conversion. The handle
carries the search budget; there is no process-wide state.
*/

mod forest;
mod realize;
mod witness;

use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{
    error::Result,
    repr::{BinMatrix, Submatrix, TaggedGraph},
    Edge, EdgeId,
};

/// Whether a conversion targets the graphic or the cographic interpretation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Rows are forest edges, columns are co-forest edges
    Graphic,
    /// The transposed roles: columns are forest edges, rows are co-forest edges
    Cographic,
}

impl Mode {
    /// Returns *true* for [`Mode::Cographic`]
    pub fn is_cographic(&self) -> bool {
        matches!(self, Mode::Cographic)
    }
}

/// A graph realizing a matrix, together with the correspondence between matrix
/// elements and graph edges.
///
/// `row_edges[i]` is the forest edge of row `i` of the tested matrix and
/// `column_edges[j]` the co-forest edge of column `j`. In cographic mode the tested
/// matrix is the transpose, so `row_edges` is indexed by the original matrix's
/// columns and `column_edges` by its rows.
#[derive(Debug, Clone)]
pub struct Realization {
    /// The realizing graph
    pub graph: TaggedGraph,
    /// One forest edge per tested row
    pub row_edges: Vec<EdgeId>,
    /// One co-forest edge per tested column
    pub column_edges: Vec<EdgeId>,
    /// Per-edge orientation reversal, indexed by edge id. Absent for unsigned input.
    pub edges_reversed: Option<Vec<bool>>,
}

impl Realization {
    /// Returns the endpoints of an edge in the order matching the matrix's sign
    /// convention: stored order normally, swapped when the edge is flagged reversed.
    pub fn oriented_endpoints(&self, e: EdgeId) -> Edge {
        let edge = self.graph.endpoints(e);
        match &self.edges_reversed {
            Some(reversed) if reversed[e as usize] => edge.reverse(),
            _ => edge,
        }
    }
}

/// Outcome of a recognition call
#[derive(Debug)]
pub struct Recognition {
    /// Whether the matrix has the requested property
    pub matches: bool,
    /// The realizing graph, present exactly on a match
    pub realization: Option<Realization>,
    /// Minimal violating submatrix in original matrix coordinates, present exactly
    /// when the matrix does not match and a witness was requested
    pub witness: Option<Submatrix>,
}

/// Outcome of a forest-to-matrix computation
#[derive(Debug)]
pub struct Represented {
    /// The computed matrix; delivered even for an invalid forest
    pub matrix: BinMatrix,
    /// Whether the supplied forest was a spanning forest of the graph
    pub is_valid_forest: bool,
}

/// Counters collected across the engine calls of one conversion
#[derive(Debug, Clone, Default)]
pub struct RecognitionStats {
    /// Number of recognition calls, witness minimization included
    pub calls: u64,
    /// States explored by the realization searches
    pub search_states: u64,
    /// Wall-clock time spent in [`Engine::recognize`]
    pub total_time: Duration,
}

impl Display for RecognitionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graphic recognition:")?;
        writeln!(f, "  calls: {}", self.calls)?;
        writeln!(f, "  search states: {}", self.search_states)?;
        writeln!(f, "  total time: {:.6}s", self.total_time.as_secs_f64())
    }
}

/// The recognition engine handle.
///
/// Holds the budget bounding the realization search. The budget caps the working
/// storage and time a single conversion may consume; exhausting it surfaces as a
/// memory error.
#[derive(Debug, Clone)]
pub struct Engine {
    search_budget: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            search_budget: 1 << 24,
        }
    }
}

impl Engine {
    /// Creates an engine with the default search budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the search budget
    pub fn search_budget(mut self, budget: u64) -> Self {
        self.search_budget = budget;
        self
    }

    /// Tests whether `matrix` is graphic (or cographic, depending on `mode`).
    ///
    /// On a match, the result carries the realizing graph and the element-to-edge
    /// maps. On a mismatch with `want_witness`, it instead carries a minimal
    /// violating submatrix: dropping any single row or column of the witness
    /// restores the property.
    ///
    /// # Errors
    /// Returns a memory error if the search budget is exhausted.
    pub fn recognize(
        &self,
        matrix: &BinMatrix,
        mode: Mode,
        want_witness: bool,
        stats: &mut RecognitionStats,
    ) -> Result<Recognition> {
        let start = Instant::now();
        stats.calls += 1;

        let transposed;
        let tested = match mode {
            Mode::Graphic => matrix,
            Mode::Cographic => {
                transposed = matrix.transposed();
                &transposed
            }
        };

        let realization = realize::realize(tested, self.search_budget, stats)?;
        let matches = realization.is_some();

        let witness = if !matches && want_witness {
            let violator = witness::minimal_violator(tested, self.search_budget, stats)?;
            Some(match mode {
                Mode::Graphic => violator,
                Mode::Cographic => violator.transposed(),
            })
        } else {
            None
        };

        stats.total_time += start.elapsed();
        debug!(
            matches,
            states = stats.search_states,
            "recognition finished"
        );

        Ok(Recognition {
            matches,
            realization,
            witness,
        })
    }

    /// Builds the fundamental matrix of `graph` for the given forest/co-forest
    /// assignment: entry `(r, c)` is set iff forest edge `r` lies on the forest path
    /// between the endpoints of co-forest edge `c`. In cographic mode the transpose
    /// is returned instead.
    ///
    /// The matrix is delivered even when the assignment is not a valid spanning
    /// forest; callers decide what to do with the flag.
    pub fn represent(
        &self,
        graph: &TaggedGraph,
        forest: &[Option<EdgeId>],
        coforest: &[Option<EdgeId>],
        mode: Mode,
    ) -> Represented {
        let (matrix, is_valid_forest) = forest::fundamental_matrix(graph, forest, coforest);

        let matrix = match mode {
            Mode::Graphic => matrix,
            Mode::Cographic => matrix.transposed(),
        };

        Represented {
            matrix,
            is_valid_forest,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn all_ones(rows: u32, columns: u32) -> BinMatrix {
        BinMatrix::from_row_major(
            rows,
            columns,
            &vec![1i8; rows as usize * columns as usize],
        )
    }

    #[test]
    fn all_ones_is_graphic_with_one_edge_per_element() {
        let matrix = all_ones(2, 3);
        let mut stats = RecognitionStats::default();

        let result = Engine::new()
            .recognize(&matrix, Mode::Graphic, false, &mut stats)
            .unwrap();

        assert!(result.matches);
        assert!(result.witness.is_none());

        let realization = result.realization.unwrap();
        assert_eq!(realization.row_edges.len(), 2);
        assert_eq!(realization.column_edges.len(), 3);
        assert_eq!(realization.graph.number_of_edges(), 5);
        assert!(realization.edges_reversed.is_none());

        // every element maps to its own edge
        let mut edges = realization
            .row_edges
            .iter()
            .chain(&realization.column_edges)
            .copied()
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        assert_eq!(edges.len(), 5);

        assert_eq!(stats.calls, 1);
        assert!(stats.search_states > 0);
    }

    #[test]
    fn cographic_mode_swaps_array_roles() {
        let matrix = all_ones(2, 3);
        let mut stats = RecognitionStats::default();

        let result = Engine::new()
            .recognize(&matrix, Mode::Cographic, false, &mut stats)
            .unwrap();

        assert!(result.matches);
        let realization = result.realization.unwrap();
        assert_eq!(realization.row_edges.len(), 3);
        assert_eq!(realization.column_edges.len(), 2);
    }

    #[test]
    fn realization_round_trips_through_represent() {
        let matrix = all_ones(2, 3);
        let mut stats = RecognitionStats::default();
        let engine = Engine::new();

        let realization = engine
            .recognize(&matrix, Mode::Graphic, false, &mut stats)
            .unwrap()
            .realization
            .unwrap();

        let forest = realization.row_edges.iter().copied().map(Some).collect_vec();
        let coforest = realization
            .column_edges
            .iter()
            .copied()
            .map(Some)
            .collect_vec();

        let represented = engine.represent(&realization.graph, &forest, &coforest, Mode::Graphic);
        assert!(represented.is_valid_forest);
        assert_eq!(represented.matrix, matrix);
    }

    #[test]
    fn oriented_endpoints_respect_reversal_flags() {
        let mut graph = TaggedGraph::new(3);
        let e0 = graph.add_edge(0, 1);
        let e1 = graph.add_edge(1, 2);

        let plain = Realization {
            graph: graph.clone(),
            row_edges: vec![e0, e1],
            column_edges: vec![],
            edges_reversed: None,
        };
        let flagged = Realization {
            graph,
            row_edges: vec![e0, e1],
            column_edges: vec![],
            edges_reversed: Some(vec![false, true]),
        };

        assert_eq!(plain.oriented_endpoints(e0), Edge(0, 1));
        assert_eq!(flagged.oriented_endpoints(e0), Edge(0, 1));
        assert_eq!(plain.oriented_endpoints(e1), Edge(1, 2));
        assert_eq!(flagged.oriented_endpoints(e1), Edge(2, 1));

        // flipping the flag is equivalent to swapping the stored endpoints
        let mut swapped_graph = TaggedGraph::new(3);
        swapped_graph.add_edge(0, 1);
        swapped_graph.add_edge(2, 1);
        let swapped = Realization {
            graph: swapped_graph,
            row_edges: vec![e0, e1],
            column_edges: vec![],
            edges_reversed: Some(vec![false, false]),
        };
        assert_eq!(
            swapped.oriented_endpoints(e1),
            flagged.oriented_endpoints(e1)
        );
    }

    #[test]
    fn random_fundamental_matrices_round_trip() {
        let rng = &mut Pcg64::seed_from_u64(0x9a7a);
        let engine = Engine::new();

        for _ in 0..20 {
            let n: u32 = rng.random_range(2..7);
            let chords: u32 = rng.random_range(0..5);

            // random spanning tree plus random chords, loops included
            let mut graph = TaggedGraph::new(n);
            let mut forest = Vec::new();
            for v in 1..n {
                let u = rng.random_range(0..v);
                forest.push(Some(graph.add_edge(u, v)));
            }
            let mut coforest = Vec::new();
            for _ in 0..chords {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                coforest.push(Some(graph.add_edge(u, v)));
            }

            let represented = engine.represent(&graph, &forest, &coforest, Mode::Graphic);
            assert!(represented.is_valid_forest);
            let matrix = represented.matrix;

            let mut stats = RecognitionStats::default();
            let result = engine
                .recognize(&matrix, Mode::Graphic, true, &mut stats)
                .unwrap();
            assert!(result.matches, "fundamental matrix must be graphic");

            // converting the realization back reproduces the matrix exactly
            let realization = result.realization.unwrap();
            let forest = realization.row_edges.iter().copied().map(Some).collect_vec();
            let coforest = realization
                .column_edges
                .iter()
                .copied()
                .map(Some)
                .collect_vec();
            let back = engine.represent(&realization.graph, &forest, &coforest, Mode::Graphic);
            assert!(back.is_valid_forest);
            assert_eq!(back.matrix, matrix);
        }
    }

    #[test]
    fn tiny_search_budget_surfaces_as_memory_error() {
        let matrix = all_ones(3, 3);
        let mut stats = RecognitionStats::default();

        let result = Engine::new()
            .search_budget(2)
            .recognize(&matrix, Mode::Graphic, false, &mut stats);
        assert!(matches!(
            result,
            Err(crate::error::GraphmatError::Memory(_))
        ));
    }

    #[test]
    fn cographic_represent_is_the_transpose() {
        let mut graph = TaggedGraph::new(3);
        let forest = vec![Some(graph.add_edge(0, 1)), Some(graph.add_edge(1, 2))];
        let coforest = vec![Some(graph.add_edge(0, 2))];
        let engine = Engine::new();

        let graphic = engine.represent(&graph, &forest, &coforest, Mode::Graphic);
        let cographic = engine.represent(&graph, &forest, &coforest, Mode::Cographic);

        assert_eq!(graphic.matrix.num_rows(), 2);
        assert_eq!(graphic.matrix.num_columns(), 1);
        assert_eq!(cographic.matrix, graphic.matrix.transposed());
    }
}
