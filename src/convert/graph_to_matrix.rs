//! # Graph to Matrix
//!
//! Converts a tagged graph into its (co)graphic matrix: the edges are classified by
//! their element labels and the engine computes the fundamental matrix of the
//! resulting forest/co-forest assignment.
//!
//! The engine delivers a matrix even when the row-labeled edges are not a spanning
//! forest; this adapter rejects that case as an input error, since such a matrix
//! does not represent the graph.

use tracing::debug;

use crate::{
    engine::{Engine, Mode},
    error::{GraphmatError, Result},
    repr::{BinMatrix, TaggedGraph},
};

use super::classify;

/// Adapter driving the engine in the graph-to-matrix direction
#[derive(Debug)]
pub struct GraphToMatrix<'a> {
    engine: &'a Engine,
    mode: Mode,
}

impl<'a> GraphToMatrix<'a> {
    /// Creates an adapter producing the graphic matrix
    pub fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            mode: Mode::Graphic,
        }
    }

    /// Updates the produced matrix kind
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Classifies the graph's edges and computes the matrix.
    ///
    /// # Errors
    /// Returns an input error if the edge labels are structurally invalid or if the
    /// row-labeled edges do not form a spanning forest of the graph.
    pub fn convert(&self, graph: &TaggedGraph) -> Result<BinMatrix> {
        let classified = classify(graph)?;
        let represented = self.engine.represent(
            graph,
            &classified.forest,
            &classified.coforest,
            self.mode,
        );

        if !represented.is_valid_forest {
            return Err(GraphmatError::Input(
                "the row-labeled edges do not form a spanning forest of the graph".to_string(),
            ));
        }

        debug!(
            rows = represented.matrix.num_rows(),
            columns = represented.matrix.num_columns(),
            "graph conversion finished"
        );
        Ok(represented.matrix)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::element::Element;

    /// Path 0-1-2 with forest edges r1, r2 and the closing chord c1
    fn labeled_triangle() -> TaggedGraph {
        let mut graph = TaggedGraph::new(3);
        graph.add_tagged_edge(0, 1, Element::Row(0));
        graph.add_tagged_edge(1, 2, Element::Row(1));
        graph.add_tagged_edge(0, 2, Element::Column(0));
        graph
    }

    #[test]
    fn labeled_triangle_produces_a_two_by_one_matrix() {
        let engine = Engine::new();
        let matrix = GraphToMatrix::new(&engine)
            .convert(&labeled_triangle())
            .unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.num_columns(), 1);
        assert_eq!(matrix.entry(0, 0), 1);
        assert_eq!(matrix.entry(1, 0), 1);
    }

    #[test]
    fn cographic_mode_produces_the_transpose() {
        let engine = Engine::new();
        let graphic = GraphToMatrix::new(&engine)
            .convert(&labeled_triangle())
            .unwrap();
        let cographic = GraphToMatrix::new(&engine)
            .mode(Mode::Cographic)
            .convert(&labeled_triangle())
            .unwrap();

        assert_eq!(cographic, graphic.transposed());
    }

    #[test]
    fn invalid_forest_is_rejected() {
        // three row-labeled edges forming a cycle
        let mut graph = TaggedGraph::new(3);
        graph.add_tagged_edge(0, 1, Element::Row(0));
        graph.add_tagged_edge(1, 2, Element::Row(1));
        graph.add_tagged_edge(2, 0, Element::Row(2));

        let engine = Engine::new();
        let error = GraphToMatrix::new(&engine).convert(&graph).unwrap_err();
        assert!(matches!(error, GraphmatError::Input(_)));
    }

    #[test]
    fn structurally_invalid_labels_are_rejected() {
        let mut graph = TaggedGraph::new(2);
        graph.add_tagged_edge(0, 1, Element::Row(5));

        let engine = Engine::new();
        assert!(GraphToMatrix::new(&engine).convert(&graph).is_err());
    }
}
