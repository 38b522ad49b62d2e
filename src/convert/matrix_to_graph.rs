//! # Matrix to Graph
//!
//! Tests a matrix for being (co)graphic and, on success, hands out the realizing
//! graph together with the row/column edge maps. On failure a minimal violating
//! submatrix can be requested instead; no graph is produced in that case.

use std::time::Instant;

use tracing::debug;

use crate::{
    engine::{Engine, Mode, Recognition, RecognitionStats},
    error::Result,
    repr::BinMatrix,
};

/// Adapter driving the engine in the matrix-to-graph direction
#[derive(Debug)]
pub struct MatrixToGraph<'a> {
    engine: &'a Engine,
    mode: Mode,
    want_witness: bool,
}

impl<'a> MatrixToGraph<'a> {
    /// Creates an adapter testing for the graphic property without witness extraction
    pub fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            mode: Mode::Graphic,
            want_witness: false,
        }
    }

    /// Updates the tested property
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Requests a minimal violating submatrix on a mismatch
    pub fn witness(mut self, want_witness: bool) -> Self {
        self.want_witness = want_witness;
        self
    }

    /// Runs the recognition. The input matrix is not modified or consumed.
    ///
    /// # Errors
    /// Returns a memory error if the engine exhausts its search budget.
    pub fn convert(
        &self,
        matrix: &BinMatrix,
        stats: &mut RecognitionStats,
    ) -> Result<Recognition> {
        let start = Instant::now();
        let recognition = self
            .engine
            .recognize(matrix, self.mode, self.want_witness, stats)?;
        debug!(
            matches = recognition.matches,
            elapsed = ?start.elapsed(),
            "matrix conversion finished"
        );
        Ok(recognition)
    }
}
