//! # Witness Minimization
//!
//! Shrinks a non-graphic matrix to a minimal violating submatrix by greedy deletion:
//! a row or column is dropped whenever the remaining selection is still non-graphic.
//!
//! Graphicness is closed under taking submatrices (dropping a column removes a
//! co-forest edge, dropping a row contracts a forest edge). Hence once an element
//! survives its deletion test, dropping it from any later, smaller selection yields a
//! submatrix of a graphic matrix and is graphic as well: a single pass over rows and
//! columns suffices, and every element of the result is necessary.

use crate::{element::Index, error::Result, repr::{BinMatrix, Submatrix}};

use super::{realize::realize, RecognitionStats};

/// Minimizes the given non-graphic matrix to a violating submatrix from which no
/// single row or column can be dropped. Must only be called on a matrix on which
/// [`realize`] returned `None`.
///
/// # Errors
/// Returns a memory error if a deletion test exceeds `budget` states.
pub(crate) fn minimal_violator(
    matrix: &BinMatrix,
    budget: u64,
    stats: &mut RecognitionStats,
) -> Result<Submatrix> {
    let mut rows: Vec<Index> = (0..matrix.num_rows()).collect();
    let mut columns: Vec<Index> = (0..matrix.num_columns()).collect();

    let mut i = 0;
    while i < rows.len() {
        let mut candidate = rows.clone();
        candidate.remove(i);

        stats.calls += 1;
        let sub = Submatrix::new(candidate.clone(), columns.clone());
        if realize(&matrix.zoom(&sub), budget, stats)?.is_none() {
            rows = candidate;
        } else {
            i += 1;
        }
    }

    let mut j = 0;
    while j < columns.len() {
        let mut candidate = columns.clone();
        candidate.remove(j);

        stats.calls += 1;
        let sub = Submatrix::new(rows.clone(), candidate.clone());
        if realize(&matrix.zoom(&sub), budget, stats)?.is_none() {
            columns = candidate;
        } else {
            j += 1;
        }
    }

    Ok(Submatrix::new(rows, columns))
}

#[cfg(test)]
mod test {
    use super::*;

    const BUDGET: u64 = 1 << 24;

    /// The standard representation of the Fano plane, the smallest non-graphic case
    fn fano() -> BinMatrix {
        BinMatrix::from_row_major(3, 4, &[0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1])
    }

    fn is_graphic(matrix: &BinMatrix) -> bool {
        realize(matrix, BUDGET, &mut RecognitionStats::default())
            .unwrap()
            .is_some()
    }

    #[test]
    fn minimally_violating_matrix_is_its_own_witness() {
        let matrix = fano();
        let mut stats = RecognitionStats::default();
        let witness = minimal_violator(&matrix, BUDGET, &mut stats).unwrap();

        assert_eq!(witness.rows(), &[0, 1, 2]);
        assert_eq!(witness.columns(), &[0, 1, 2, 3]);
        assert!(stats.calls > 0);
    }

    #[test]
    fn embedded_violator_is_cut_out() {
        // fano at rows {1,3,4} x columns {0,2,4,5}, padded with zero rows, a zero
        // column, and a single-entry column
        let fano = fano();
        let rows = [1, 3, 4];
        let columns = [0, 2, 4, 5];

        let mut triplets = Vec::new();
        for (r, c, v) in fano.entries() {
            triplets.push((rows[r as usize], columns[c as usize], v));
        }
        triplets.push((1, 3, 1));
        let matrix = BinMatrix::from_triplets(5, 6, triplets);

        let witness =
            minimal_violator(&matrix, BUDGET, &mut RecognitionStats::default()).unwrap();
        assert_eq!(witness.rows(), &rows);
        assert_eq!(witness.columns(), &columns);

        // the zoomed witness is itself non-graphic with matching dimensions
        let violator = matrix.zoom(&witness);
        assert_eq!(violator.num_rows() as usize, witness.num_rows());
        assert_eq!(violator.num_columns() as usize, witness.num_columns());
        assert!(!is_graphic(&violator));
    }

    #[test]
    fn dropping_any_witness_element_restores_graphicness() {
        let matrix = fano();
        let witness =
            minimal_violator(&matrix, BUDGET, &mut RecognitionStats::default()).unwrap();
        let violator = matrix.zoom(&witness);

        for i in 0..witness.num_rows() {
            let mut rows: Vec<Index> = (0..violator.num_rows()).collect();
            rows.remove(i);
            let columns = (0..violator.num_columns()).collect();
            assert!(is_graphic(&violator.zoom(&Submatrix::new(rows, columns))));
        }
        for j in 0..witness.num_columns() {
            let rows = (0..violator.num_rows()).collect();
            let mut columns: Vec<Index> = (0..violator.num_columns()).collect();
            columns.remove(j);
            assert!(is_graphic(&violator.zoom(&Submatrix::new(rows, columns))));
        }
    }
}
