use crate::{element::Index, repr::Submatrix};

/// A rectangular matrix with entries in `{-1, 0, 1}`, stored in a compressed sparse
/// row layout (row offsets, column indices, values).
///
/// A matrix is immutable once built; derived matrices ([`BinMatrix::transposed`],
/// [`BinMatrix::zoom`]) are fresh independent objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinMatrix {
    num_rows: Index,
    num_columns: Index,
    row_starts: Vec<usize>,
    column_indices: Vec<Index>,
    values: Vec<i8>,
}

impl BinMatrix {
    /// Builds a matrix from `(row, column, value)` triplets. Triplets may be given in
    /// any order but must be unique, in range, and nonzero.
    pub fn from_triplets(
        num_rows: Index,
        num_columns: Index,
        mut triplets: Vec<(Index, Index, i8)>,
    ) -> Self {
        triplets.sort_unstable_by_key(|&(r, c, _)| (r, c));

        let mut row_starts = Vec::with_capacity(num_rows as usize + 1);
        let mut column_indices = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());

        row_starts.push(0);
        let mut last = None;
        for (r, c, v) in triplets {
            debug_assert!(r < num_rows && c < num_columns && v != 0);
            debug_assert_ne!(last, Some((r, c)), "duplicate entry at ({r},{c})");
            last = Some((r, c));

            while row_starts.len() as Index <= r {
                row_starts.push(column_indices.len());
            }
            column_indices.push(c);
            values.push(v);
        }
        while row_starts.len() as Index <= num_rows {
            row_starts.push(column_indices.len());
        }

        Self {
            num_rows,
            num_columns,
            row_starts,
            column_indices,
            values,
        }
    }

    /// Builds a matrix from a row-major value slice of length `num_rows * num_columns`
    pub fn from_row_major(num_rows: Index, num_columns: Index, entries: &[i8]) -> Self {
        assert_eq!(entries.len(), num_rows as usize * num_columns as usize);

        let triplets = entries
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(pos, &v)| {
                let r = (pos / num_columns as usize) as Index;
                let c = (pos % num_columns as usize) as Index;
                (r, c, v)
            })
            .collect();

        Self::from_triplets(num_rows, num_columns, triplets)
    }

    /// Returns the number of rows
    pub fn num_rows(&self) -> Index {
        self.num_rows
    }

    /// Returns the number of columns
    pub fn num_columns(&self) -> Index {
        self.num_columns
    }

    /// Returns the number of nonzero entries
    pub fn number_of_nonzeros(&self) -> usize {
        self.column_indices.len()
    }

    /// Returns the entry at `(r, c)`, zero included.
    /// ** Panics if `r >= num_rows || c >= num_columns` **
    pub fn entry(&self, r: Index, c: Index) -> i8 {
        assert!(r < self.num_rows && c < self.num_columns);

        let range = self.row_starts[r as usize]..self.row_starts[r as usize + 1];
        match self.column_indices[range.clone()].binary_search(&c) {
            Ok(pos) => self.values[range.start + pos],
            Err(_) => 0,
        }
    }

    /// Returns the nonzero entries of row `r` as `(column, value)` pairs in column order.
    /// ** Panics if `r >= num_rows` **
    pub fn row_entries(&self, r: Index) -> impl Iterator<Item = (Index, i8)> + '_ {
        let range = self.row_starts[r as usize]..self.row_starts[r as usize + 1];
        self.column_indices[range.clone()]
            .iter()
            .zip(&self.values[range])
            .map(|(&c, &v)| (c, v))
    }

    /// Returns all nonzero entries as `(row, column, value)` triplets in row-major order
    pub fn entries(&self) -> impl Iterator<Item = (Index, Index, i8)> + '_ {
        (0..self.num_rows)
            .flat_map(move |r| self.row_entries(r).map(move |(c, v)| (r, c, v)))
    }

    /// Returns the transpose as a fresh matrix
    pub fn transposed(&self) -> Self {
        let triplets = self.entries().map(|(r, c, v)| (c, r, v)).collect();
        Self::from_triplets(self.num_columns, self.num_rows, triplets)
    }

    /// Materializes the intersection of the given submatrix selection as a fresh
    /// matrix. Entry `(i, j)` of the result is the entry at row `sub.rows()[i]`,
    /// column `sub.columns()[j]` of `self`; the selection order is preserved.
    /// ** Panics if the selection references an index out of range **
    pub fn zoom(&self, sub: &Submatrix) -> Self {
        let mut triplets = Vec::new();
        for (i, &r) in sub.rows().iter().enumerate() {
            for (j, &c) in sub.columns().iter().enumerate() {
                let v = self.entry(r, c);
                if v != 0 {
                    triplets.push((i as Index, j as Index, v));
                }
            }
        }

        Self::from_triplets(sub.num_rows() as Index, sub.num_columns() as Index, triplets)
    }
}
