//! # Sparse
//!
//! The Sparse-Format consists of a header `rows columns nonzeros` followed by one
//! `row column value` triple per nonzero entry. Row and column indices are 1-based;
//! token layout across lines is free.

use itertools::Itertools;

use super::*;
use crate::element::Index;

/// A MatrixReader for the Sparse-Format
#[derive(Debug, Clone, Default)]
pub struct SparseReader;

impl SparseReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

/// Parses a 1-based coordinate token and converts it to 0-based
fn parse_coordinate(token: &str, limit: Index, what: &str) -> Result<Index> {
    match token.parse::<Index>() {
        Ok(value) if value >= 1 && value <= limit => Ok(value - 1),
        _ => Err(io_error!(
            ErrorKind::InvalidData,
            format!("{what} must be between 1 and {limit}, got {token:?}")
        )),
    }
}

impl MatrixReader for SparseReader {
    fn try_read_matrix<R: BufRead>(&self, reader: R) -> Result<BinMatrix> {
        let mut header: Vec<usize> = Vec::with_capacity(3);
        let mut triplets: Vec<(Index, Index, i8)> = Vec::new();
        let mut pending_row: Option<Index> = None;
        let mut pending_column: Option<Index> = None;

        for line in reader.lines() {
            let line = line?;
            for token in line.split(' ').filter(|t| !t.is_empty()) {
                if header.len() < 3 {
                    match token.parse::<usize>() {
                        Ok(value) => header.push(value),
                        Err(_) => {
                            return Err(io_error!(
                                ErrorKind::InvalidData,
                                format!("Invalid header token {token:?}")
                            ));
                        }
                    }
                    continue;
                }

                let (num_rows, num_columns) = (header[0] as Index, header[1] as Index);
                if pending_row.is_none() {
                    pending_row = Some(parse_coordinate(token, num_rows, "Row index")?);
                } else if pending_column.is_none() {
                    pending_column = Some(parse_coordinate(token, num_columns, "Column index")?);
                } else {
                    let value = parse_entry(token)?;
                    raise_error_unless!(
                        value != 0,
                        ErrorKind::InvalidData,
                        "Sparse entries must be nonzero."
                    );
                    triplets.push((
                        pending_row.take().unwrap(),
                        pending_column.take().unwrap(),
                        value,
                    ));
                }
            }
        }

        raise_error_unless!(
            header.len() == 3,
            ErrorKind::NotFound,
            "Dimension header not found"
        );
        raise_error_unless!(
            pending_row.is_none() && pending_column.is_none(),
            ErrorKind::InvalidData,
            "Premature end of input within a coordinate triple."
        );
        raise_error_unless!(
            triplets.len() == header[2],
            ErrorKind::InvalidData,
            format!(
                "Expected {} nonzeros, found {}.",
                header[2],
                triplets.len()
            )
        );

        let positions = triplets.iter().map(|&(r, c, _)| (r, c)).sorted().collect_vec();
        raise_error_unless!(
            positions.windows(2).all(|w| w[0] != w[1]),
            ErrorKind::InvalidData,
            "Duplicate coordinate in sparse input."
        );

        Ok(BinMatrix::from_triplets(
            header[0] as Index,
            header[1] as Index,
            triplets,
        ))
    }
}

/// A MatrixWriter for the Sparse-Format
#[derive(Debug, Clone, Default)]
pub struct SparseWriter;

impl SparseWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl MatrixWriter for SparseWriter {
    fn try_write_matrix<W: Write>(&self, matrix: &BinMatrix, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {} {}",
            matrix.num_rows(),
            matrix.num_columns(),
            matrix.number_of_nonzeros()
        )?;

        for (r, c, v) in matrix.entries() {
            writeln!(writer, "{} {} {}", r + 1, c + 1, v)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_simple() {
        let input = "2 3 3\n1 1 1\n1 3 -1\n2 2 1\n";
        let matrix = SparseReader::new().try_read_matrix(Cursor::new(input)).unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.num_columns(), 3);
        assert_eq!(matrix.number_of_nonzeros(), 3);
        assert_eq!(matrix.entry(0, 0), 1);
        assert_eq!(matrix.entry(0, 2), -1);
        assert_eq!(matrix.entry(1, 1), 1);
        assert_eq!(matrix.entry(1, 0), 0);
    }

    #[test]
    fn read_rejects_malformed() {
        for input in [
            "",
            "2 3",
            "2 3 1",
            "2 3 1\n1 1",
            "2 3 1\n0 1 1",
            "2 3 1\n1 4 1",
            "2 3 1\n1 1 0",
            "2 3 2\n1 1 1\n1 1 1",
            "2 3 2\n1 1 1",
        ] {
            assert!(
                SparseReader::new().try_read_matrix(Cursor::new(input)).is_err(),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn write_round_trip() {
        let matrix = BinMatrix::from_triplets(3, 2, vec![(0, 1, 1), (2, 0, -1)]);

        let mut buffer = Cursor::new(Vec::new());
        SparseWriter::new().try_write_matrix(&matrix, &mut buffer).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(text, "3 2 2\n1 2 1\n3 1 -1\n");

        let reread = SparseReader::new().try_read_matrix(Cursor::new(text)).unwrap();
        assert_eq!(reread, matrix);
    }
}
