//! # Dense
//!
//! The Dense-Format consists of a header `rows columns` followed by `rows * columns`
//! whitespace-separated entries in row-major order. Line breaks carry no meaning
//! beyond separating tokens.

use itertools::Itertools;

use super::*;
use crate::element::Index;

/// A MatrixReader for the Dense-Format
#[derive(Debug, Clone, Default)]
pub struct DenseReader;

impl DenseReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl MatrixReader for DenseReader {
    fn try_read_matrix<R: BufRead>(&self, reader: R) -> Result<BinMatrix> {
        let mut dims: Option<(Index, Index)> = None;
        let mut header: Vec<Index> = Vec::with_capacity(2);
        let mut entries: Vec<i8> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            for token in line.split(' ').filter(|t| !t.is_empty()) {
                match dims {
                    Some((num_rows, num_columns)) => {
                        raise_error_unless!(
                            entries.len() < num_rows as usize * num_columns as usize,
                            ErrorKind::InvalidData,
                            "More entries than the dimension header announced."
                        );
                        entries.push(parse_entry(token)?);
                    }
                    None => {
                        let value = match token.parse::<Index>() {
                            Ok(value) => value,
                            Err(_) => {
                                return Err(io_error!(
                                    ErrorKind::InvalidData,
                                    format!("Invalid dimension header token {token:?}")
                                ));
                            }
                        };

                        header.push(value);
                        if header.len() == 2 {
                            dims = Some((header[0], header[1]));
                            entries.reserve(header[0] as usize * header[1] as usize);
                        }
                    }
                }
            }
        }

        let (num_rows, num_columns) = dims.ok_or(io_error!(
            ErrorKind::NotFound,
            "Dimension header not found"
        ))?;
        raise_error_unless!(
            entries.len() == num_rows as usize * num_columns as usize,
            ErrorKind::InvalidData,
            format!(
                "Expected {} entries for a {num_rows}x{num_columns} matrix, found {}.",
                num_rows as usize * num_columns as usize,
                entries.len()
            )
        );

        Ok(BinMatrix::from_row_major(num_rows, num_columns, &entries))
    }
}

/// A MatrixWriter for the Dense-Format
#[derive(Debug, Clone)]
pub struct DenseWriter {
    /// Character printed for zero entries
    zero_glyph: char,
    /// Whether the dimension header is written
    header: bool,
}

impl Default for DenseWriter {
    fn default() -> Self {
        Self {
            zero_glyph: '0',
            header: true,
        }
    }
}

impl DenseWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the character printed for zero entries
    pub fn zero_glyph(mut self, glyph: char) -> Self {
        self.zero_glyph = glyph;
        self
    }

    /// Enables or disables the dimension header
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl MatrixWriter for DenseWriter {
    fn try_write_matrix<W: Write>(&self, matrix: &BinMatrix, mut writer: W) -> Result<()> {
        if self.header {
            writeln!(writer, "{} {}", matrix.num_rows(), matrix.num_columns())?;
        }

        let mut row = vec![0i8; matrix.num_columns() as usize];
        for r in 0..matrix.num_rows() {
            row.fill(0);
            for (c, v) in matrix.row_entries(r) {
                row[c as usize] = v;
            }

            let line = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        self.zero_glyph.to_string()
                    } else {
                        v.to_string()
                    }
                })
                .join(" ");
            writeln!(writer, "{line}")?;
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
        let input = "2 3\n1 0 1\n0 1 0\n";
        let matrix = DenseReader::new().try_read_matrix(Cursor::new(input)).unwrap();

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.num_columns(), 3);
        assert_eq!(matrix.number_of_nonzeros(), 3);
        assert_eq!(matrix.entry(0, 2), 1);
        assert_eq!(matrix.entry(1, 0), 0);
    }

    #[test]
    fn read_ignores_line_layout() {
        let grid = DenseReader::new()
            .try_read_matrix(Cursor::new("2 2 1 0\n\n0 -1"))
            .unwrap();
        assert_eq!(grid.entry(0, 0), 1);
        assert_eq!(grid.entry(1, 1), -1);
    }

    #[test]
    fn read_rejects_malformed() {
        for input in [
            "",
            "2",
            "2 2\n1 0 1",
            "2 2\n1 0 1 0 1",
            "2 2\n1 0 2 0",
            "x 2\n1 0 0 1",
        ] {
            assert!(
                DenseReader::new().try_read_matrix(Cursor::new(input)).is_err(),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn write_round_trip() {
        let matrix = BinMatrix::from_row_major(2, 3, &[1, 0, -1, 0, 1, 0]);

        let mut buffer = Cursor::new(Vec::new());
        DenseWriter::new().try_write_matrix(&matrix, &mut buffer).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(text, "2 3\n1 0 -1\n0 1 0\n");

        let reread = DenseReader::new().try_read_matrix(Cursor::new(text)).unwrap();
        assert_eq!(reread, matrix);
    }

    #[test]
    fn write_with_custom_glyph_and_no_header() {
        let matrix = BinMatrix::from_row_major(1, 3, &[0, 1, 0]);

        let mut buffer = Cursor::new(Vec::new());
        DenseWriter::new()
            .zero_glyph('.')
            .header(false)
            .try_write_matrix(&matrix, &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer.into_inner()).unwrap(), ". 1 .\n");
    }
}
