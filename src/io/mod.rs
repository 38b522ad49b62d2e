/*!
# IO

Utilities for reading and writing matrices and graphs from and to different file formats.

## Matrix Formats

- **Dense**: a `rows columns` header followed by a row-major grid of entries.
- **Sparse**: a `rows columns nonzeros` header followed by one `row column value`
  triple per nonzero, 1-based.

## Graph Formats

- **EdgeList**: one `u v element-label` triple per line, where the label (`r3`, `c1`)
  associates the edge with a matrix row or column.
- **Dot**: the [DOT language](https://graphviz.org/doc/info/lang.html) of
  [GraphViz](https://graphviz.org/). Write-only.

## Traits

- [`MatrixReader`] / [`MatrixWriter`] are implemented by readers and writers for a
  specific matrix format.
- [`MatrixRead`] / [`MatrixWrite`] abstract over reading/writing using a given
  [`MatrixFormat`].
- [`GraphReader`] is implemented by graph readers (currently only [`EdgeListReader`]).
*/

pub mod dense;
pub mod dot;
pub mod edge_list;
pub mod sparse;

use std::{
    io::{BufRead, ErrorKind, Result, Write},
    str::FromStr,
};

use crate::repr::BinMatrix;

pub use dense::*;
pub use dot::*;
pub use edge_list::*;
pub use sparse::*;

/// Identifier for a matrix file format
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MatrixFormat {
    /// Header plus row-major grid
    Dense,
    /// Header plus coordinate triples
    Sparse,
}

/// Identifier for a graph file format
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// One labeled edge per line
    EdgeList,
    /// DOT language of GraphViz (write-only)
    Dot,
}

/// Any file format accepted on the command line.
///
/// The two categories are kept apart so that a conversion, once validated, can match
/// exhaustively over the formats that are actually possible for its direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// A matrix format
    Matrix(MatrixFormat),
    /// A graph format
    Graph(GraphFormat),
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dense" => Ok(FileFormat::Matrix(MatrixFormat::Dense)),
            "sparse" => Ok(FileFormat::Matrix(MatrixFormat::Sparse)),
            "edgelist" => Ok(FileFormat::Graph(GraphFormat::EdgeList)),
            "dot" => Ok(FileFormat::Graph(GraphFormat::Dot)),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown file format: {s}")
            )),
        }
    }
}

impl std::fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixFormat::Dense => write!(f, "dense"),
            MatrixFormat::Sparse => write!(f, "sparse"),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::EdgeList => write!(f, "edgelist"),
            GraphFormat::Dot => write!(f, "dot"),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Matrix(m) => write!(f, "{m}"),
            FileFormat::Graph(g) => write!(f, "{g}"),
        }
    }
}

/// Trait for types that can read matrices in a specific format
pub trait MatrixReader {
    /// Reads a matrix from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a matrix in the
    /// expected format.
    fn try_read_matrix<R>(&self, reader: R) -> Result<BinMatrix>
    where
        R: BufRead;
}

/// Trait for types that can write matrices in a specific format
pub trait MatrixWriter {
    /// Writes the given matrix to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_matrix<W>(&self, matrix: &BinMatrix, writer: W) -> Result<()>
    where
        W: Write;
}

/// Trait for types that can read graphs in a specific format
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a graph in the
    /// expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;
}

/// Trait for reading matrices when only a [`MatrixFormat`] is known
pub trait MatrixRead: Sized {
    /// Reads a matrix from the given reader according to the specified [`MatrixFormat`]
    fn try_from_reader<R>(reader: R, format: MatrixFormat) -> Result<Self>
    where
        R: BufRead;
}

impl MatrixRead for BinMatrix {
    fn try_from_reader<R>(reader: R, format: MatrixFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            MatrixFormat::Dense => DenseReader::new().try_read_matrix(reader),
            MatrixFormat::Sparse => SparseReader::new().try_read_matrix(reader),
        }
    }
}

/// Trait for writing matrices when only a [`MatrixFormat`] is known
pub trait MatrixWrite {
    /// Writes the matrix to the given writer according to the specified [`MatrixFormat`]
    fn try_write_to_writer<W>(&self, writer: W, format: MatrixFormat) -> Result<()>
    where
        W: Write;
}

impl MatrixWrite for BinMatrix {
    fn try_write_to_writer<W>(&self, writer: W, format: MatrixFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            MatrixFormat::Dense => DenseWriter::new().try_write_matrix(self, writer),
            MatrixFormat::Sparse => SparseWriter::new().try_write_matrix(self, writer),
        }
    }
}

/// Parses a single matrix entry and checks it is in the supported alphabet
pub(crate) fn parse_entry(token: &str) -> Result<i8> {
    match token.parse::<i8>() {
        Ok(v @ -1..=1) => Ok(v),
        _ => Err(io_error!(
            ErrorKind::InvalidData,
            format!("Matrix entries must be -1, 0, or 1, got {token:?}")
        )),
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_tokens_round_trip() {
        for token in ["dense", "sparse", "edgelist", "dot"] {
            let format: FileFormat = token.parse().unwrap();
            assert_eq!(format.to_string(), token);
        }

        assert!("metis".parse::<FileFormat>().is_err());
        assert_eq!(
            "DENSE".parse::<FileFormat>().unwrap(),
            FileFormat::Matrix(MatrixFormat::Dense)
        );
    }

    #[test]
    fn entry_alphabet() {
        assert_eq!(parse_entry("0").unwrap(), 0);
        assert_eq!(parse_entry("1").unwrap(), 1);
        assert_eq!(parse_entry("-1").unwrap(), -1);

        for bad in ["2", "-2", "x", "", "1.0"] {
            assert!(parse_entry(bad).is_err());
        }
    }
}
