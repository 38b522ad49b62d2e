//! # Output Rendering
//!
//! Turns a realization into edge-list or DOT text and a witness into its index-list
//! form. Orientation-reversal flags are applied here, at render time; the stored
//! graph is never rewritten.
//!
//! In graphic mode the forest edges carry row labels and are printed first, followed
//! by the co-forest edges with column labels. In cographic mode the realized forest
//! corresponds to the original matrix's columns, so the label kinds swap while the
//! forest-first order stays.

use std::io::{Result, Write};

use crate::{
    element::{Element, Index},
    engine::{Mode, Realization},
    io::{DotWriter, EdgeListWriter},
    repr::Submatrix,
};

/// Label constructors for forest and co-forest edges under the given mode
fn label_kinds(mode: Mode) -> (fn(Index) -> Element, fn(Index) -> Element) {
    match mode {
        Mode::Graphic => (Element::Row, Element::Column),
        Mode::Cographic => (Element::Column, Element::Row),
    }
}

/// Writes the realization as a labeled edge list
pub fn write_edge_list<W: Write>(
    writer: &mut W,
    realization: &Realization,
    mode: Mode,
) -> Result<()> {
    let (forest_element, coforest_element) = label_kinds(mode);
    let edge_list = EdgeListWriter::new();

    for (i, &e) in realization.row_edges.iter().enumerate() {
        edge_list.write_edge(
            writer,
            realization.oriented_endpoints(e),
            forest_element(i as Index),
        )?;
    }
    for (j, &e) in realization.column_edges.iter().enumerate() {
        edge_list.write_edge(
            writer,
            realization.oriented_endpoints(e),
            coforest_element(j as Index),
        )?;
    }

    Ok(())
}

/// Writes the realization as a DOT document with the forest edges emphasized
pub fn write_dot<W: Write>(writer: &mut W, realization: &Realization, mode: Mode) -> Result<()> {
    let (forest_element, coforest_element) = label_kinds(mode);
    let dot = DotWriter::new();

    dot.start_graph(writer)?;
    for (i, &e) in realization.row_edges.iter().enumerate() {
        dot.write_labeled_edge(
            writer,
            realization.oriented_endpoints(e),
            forest_element(i as Index),
            true,
        )?;
    }
    for (j, &e) in realization.column_edges.iter().enumerate() {
        dot.write_labeled_edge(
            writer,
            realization.oriented_endpoints(e),
            coforest_element(j as Index),
            false,
        )?;
    }
    dot.finish_graph(writer)
}

/// Writes the witness as 1-based row and column index lists, preserving the order of
/// the witness itself
pub fn write_witness_elements<W: Write>(writer: &mut W, witness: &Submatrix) -> Result<()> {
    let (rows, columns) = witness.describe();

    let list = |values: Vec<Index>| {
        values
            .into_iter()
            .map(|v| format!(" {v}"))
            .collect::<String>()
    };
    writeln!(writer, "{} rows:{}", rows.len(), list(rows))?;
    writeln!(writer, "{} columns:{}", columns.len(), list(columns))
}
