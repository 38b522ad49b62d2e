//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/)
//! to allow for detailed visualizations. We only use basic functionality: an undirected
//! graph whose edges carry element labels, with spanning-forest edges emphasized so
//! that the forest is visually separable from the co-forest.
//!
//! This format is write-only.

use super::*;
use crate::{element::Element, Edge};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name of the graph in the document header
    name: String,
    /// Prefix of a node (default: 'v_')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            name: "G".to_string(),
            prefix: "v_".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the graph in the document header
    pub fn graph_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the prefix of a node (`v_` by default)
    pub fn node_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening line of the (undirected) graph document
    pub fn start_graph<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "graph {} {{", self.name)
    }

    /// Writes a single labeled edge. Forest edges are emphasized (bold, red).
    pub fn write_labeled_edge<W: Write>(
        &self,
        writer: &mut W,
        Edge(u, v): Edge,
        element: Element,
        in_forest: bool,
    ) -> Result<()> {
        let p = &self.prefix;
        if in_forest {
            writeln!(
                writer,
                " {p}{u} -- {p}{v} [label=\"{element}\",style=bold,color=red];"
            )
        } else {
            writeln!(writer, " {p}{u} -- {p}{v} [label=\"{element}\"];")
        }
    }

    /// Closes the Dot-Graph, thus finishing the document
    pub fn finish_graph<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn document_shape() {
        let mut buffer = Cursor::new(Vec::new());
        let writer = DotWriter::new();

        writer.start_graph(&mut buffer).unwrap();
        writer
            .write_labeled_edge(&mut buffer, Edge(0, 1), Element::Row(0), true)
            .unwrap();
        writer
            .write_labeled_edge(&mut buffer, Edge(1, 2), Element::Column(0), false)
            .unwrap();
        writer.finish_graph(&mut buffer).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(
            text,
            "graph G {\n v_0 -- v_1 [label=\"r1\",style=bold,color=red];\n v_1 -- v_2 [label=\"c1\"];\n}\n"
        );
    }

    #[test]
    fn custom_prefix_and_name() {
        let mut buffer = Cursor::new(Vec::new());
        let writer = DotWriter::new().graph_name("forest").node_prefix("n");

        writer.start_graph(&mut buffer).unwrap();
        writer
            .write_labeled_edge(&mut buffer, Edge(4, 2), Element::Column(3), false)
            .unwrap();
        writer.finish_graph(&mut buffer).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(text, "graph forest {\n n4 -- n2 [label=\"c4\"];\n}\n");
    }
}
