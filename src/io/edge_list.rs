//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines `u v label` representing an edge
//! between nodes `u` and `v` that is associated with the matrix element `label`
//! (e.g. `r3` for the third row, `c1` for the first column).
//!
//! Node names are arbitrary tokens; they are interned in order of first appearance,
//! so the resulting graph numbers its nodes `0..n`. There is no header: the file is
//! read until the end of input.

use fxhash::FxHashMap;

use super::*;
use crate::{element::Element, repr::TaggedGraph, Edge, Node};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl GraphReader<TaggedGraph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<TaggedGraph> {
        let mut nodes: FxHashMap<String, Node> = FxHashMap::default();
        let mut edges: Vec<(Node, Node, Element)> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            let source: String = parse_next_value!(parts, "Source node");
            let target: String = parse_next_value!(parts, "Target node");
            let element: Element = parse_next_value!(parts, "Element label");

            let mut intern = |token: String| -> Node {
                let next = nodes.len() as Node;
                *nodes.entry(token).or_insert(next)
            };
            let u = intern(source);
            let v = intern(target);
            edges.push((u, v, element));
        }

        let mut graph = TaggedGraph::new(nodes.len() as Node);
        for (u, v, element) in edges {
            graph.add_tagged_edge(u, v, element);
        }

        Ok(graph)
    }
}

/// A writer for the EdgeList-Format, printing node ids as plain integers
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a single labeled edge line `u v label`
    pub fn write_edge<W: Write>(
        &self,
        writer: &mut W,
        Edge(u, v): Edge,
        element: Element,
    ) -> Result<()> {
        writeln!(writer, "{u} {v} {element}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_labeled_graph() {
        let input = "0 1 r1\n1 2 r2\n0 2 c1\n";
        let graph = EdgeListReader::new().try_read_graph(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.endpoints(0), Edge(0, 1));
        assert_eq!(graph.tag(0), Some(Element::Row(0)));
        assert_eq!(graph.tag(1), Some(Element::Row(1)));
        assert_eq!(graph.tag(2), Some(Element::Column(0)));
    }

    #[test]
    fn read_interns_names_in_first_seen_order() {
        let input = "b a r1\nc b c1\n";
        let graph = EdgeListReader::new().try_read_graph(Cursor::new(input)).unwrap();

        // b -> 0, a -> 1, c -> 2
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.endpoints(0), Edge(0, 1));
        assert_eq!(graph.endpoints(1), Edge(2, 0));
    }

    #[test]
    fn read_skips_comments_and_blank_lines() {
        let input = "# a comment\n\n0 1 r1\n";
        let graph = EdgeListReader::new().try_read_graph(Cursor::new(input)).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn read_rejects_malformed_lines() {
        for input in ["0 1", "0 1 x1", "0 1 r0", "0"] {
            assert!(
                EdgeListReader::new()
                    .try_read_graph(Cursor::new(input))
                    .is_err(),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn write_edge_line() {
        let mut buffer = Cursor::new(Vec::new());
        let writer = EdgeListWriter::new();
        writer
            .write_edge(&mut buffer, Edge(3, 0), Element::Column(1))
            .unwrap();
        writer
            .write_edge(&mut buffer, Edge(0, 1), Element::Row(0))
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer.into_inner()).unwrap(),
            "3 0 c2\n0 1 r1\n"
        );
    }
}
