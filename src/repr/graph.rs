use smallvec::SmallVec;

use crate::{element::Element, Edge, EdgeId, Node, NumEdges, NumNodes};

/// An undirected multigraph whose edges are addressed by [`EdgeId`] and may carry an
/// [`Element`] tag associating them with a matrix row or column.
///
/// Parallel edges and loops are allowed: a matrix column whose support is a single row
/// realizes as an edge parallel to that row's edge, and an all-zero column realizes as
/// a loop.
#[derive(Debug, Clone, Default)]
pub struct TaggedGraph {
    adj: Vec<SmallVec<[(Node, EdgeId); 4]>>,
    edges: Vec<Edge>,
    tags: Vec<Option<Element>>,
}

impl TaggedGraph {
    /// Creates a graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            adj: vec![SmallVec::new(); n as usize],
            edges: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> impl Iterator<Item = Node> {
        0..self.number_of_nodes()
    }

    /// Appends a new isolated node and returns it
    pub fn add_node(&mut self) -> Node {
        self.adj.push(SmallVec::new());
        self.number_of_nodes() - 1
    }

    /// Adds an untagged edge and returns its id.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node) -> EdgeId {
        self.add_edge_impl(u, v, None)
    }

    /// Adds an edge carrying an element tag and returns its id.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_tagged_edge(&mut self, u: Node, v: Node, tag: Element) -> EdgeId {
        self.add_edge_impl(u, v, Some(tag))
    }

    fn add_edge_impl(&mut self, u: Node, v: Node, tag: Option<Element>) -> EdgeId {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        let id = self.edges.len() as EdgeId;
        self.edges.push(Edge(u, v));
        self.tags.push(tag);

        self.adj[u as usize].push((v, id));
        if u != v {
            self.adj[v as usize].push((u, id));
        }

        id
    }

    /// Returns the endpoints of an edge in insertion order.
    /// ** Panics if `e` is not a valid edge id **
    pub fn endpoints(&self, e: EdgeId) -> Edge {
        self.edges[e as usize]
    }

    /// Returns the element tag of an edge if it carries one.
    /// ** Panics if `e` is not a valid edge id **
    pub fn tag(&self, e: EdgeId) -> Option<Element> {
        self.tags[e as usize]
    }

    /// Returns an iterator over all edges together with their ids
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, &e)| (id as EdgeId, e))
    }

    /// Returns an iterator over the neighbors of a node together with the connecting
    /// edge ids. Loops appear once.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.adj[u as usize].iter().copied()
    }

    /// Returns the number of incident edges of a node, loops counted once.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }
}
