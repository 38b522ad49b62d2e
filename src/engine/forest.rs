//! # Fundamental Matrix
//!
//! Builds the matrix represented by a graph with explicit forest/co-forest edge
//! assignments: entry `(r, c)` is set iff forest edge `r` lies on the forest path
//! between the endpoints of co-forest edge `c`.
//!
//! The computation also validates the assignment: every slot must be filled, the
//! referenced edges must be distinct and loop-free, together they must cover all
//! edges of the graph, and the forest edges must form a spanning forest. A failed
//! check does not abort the computation; the endpoints of an unreachable co-forest
//! edge simply yield an all-zero column and the validity flag is cleared.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::{
    element::Index,
    repr::{BinMatrix, TaggedGraph},
    Edge, EdgeId, Node, INVALID_NODE,
};

type ForestAdjacency = Vec<SmallVec<[(Node, Index); 4]>>;

/// Computes the fundamental matrix of `graph` under the given assignment, together
/// with whether the assignment is a valid spanning forest.
pub(crate) fn fundamental_matrix(
    graph: &TaggedGraph,
    forest: &[Option<EdgeId>],
    coforest: &[Option<EdgeId>],
) -> (BinMatrix, bool) {
    let num_rows = forest.len() as Index;
    let num_columns = coforest.len() as Index;
    let num_nodes = graph.number_of_nodes() as usize;

    let mut valid = true;

    // every graph edge must be referenced exactly once across both arrays
    let mut referenced = vec![false; graph.number_of_edges() as usize];
    for slot in forest.iter().chain(coforest) {
        match *slot {
            Some(e) if !referenced[e as usize] => referenced[e as usize] = true,
            _ => valid = false,
        }
    }
    valid &= referenced.iter().all(|&r| r);

    // adjacency restricted to the assigned forest edges
    let mut adj: ForestAdjacency = vec![SmallVec::new(); num_nodes];
    let mut num_forest_edges = 0usize;
    for (row, slot) in forest.iter().enumerate() {
        if let Some(e) = *slot {
            let Edge(u, v) = graph.endpoints(e);
            if u == v {
                // a forest has no loops
                valid = false;
                continue;
            }
            adj[u as usize].push((v, row as Index));
            adj[v as usize].push((u, row as Index));
            num_forest_edges += 1;
        }
    }

    // acyclic and spanning: the forest components must have exactly
    // `n - #components` edges and must not be refined by any graph edge
    let component = forest_components(&adj, num_nodes);
    let num_components = component
        .iter()
        .copied()
        .max()
        .map_or(0, |max| max as usize + 1);
    valid &= num_forest_edges == num_nodes - num_components;
    valid &= graph.edges().all(|(_, Edge(u, v))| {
        component[u as usize] == component[v as usize]
    });

    let mut triplets = Vec::new();
    for (col, slot) in coforest.iter().enumerate() {
        let Some(e) = *slot else { continue };
        let Edge(u, v) = graph.endpoints(e);
        if u == v {
            // a loop closes the empty path: an all-zero column
            continue;
        }

        match forest_path(&adj, num_nodes, u, v) {
            Some(rows) => triplets.extend(rows.into_iter().map(|r| (r, col as Index, 1))),
            None => valid = false,
        }
    }

    (
        BinMatrix::from_triplets(num_rows, num_columns, triplets),
        valid,
    )
}

/// Labels every node with its connected component in the forest adjacency
fn forest_components(adj: &ForestAdjacency, num_nodes: usize) -> Vec<Node> {
    let mut component = vec![INVALID_NODE; num_nodes];
    let mut next = 0;
    let mut queue = VecDeque::new();

    for start in 0..num_nodes {
        if component[start] != INVALID_NODE {
            continue;
        }

        component[start] = next;
        queue.push_back(start as Node);
        while let Some(u) = queue.pop_front() {
            for &(v, _) in &adj[u as usize] {
                if component[v as usize] == INVALID_NODE {
                    component[v as usize] = next;
                    queue.push_back(v);
                }
            }
        }
        next += 1;
    }

    component
}

/// Returns the rows of the forest edges on a path from `source` to `target`, or
/// `None` if the two are not connected in the forest adjacency
fn forest_path(
    adj: &ForestAdjacency,
    num_nodes: usize,
    source: Node,
    target: Node,
) -> Option<Vec<Index>> {
    let mut parent: Vec<(Node, Index)> = vec![(INVALID_NODE, 0); num_nodes];
    parent[source as usize] = (source, 0);

    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        if u == target {
            break;
        }
        for &(v, row) in &adj[u as usize] {
            if parent[v as usize].0 == INVALID_NODE {
                parent[v as usize] = (u, row);
                queue.push_back(v);
            }
        }
    }

    if parent[target as usize].0 == INVALID_NODE {
        return None;
    }

    let mut rows = Vec::new();
    let mut u = target;
    while u != source {
        let (p, row) = parent[u as usize];
        rows.push(row);
        u = p;
    }
    Some(rows)
}
