//! # Realization Search
//!
//! Decides whether a 0/±1 matrix is graphic and, if so, constructs a realizing graph.
//!
//! The matrix is graphic exactly if there is a forest whose edges are the matrix rows
//! such that the support of every column forms a path in that forest; the co-forest
//! edge of a column then connects the two path ends. The search works on the `2m`
//! endpoint slots of the `m` row edges: laying out a column as a path means chaining
//! its row edges, identifying the tail slot of each edge with the head slot of the
//! next. Identifications are tracked in a union-find with rollback; a second
//! union-find additionally connects the two slots of every row edge, so an
//! identification that would close a cycle among forest edges is rejected
//! immediately.
//!
//! Columns are processed shortest support first and each column enumerates its chain
//! orders and edge orientations with backtracking. The two traversal directions of a
//! path produce identical identifications, so one of them is discarded. The state
//! count is bounded by the caller-supplied budget.

use itertools::Itertools;

use crate::{
    element::Index,
    error::{GraphmatError, Result},
    repr::{BinMatrix, TaggedGraph},
    utils::RollbackDsu,
    Node, INVALID_EDGE, INVALID_NODE,
};

use super::{Realization, RecognitionStats};

/// Endpoint slots of a row edge: `(head, tail)` in the chosen orientation
fn slots(row: Index, forward: bool) -> (u32, u32) {
    if forward {
        (2 * row, 2 * row + 1)
    } else {
        (2 * row + 1, 2 * row)
    }
}

/// One column of the matrix with its layout state
#[derive(Debug)]
struct ColumnLayout {
    /// Column index in the matrix
    index: Index,
    /// Rows of the nonzero entries
    support: Vec<Index>,
    /// Endpoint slots of the laid-out path, once chosen
    ends: Option<(u32, u32)>,
}

struct Realizer {
    columns: Vec<ColumnLayout>,
    /// Identification of endpoint slots into graph nodes
    merged: RollbackDsu,
    /// Like `merged`, but additionally connecting the two slots of every row edge
    connected: RollbackDsu,
    states: u64,
    budget: u64,
}

impl Realizer {
    fn tick(&mut self) -> Result<()> {
        self.states += 1;
        if self.states > self.budget {
            return Err(GraphmatError::Memory(
                "realization search exceeded its state budget".to_string(),
            ));
        }
        Ok(())
    }

    /// Identifies two endpoint slots. Fails exactly if the identification would close
    /// a cycle among the forest edges.
    fn attach(&mut self, x: u32, y: u32) -> bool {
        if self.merged.same(x, y) {
            return true;
        }
        if self.connected.same(x, y) {
            return false;
        }
        self.merged.union(x, y);
        self.connected.union(x, y);
        true
    }

    /// Lays out column `k` and recurses into the remaining columns
    fn solve(&mut self, k: usize) -> Result<bool> {
        if k == self.columns.len() {
            return Ok(true);
        }

        let support = self.columns[k].support.clone();
        if support.is_empty() {
            // all-zero column: realized as a loop, no layout needed
            return self.solve(k + 1);
        }

        let mut used = vec![false; support.len()];
        for pos in 0..support.len() {
            let row = support[pos];
            // a single-edge path is symmetric under orientation
            let orientations: &[bool] = if support.len() == 1 {
                &[true]
            } else {
                &[true, false]
            };

            for &forward in orientations {
                let (start, end) = slots(row, forward);
                used[pos] = true;
                if self.extend(k, &support, &mut used, start, row, row, end, 1)? {
                    return Ok(true);
                }
                used[pos] = false;
            }
        }

        Ok(false)
    }

    /// Extends the chain of column `k` by one more row edge, or completes it
    #[allow(clippy::too_many_arguments)]
    fn extend(
        &mut self,
        k: usize,
        support: &[Index],
        used: &mut [bool],
        start: u32,
        first_row: Index,
        last_row: Index,
        end: u32,
        placed: usize,
    ) -> Result<bool> {
        self.tick()?;

        if placed == support.len() {
            // both traversal directions of a chain produce the same identifications
            if support.len() > 1 && first_row > last_row {
                return Ok(false);
            }

            self.columns[k].ends = Some((start, end));
            if self.solve(k + 1)? {
                return Ok(true);
            }
            self.columns[k].ends = None;
            return Ok(false);
        }

        for pos in 0..support.len() {
            if used[pos] {
                continue;
            }
            let row = support[pos];

            for forward in [true, false] {
                let (head, tail) = slots(row, forward);
                let merged_mark = self.merged.checkpoint();
                let connected_mark = self.connected.checkpoint();

                if self.attach(end, head) {
                    used[pos] = true;
                    if self.extend(k, support, used, start, first_row, row, tail, placed + 1)? {
                        return Ok(true);
                    }
                    used[pos] = false;
                }

                self.merged.rollback(merged_mark);
                self.connected.rollback(connected_mark);
            }
        }

        Ok(false)
    }

    /// Builds the realizing graph from the completed layout
    fn into_realization(self, num_rows: Index, num_columns: Index) -> Realization {
        let num_slots = 2 * num_rows as usize;

        let mut class_node = vec![INVALID_NODE; num_slots];
        let mut graph = TaggedGraph::new(0);
        let merged = &self.merged;
        let mut node_of = |graph: &mut TaggedGraph, slot: u32| -> Node {
            let root = merged.find(slot) as usize;
            if class_node[root] == INVALID_NODE {
                class_node[root] = graph.add_node();
            }
            class_node[root]
        };

        let mut row_edges = Vec::with_capacity(num_rows as usize);
        for row in 0..num_rows {
            let u = node_of(&mut graph, 2 * row);
            let v = node_of(&mut graph, 2 * row + 1);
            row_edges.push(graph.add_edge(u, v));
        }

        let mut column_edges = vec![INVALID_EDGE; num_columns as usize];
        for col in &self.columns {
            let edge = match col.ends {
                Some((start, end)) => {
                    let u = node_of(&mut graph, start);
                    let v = node_of(&mut graph, end);
                    graph.add_edge(u, v)
                }
                None => {
                    // all-zero column: a loop at an arbitrary node
                    if graph.number_of_nodes() == 0 {
                        graph.add_node();
                    }
                    graph.add_edge(0, 0)
                }
            };
            column_edges[col.index as usize] = edge;
        }

        Realization {
            graph,
            row_edges,
            column_edges,
            edges_reversed: None,
        }
    }
}

/// Searches for a realization of `matrix`. Returns `None` if the matrix is not
/// graphic.
///
/// # Errors
/// Returns a memory error if the search exceeds `budget` states.
pub(crate) fn realize(
    matrix: &BinMatrix,
    budget: u64,
    stats: &mut RecognitionStats,
) -> Result<Option<Realization>> {
    let num_rows = matrix.num_rows();
    let num_columns = matrix.num_columns();

    let mut supports: Vec<Vec<Index>> = vec![Vec::new(); num_columns as usize];
    for (r, c, _) in matrix.entries() {
        supports[c as usize].push(r);
    }

    let mut columns = supports
        .into_iter()
        .enumerate()
        .map(|(c, support)| ColumnLayout {
            index: c as Index,
            support,
            ends: None,
        })
        .collect_vec();
    // short paths first: they constrain the layout cheaply and prune longer ones
    columns.sort_by_key(|col| col.support.len());

    let num_slots = 2 * num_rows as usize;
    let mut connected = RollbackDsu::new(num_slots);
    for row in 0..num_rows {
        connected.union(2 * row, 2 * row + 1);
    }

    let mut realizer = Realizer {
        columns,
        merged: RollbackDsu::new(num_slots),
        connected,
        states: 0,
        budget,
    };

    let solved = realizer.solve(0);
    stats.search_states += realizer.states;

    match solved {
        Err(e) => Err(e),
        Ok(false) => Ok(None),
        Ok(true) => Ok(Some(realizer.into_realization(num_rows, num_columns))),
    }
}
