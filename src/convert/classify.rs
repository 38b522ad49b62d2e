//! # Forest/Co-forest Classification
//!
//! Partitions the edges of a tagged graph into the forest array (one slot per
//! row-labeled edge, indexed by row) and the co-forest array (one slot per
//! column-labeled edge, indexed by column).
//!
//! A well-formed edge list labels its edges `r1..rk` and `c1..cl` with every label
//! used exactly once. Anything else (an unlabeled edge, an index beyond the counted
//! range, a label used twice) is a structural error of the input and is rejected
//! instead of being silently dropped.

use crate::{
    element::Element,
    error::{GraphmatError, Result},
    repr::TaggedGraph,
    EdgeId,
};

/// The forest/co-forest assignment of a graph's edges
#[derive(Debug, Clone)]
pub struct Classified {
    /// One slot per row, holding the edge labeled with that row
    pub forest: Vec<Option<EdgeId>>,
    /// One slot per column, holding the edge labeled with that column
    pub coforest: Vec<Option<EdgeId>>,
}

/// Classifies every edge of `graph` by its element label.
///
/// # Errors
/// Returns an input error if an edge carries no label, a label's index does not fall
/// into the counted range, or a label appears more than once.
pub fn classify(graph: &TaggedGraph) -> Result<Classified> {
    let tagged = graph
        .edges()
        .map(|(id, _)| match graph.tag(id) {
            Some(element) => Ok((id, element)),
            None => Err(GraphmatError::Input(format!(
                "edge {id} carries no element label"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    let (num_forest, num_coforest) = tagged
        .iter()
        .fold((0, 0), |(rows, columns), (_, element)| match element {
            Element::Row(_) => (rows + 1, columns),
            Element::Column(_) => (rows, columns + 1),
        });

    let mut forest: Vec<Option<EdgeId>> = vec![None; num_forest];
    let mut coforest: Vec<Option<EdgeId>> = vec![None; num_coforest];

    for &(id, element) in &tagged {
        let (slots, index) = match element {
            Element::Row(i) => (&mut forest, i as usize),
            Element::Column(j) => (&mut coforest, j as usize),
        };

        if index >= slots.len() {
            return Err(GraphmatError::Input(format!(
                "element label {element} is out of range: the graph has {} edges with that label kind",
                slots.len()
            )));
        }
        if slots[index].is_some() {
            return Err(GraphmatError::Input(format!(
                "element label {element} appears more than once"
            )));
        }
        slots[index] = Some(id);
    }

    // counted slots, in-range indices, no duplicates: every slot is filled
    debug_assert!(forest.iter().chain(&coforest).all(|s| s.is_some()));

    Ok(Classified { forest, coforest })
}
