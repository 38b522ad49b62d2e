/*!
# Matrix Elements

A matrix coordinate is either "row `i`" or "column `j`" (both 0-based). We tag the two
kinds in a closed enum so that a row index can never be confused with a column index.

The textual form is 1-based: row 0 is written `r1`, column 2 is written `c3`. This is
the label attached to graph edges in edge-list files and DOT output.
*/

use std::{
    fmt::{self, Display},
    io::ErrorKind,
    str::FromStr,
};

/// Row/column indices of a matrix
pub type Index = u32;

/// A tagged row-or-column coordinate of a matrix
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    /// The 0-based index of a row
    Row(Index),
    /// The 0-based index of a column
    Column(Index),
}

impl Element {
    /// Returns *true* if the element refers to a row
    pub fn is_row(&self) -> bool {
        matches!(self, Element::Row(_))
    }

    /// Returns *true* if the element refers to a column
    pub fn is_column(&self) -> bool {
        matches!(self, Element::Column(_))
    }

    /// Returns the 0-based row index.
    /// ** Panics if the element is a column **
    pub fn row_index(&self) -> Index {
        match self {
            Element::Row(i) => *i,
            Element::Column(_) => panic!("requested the row index of a column element"),
        }
    }

    /// Returns the 0-based column index.
    /// ** Panics if the element is a row **
    pub fn column_index(&self) -> Index {
        match self {
            Element::Column(j) => *j,
            Element::Row(_) => panic!("requested the column index of a row element"),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Row(i) => write!(f, "r{}", i + 1),
            Element::Column(j) => write!(f, "c{}", j + 1),
        }
    }
}

impl FromStr for Element {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        let (kind, digits) = match (s.strip_prefix('r'), s.strip_prefix('c')) {
            (Some(digits), _) => (Element::Row as fn(Index) -> Element, digits),
            (_, Some(digits)) => (Element::Column as fn(Index) -> Element, digits),
            _ => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Element label must start with `r` or `c`, got {s:?}"),
                ));
            }
        };

        match digits.parse::<Index>() {
            Ok(value) if value >= 1 => Ok(kind(value - 1)),
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Element label needs a 1-based index, got {s:?}"),
            )),
        }
    }
}
