use std::fmt;

use crate::Column;
use crate::Constraint;
use crate::Ordering;
use crate::Source;

/// A complete query over the repository.
///
/// *Query*:
///     **SELECT** columns **FROM** Source [**WHERE** Constraint]
///     [**ORDER BY** orderings]
///
/// Defined in the JCR 2.0 specification, §6.7.1. An empty column list stands
/// for "all columns" and renders as `SELECT *`.
///
/// ### Example
/// ```rust
/// use jcr_qom::{Query, Source};
///
/// let query = Query {
///     source: Source::Selector {
///         node_type: String::from("nt:base"),
///         alias: None,
///     },
///     constraint: None,
///     orderings: Vec::new(),
///     columns: Vec::new(),
/// };
/// assert_eq!(query.to_string(), "SELECT * FROM [nt:base]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The node-tuple source.
    pub source: Source,
    /// Row filter, when given.
    pub constraint: Option<Constraint>,
    /// Sort keys, most significant first.
    pub orderings: Vec<Ordering>,
    /// Result columns; empty means all columns.
    pub columns: Vec<Column>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.columns.is_empty() {
            f.write_str("*")?;
        } else {
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{column}")?;
            }
        }
        write!(f, " FROM {}", self.source)?;
        if let Some(constraint) = &self.constraint {
            write!(f, " WHERE {constraint}")?;
        }
        if !self.orderings.is_empty() {
            f.write_str(" ORDER BY ")?;
            for (i, ordering) in self.orderings.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{ordering}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynamicOperand;
    use crate::Order;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_every_clause_in_canonical_order() {
        let query = Query {
            source: Source::Selector {
                node_type: String::from("nt:unstructured"),
                alias: Some(String::from("a")),
            },
            constraint: Some(Constraint::PropertyExistence {
                selector: Some(String::from("a")),
                property: String::from("title"),
            }),
            orderings: vec![
                Ordering {
                    operand: DynamicOperand::PropertyValue {
                        selector: Some(String::from("a")),
                        property: String::from("title"),
                    },
                    order: Order::Ascending,
                },
                Ordering {
                    operand: DynamicOperand::FullTextSearchScore {
                        selector: Some(String::from("a")),
                    },
                    order: Order::Descending,
                },
            ],
            columns: vec![
                Column::Property {
                    selector: Some(String::from("a")),
                    property: String::from("title"),
                    alias: None,
                },
                Column::All {
                    selector: String::from("a"),
                },
            ],
        };
        assert_eq!(
            query.to_string(),
            "SELECT a.title, a.* FROM [nt:unstructured] AS a \
             WHERE a.title IS NOT NULL ORDER BY a.title ASC, SCORE(a) DESC"
        );
    }
}
