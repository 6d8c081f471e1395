use std::fmt;

use crate::name;
use crate::JoinCondition;

/// The node-tuple source a query ranges over.
///
/// *Source*:
///     Selector | Join
///
/// Defined in the JCR 2.0 specification, §6.7.2–6.7.5. A join nests further
/// sources on either side, so chained joins form a left-leaning tree.
///
/// ### Example
/// ```rust
/// use jcr_qom::Source;
///
/// let source = Source::Selector {
///     node_type: String::from("nt:unstructured"),
///     alias: Some(String::from("a")),
/// };
/// assert_eq!(source.to_string(), "[nt:unstructured] AS a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A node-type binding, `[nodeType] AS name`.
    Selector {
        /// The node type selected from.
        node_type: String,
        /// The selector name the rest of the query refers to this binding by.
        alias: Option<String>,
    },
    /// Two sources related by a join condition.
    Join {
        /// Left-hand source.
        left: Box<Source>,
        /// Right-hand source.
        right: Box<Source>,
        /// Inner or outer join.
        join_type: JoinType,
        /// The condition relating the two sides.
        condition: JoinCondition,
    },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector { node_type, alias } => {
                if name::is_bracketed(node_type) {
                    write!(f, "{node_type}")?;
                } else {
                    write!(f, "[{node_type}]")?;
                }
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::Join {
                left,
                right,
                join_type,
                condition,
            } => write!(f, "{left} {join_type} {right} ON {condition}"),
        }
    }
}

/// The join types of JCR-SQL2.
///
/// *JoinType*:
///     **JOIN** | **INNER JOIN** | **LEFT OUTER JOIN** | **RIGHT OUTER JOIN**
///
/// Defined in the JCR 2.0 specification, §6.7.6. Inner joins render as the
/// bare `JOIN`, which the grammar defines as inner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// `JOIN`
    Inner,
    /// `LEFT OUTER JOIN`
    LeftOuter,
    /// `RIGHT OUTER JOIN`
    RightOuter,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => f.write_str("JOIN"),
            Self::LeftOuter => f.write_str("LEFT OUTER JOIN"),
            Self::RightOuter => f.write_str("RIGHT OUTER JOIN"),
        }
    }
}
