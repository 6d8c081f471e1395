use std::fmt;

use crate::name;

/// The condition relating the two sides of a join.
///
/// *JoinCondition*:
///     EquiJoinCondition | SameNodeJoinCondition |
///     ChildNodeJoinCondition | DescendantNodeJoinCondition
///
/// Defined in the JCR 2.0 specification, §6.7.7–6.7.11.
///
/// ### Example
/// ```rust
/// use jcr_qom::JoinCondition;
///
/// let condition = JoinCondition::EquiJoin {
///     selector1: String::from("a"),
///     property1: String::from("jcr:uuid"),
///     selector2: String::from("b"),
///     property2: String::from("ref"),
/// };
/// assert_eq!(condition.to_string(), "a.[jcr:uuid]=b.ref");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinCondition {
    /// `selector1.property1 = selector2.property2`
    EquiJoin {
        /// Left selector name.
        selector1: String,
        /// Property on the left selector.
        property1: String,
        /// Right selector name.
        selector2: String,
        /// Property on the right selector.
        property2: String,
    },
    /// `ISSAMENODE(selector1, selector2[, path])`
    SameNode {
        /// Left selector name.
        selector1: String,
        /// Right selector name.
        selector2: String,
        /// Relative path from the right node, when given.
        path: Option<String>,
    },
    /// `ISCHILDNODE(childSelector, parentSelector)`
    ChildNode {
        /// Selector bound to the child node.
        child_selector: String,
        /// Selector bound to the parent node.
        parent_selector: String,
    },
    /// `ISDESCENDANTNODE(descendantSelector, ancestorSelector)`
    DescendantNode {
        /// Selector bound to the descendant node.
        descendant_selector: String,
        /// Selector bound to the ancestor node.
        ancestor_selector: String,
    },
}

impl fmt::Display for JoinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EquiJoin {
                selector1,
                property1,
                selector2,
                property2,
            } => {
                name::write_property(f, Some(selector1.as_str()), property1)?;
                f.write_str("=")?;
                name::write_property(f, Some(selector2.as_str()), property2)
            }
            Self::SameNode {
                selector1,
                selector2,
                path,
            } => {
                write!(f, "ISSAMENODE({selector1}, {selector2}")?;
                if let Some(path) = path {
                    f.write_str(", ")?;
                    name::write_path(f, path)?;
                }
                f.write_str(")")
            }
            Self::ChildNode {
                child_selector,
                parent_selector,
            } => write!(f, "ISCHILDNODE({child_selector}, {parent_selector})"),
            Self::DescendantNode {
                descendant_selector,
                ancestor_selector,
            } => write!(
                f,
                "ISDESCENDANTNODE({descendant_selector}, {ancestor_selector})"
            ),
        }
    }
}
