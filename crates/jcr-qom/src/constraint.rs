use std::fmt;

use crate::name;
use crate::DynamicOperand;
use crate::Operator;
use crate::StaticOperand;

/// A row filter under `WHERE`.
///
/// *Constraint*:
///     And | Or | Not | Comparison | PropertyExistence | FullTextSearch |
///     SameNode | ChildNode | DescendantNode
///
/// Defined in the JCR 2.0 specification, §6.7.12–6.7.25. `And` and `Or`
/// groups parenthesize themselves on output, so nesting always survives a
/// reparse; a property compared against `NULL` is represented as
/// `Not(PropertyExistence)` and renders in the `NOT … IS NOT NULL` form.
///
/// ### Example
/// ```rust
/// use jcr_qom::Constraint;
///
/// let exists = Constraint::PropertyExistence {
///     selector: Some(String::from("a")),
///     property: String::from("title"),
/// };
/// let missing = Constraint::Not(Box::new(exists));
/// assert_eq!(missing.to_string(), "NOT a.title IS NOT NULL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Both constraints hold.
    And(Box<Constraint>, Box<Constraint>),
    /// Either constraint holds.
    Or(Box<Constraint>, Box<Constraint>),
    /// The constraint does not hold.
    Not(Box<Constraint>),
    /// `operand1 <operator> operand2`
    Comparison {
        /// The per-row operand; the grammar only ever puts it on the left.
        operand1: DynamicOperand,
        /// Comparison operator.
        operator: Operator,
        /// The fixed operand; always on the right.
        operand2: StaticOperand,
    },
    /// `property IS NOT NULL`
    PropertyExistence {
        /// Selector the property is read from; the default selector when absent.
        selector: Option<String>,
        /// Property name.
        property: String,
    },
    /// `CONTAINS(scope, expression)`
    FullTextSearch {
        /// Selector searched; the default selector when absent.
        selector: Option<String>,
        /// Property searched; all properties when absent (`*`).
        property: Option<String>,
        /// The full-text search expression.
        expression: StaticOperand,
    },
    /// `ISSAMENODE([selector, ]path)`
    SameNode {
        /// Constrained selector; the default selector when absent.
        selector: Option<String>,
        /// Absolute path the node must be at.
        path: String,
    },
    /// `ISCHILDNODE([selector, ]path)`
    ChildNode {
        /// Constrained selector; the default selector when absent.
        selector: Option<String>,
        /// Absolute path of the parent.
        path: String,
    },
    /// `ISDESCENDANTNODE([selector, ]path)`
    DescendantNode {
        /// Constrained selector; the default selector when absent.
        selector: Option<String>,
        /// Absolute path of the ancestor.
        path: String,
    },
}

impl Constraint {
    fn write_located(
        f: &mut fmt::Formatter<'_>,
        function: &str,
        selector: Option<&str>,
        path: &str,
    ) -> fmt::Result {
        write!(f, "{function}(")?;
        if let Some(selector) = selector {
            write!(f, "{selector}, ")?;
        }
        name::write_path(f, path)?;
        f.write_str(")")
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
            Self::Not(constraint) => write!(f, "NOT {constraint}"),
            Self::Comparison {
                operand1,
                operator,
                operand2,
            } => {
                // `a.b=c` re-lexes cleanly, `aLIKE'c'` would not.
                if *operator == Operator::Like {
                    write!(f, "{operand1} LIKE {operand2}")
                } else {
                    write!(f, "{operand1}{operator}{operand2}")
                }
            }
            Self::PropertyExistence { selector, property } => {
                name::write_property(f, selector.as_deref(), property)?;
                f.write_str(" IS NOT NULL")
            }
            Self::FullTextSearch {
                selector,
                property,
                expression,
            } => {
                f.write_str("CONTAINS(")?;
                match (selector.as_deref(), property.as_deref()) {
                    (selector, Some(property)) => name::write_property(f, selector, property)?,
                    (Some(selector), None) => write!(f, "{selector}.*")?,
                    (None, None) => f.write_str("*")?,
                }
                write!(f, ", {expression})")
            }
            Self::SameNode { selector, path } => {
                Self::write_located(f, "ISSAMENODE", selector.as_deref(), path)
            }
            Self::ChildNode { selector, path } => {
                Self::write_located(f, "ISCHILDNODE", selector.as_deref(), path)
            }
            Self::DescendantNode { selector, path } => {
                Self::write_located(f, "ISDESCENDANTNODE", selector.as_deref(), path)
            }
        }
    }
}
