use std::fmt;

use crate::DynamicOperand;

/// One sort key of a query.
///
/// *Ordering*:
///     DynamicOperand [**ASC** | **DESC**]
///
/// Defined in the JCR 2.0 specification, §6.7.38. The direction defaults to
/// ascending in the grammar; it is always rendered explicitly.
///
/// ### Example
/// ```rust
/// use jcr_qom::{DynamicOperand, Order, Ordering};
///
/// let ordering = Ordering {
///     operand: DynamicOperand::FullTextSearchScore { selector: None },
///     order: Order::Descending,
/// };
/// assert_eq!(ordering.to_string(), "SCORE() DESC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    /// The operand rows are sorted by.
    pub operand: DynamicOperand,
    /// Sort direction.
    pub order: Order,
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operand, self.order)
    }
}

/// A sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `ASC`
    Ascending,
    /// `DESC`
    Descending,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ASC"),
            Self::Descending => f.write_str("DESC"),
        }
    }
}
