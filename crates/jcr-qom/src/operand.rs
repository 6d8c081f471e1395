use std::fmt;

use crate::name;

/// An operand whose value is computed per row from the repository.
///
/// *DynamicOperand*:
///     PropertyValue | Length | NodeName | NodeLocalName |
///     FullTextSearchScore | LowerCase | UpperCase
///
/// Defined in the JCR 2.0 specification, §6.7.26.
///
/// ### Example
/// ```rust
/// use jcr_qom::DynamicOperand;
///
/// let operand = DynamicOperand::LowerCase(Box::new(DynamicOperand::NodeName {
///     selector: None,
/// }));
/// assert_eq!(operand.to_string(), "LOWER(NAME())");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicOperand {
    /// The value of a property, `sel.prop` or bare `prop`.
    PropertyValue {
        /// Selector the property is read from; the default selector when absent.
        selector: Option<String>,
        /// Property name.
        property: String,
    },
    /// `LENGTH(propertyValue)`
    Length(Box<DynamicOperand>),
    /// `NAME(selector?)`
    NodeName {
        /// Selector whose node name is taken; the default selector when absent.
        selector: Option<String>,
    },
    /// `LOCALNAME(selector?)`
    NodeLocalName {
        /// Selector whose local name is taken; the default selector when absent.
        selector: Option<String>,
    },
    /// `SCORE(selector?)`
    FullTextSearchScore {
        /// Selector whose score is taken; the default selector when absent.
        selector: Option<String>,
    },
    /// `LOWER(operand)`
    LowerCase(Box<DynamicOperand>),
    /// `UPPER(operand)`
    UpperCase(Box<DynamicOperand>),
}

impl fmt::Display for DynamicOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyValue { selector, property } => {
                name::write_property(f, selector.as_deref(), property)
            }
            Self::Length(operand) => write!(f, "LENGTH({operand})"),
            Self::NodeName { selector } => {
                write!(f, "NAME({})", selector.as_deref().unwrap_or_default())
            }
            Self::NodeLocalName { selector } => {
                write!(f, "LOCALNAME({})", selector.as_deref().unwrap_or_default())
            }
            Self::FullTextSearchScore { selector } => {
                write!(f, "SCORE({})", selector.as_deref().unwrap_or_default())
            }
            Self::LowerCase(operand) => write!(f, "LOWER({operand})"),
            Self::UpperCase(operand) => write!(f, "UPPER({operand})"),
        }
    }
}

/// An operand whose value is fixed for the whole query.
///
/// *StaticOperand*:
///     Literal | BindVariableValue
///
/// Defined in the JCR 2.0 specification, §6.7.34–35. Literal values are kept
/// verbatim; a cast type records the `CAST('value' AS TYPE)` form.
///
/// ### Example
/// ```rust
/// use jcr_qom::StaticOperand;
///
/// let date = StaticOperand::Literal {
///     value: String::from("2024-03-04T00:00:00.000Z"),
///     cast_type: Some(String::from("DATE")),
/// };
/// assert_eq!(date.to_string(), "CAST('2024-03-04T00:00:00.000Z' AS DATE)");
///
/// let bound = StaticOperand::BindVariable {
///     name: String::from("minPrice"),
/// };
/// assert_eq!(bound.to_string(), "$minPrice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticOperand {
    /// A literal value, optionally cast to a property type.
    Literal {
        /// The value, without quotes.
        value: String,
        /// Property type of a `CAST` literal.
        cast_type: Option<String>,
    },
    /// `$name`, bound at execution time.
    BindVariable {
        /// Variable name, without the `$`.
        name: String,
    },
}

impl fmt::Display for StaticOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal {
                value,
                cast_type: Some(cast_type),
            } => write!(f, "CAST('{value}' AS {cast_type})"),
            Self::Literal {
                value,
                cast_type: None,
            } => write!(f, "'{value}'"),
            Self::BindVariable { name } => write!(f, "${name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_property_values() {
        let bare = DynamicOperand::PropertyValue {
            selector: None,
            property: String::from("title"),
        };
        assert_eq!(bare.to_string(), "title");

        let qualified = DynamicOperand::PropertyValue {
            selector: Some(String::from("a")),
            property: String::from("jcr:title"),
        };
        assert_eq!(qualified.to_string(), "a.[jcr:title]");
    }

    #[test]
    fn it_encodes_selector_functions_with_and_without_selector() {
        let scored = DynamicOperand::FullTextSearchScore {
            selector: Some(String::from("a")),
        };
        assert_eq!(scored.to_string(), "SCORE(a)");

        let unnamed = DynamicOperand::NodeLocalName { selector: None };
        assert_eq!(unnamed.to_string(), "LOCALNAME()");
    }

    #[test]
    fn it_encodes_nested_case_functions() {
        let operand = DynamicOperand::UpperCase(Box::new(DynamicOperand::LowerCase(Box::new(
            DynamicOperand::PropertyValue {
                selector: Some(String::from("a")),
                property: String::from("title"),
            },
        ))));
        assert_eq!(operand.to_string(), "UPPER(LOWER(a.title))");
    }

    #[test]
    fn it_encodes_length_of_a_property() {
        let operand = DynamicOperand::Length(Box::new(DynamicOperand::PropertyValue {
            selector: Some(String::from("a")),
            property: String::from("jcr:data"),
        }));
        assert_eq!(operand.to_string(), "LENGTH(a.[jcr:data])");
    }

    #[test]
    fn it_encodes_plain_literals_in_single_quotes() {
        let literal = StaticOperand::Literal {
            value: String::from("hello world"),
            cast_type: None,
        };
        assert_eq!(literal.to_string(), "'hello world'");
    }
}
