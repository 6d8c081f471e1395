use std::fmt;

use crate::name;

/// One column of a query's result table.
///
/// *Column*:
///     ([selectorName**.**]propertyName [**AS** columnName]) |
///     (selectorName**.\***)
///
/// Defined in the JCR 2.0 specification, §6.7.39. The "all columns" form
/// `SELECT *` is not a column at all but an empty column list on the query.
///
/// ### Example
/// ```rust
/// use jcr_qom::Column;
///
/// let column = Column::Property {
///     selector: Some(String::from("a")),
///     property: String::from("jcr:title"),
///     alias: Some(String::from("t")),
/// };
/// assert_eq!(column.to_string(), "a.[jcr:title] AS t");
///
/// let wildcard = Column::All {
///     selector: String::from("a"),
/// };
/// assert_eq!(wildcard.to_string(), "a.*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A single property, optionally renamed in the result.
    Property {
        /// Selector the property is read from; the default selector when absent.
        selector: Option<String>,
        /// Property name.
        property: String,
        /// Column name in the result table.
        alias: Option<String>,
    },
    /// Every property of one selector, `selector.*`.
    All {
        /// The selector whose properties are all included.
        selector: String,
    },
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property {
                selector,
                property,
                alias,
            } => {
                name::write_property(f, selector.as_deref(), property)?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::All { selector } => write!(f, "{selector}.*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_bare_property_columns() {
        let column = Column::Property {
            selector: None,
            property: String::from("title"),
            alias: None,
        };
        assert_eq!(column.to_string(), "title");
    }

    #[test]
    fn it_brackets_namespaced_columns() {
        let column = Column::Property {
            selector: None,
            property: String::from("jcr:created"),
            alias: None,
        };
        assert_eq!(column.to_string(), "[jcr:created]");
    }
}
