use std::fmt;

/// The comparison operators of JCR-SQL2.
///
/// *Operator*:
///     **=** | **<>** | **<** | **<=** | **>** | **>=** | **LIKE**
///
/// Defined in the JCR 2.0 specification, §6.7.17.
///
/// ### Example
/// ```rust
/// use jcr_qom::Operator;
///
/// assert_eq!(Operator::NotEqualTo.to_string(), "<>");
/// assert_eq!(Operator::from_token("like"), Some(Operator::Like));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    EqualTo,
    /// `<>`
    NotEqualTo,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqualTo,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqualTo,
    /// `LIKE`
    Like,
}

impl Operator {
    /// Map an operator token to its constant. Symbolic operators match
    /// exactly; `LIKE` matches case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::EqualTo),
            "<>" => Some(Self::NotEqualTo),
            "<" => Some(Self::LessThan),
            "<=" => Some(Self::LessThanOrEqualTo),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterThanOrEqualTo),
            _ if token.eq_ignore_ascii_case("LIKE") => Some(Self::Like),
            _ => None,
        }
    }

    /// The textual form of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EqualTo => "=",
            Self::NotEqualTo => "<>",
            Self::LessThan => "<",
            Self::LessThanOrEqualTo => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqualTo => ">=",
            Self::Like => "LIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_tokens_both_ways() {
        let operators = [
            (Operator::EqualTo, "="),
            (Operator::NotEqualTo, "<>"),
            (Operator::LessThan, "<"),
            (Operator::LessThanOrEqualTo, "<="),
            (Operator::GreaterThan, ">"),
            (Operator::GreaterThanOrEqualTo, ">="),
            (Operator::Like, "LIKE"),
        ];
        for (operator, text) in operators {
            assert_eq!(operator.to_string(), text);
            assert_eq!(Operator::from_token(text), Some(operator));
        }
    }

    #[test]
    fn it_rejects_unknown_tokens() {
        assert_eq!(Operator::from_token("!="), None);
        assert_eq!(Operator::from_token(""), None);
    }
}
