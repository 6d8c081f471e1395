pub(crate) mod column;
pub(crate) mod constraint;
pub(crate) mod operand;
pub(crate) mod ordering;
pub(crate) mod source;

use jcr_qom::QueryObjectModelFactory;

use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::Error;

/// Strip one outermost `[` … `]` pair. Tokens with only one of the two
/// brackets pass through verbatim.
pub(crate) fn strip_brackets(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('[') && token.ends_with(']') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Consume one name token, brackets stripped. `expected` names the
/// production for the error message.
pub(crate) fn name<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
    expected: &str,
) -> Result<&'a str, Error> {
    let token = p.pop();
    if matches!(token.kind(), TokenKind::Word | TokenKind::Bracketed) {
        Ok(strip_brackets(token.data()))
    } else {
        Err(p.err(format!("expected {expected}"), token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_strips_only_complete_bracket_pairs() {
        assert_eq!(strip_brackets("[nt:base]"), "nt:base");
        assert_eq!(strip_brackets("nt:base"), "nt:base");
        assert_eq!(strip_brackets("[nt:base"), "[nt:base");
        assert_eq!(strip_brackets("nt:base]"), "nt:base]");
        assert_eq!(strip_brackets("[]"), "");
    }
}
