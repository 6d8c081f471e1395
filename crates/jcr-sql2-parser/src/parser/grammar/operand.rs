use jcr_qom::QueryObjectModelFactory;

use crate::lexer::Token;
use crate::lexer::TokenKind;
use crate::parser::grammar;
use crate::parser::Keyword;
use crate::parser::Parser;
use crate::Error;

/// An `[selectorName.]propertyName` pair, brackets stripped, as consumed by
/// the shared identifier production. `token` is the first token, kept for
/// error positions.
pub(crate) struct Ident<'a> {
    pub(crate) selector: Option<&'a str>,
    pub(crate) property: &'a str,
    pub(crate) token: Token<'a>,
}

/// The identifier shared by comparisons, existence checks, join conditions
/// and columns: one name token, qualified by a selector when a `.` follows.
/// `*` is accepted and left to the caller, for the productions that allow
/// a wildcard property.
pub(crate) fn identifier<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
) -> Result<Ident<'a>, Error> {
    let token = p.pop();
    if !matches!(
        token.kind(),
        TokenKind::Word | TokenKind::Bracketed | TokenKind::Star
    ) {
        return Err(p.err("expected an identifier", token));
    }
    let first = grammar::strip_brackets(token.data());
    if p.at(TokenKind::Dot) {
        p.pop();
        let second = p.pop();
        if !matches!(
            second.kind(),
            TokenKind::Word | TokenKind::Bracketed | TokenKind::Star
        ) {
            return Err(p.err("expected a property name after `.`", second));
        }
        Ok(Ident {
            selector: Some(first),
            property: grammar::strip_brackets(second.data()),
            token,
        })
    } else {
        Ok(Ident {
            selector: None,
            property: first,
            token,
        })
    }
}

/// See: JCR 2.0 specification, §6.7.26 DynamicOperand
///
/// *DynamicOperand*:
///     PropertyValue | Length | NodeName | NodeLocalName |
///     FullTextSearchScore | LowerCase | UpperCase
///
/// A function keyword only opens its function form when followed by `(`;
/// otherwise it is an ordinary property name, so `ORDER BY score` sorts by
/// a property called `score`.
pub(crate) fn dynamic_operand<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::DynamicOperand, Error> {
    p.enter_recursion()?;
    let keyword = p.keyword();
    let is_call = p.peek_n(1).kind() == TokenKind::LParen;
    let operand = match keyword {
        Some(Keyword::Length) if is_call => {
            p.pop();
            p.pop();
            let ident = identifier(p)?;
            let value = p.factory().property_value(ident.property, ident.selector);
            p.expect(TokenKind::RParen, "`)`")?;
            p.factory().length(value)
        }
        Some(Keyword::Name) if is_call => {
            p.pop();
            p.pop();
            let selector = selector_argument(p)?;
            p.factory().node_name(selector)
        }
        Some(Keyword::LocalName) if is_call => {
            p.pop();
            p.pop();
            let selector = selector_argument(p)?;
            p.factory().node_local_name(selector)
        }
        Some(Keyword::Score) if is_call => {
            p.pop();
            p.pop();
            let selector = selector_argument(p)?;
            p.factory().full_text_search_score(selector)
        }
        Some(Keyword::Lower) if is_call => {
            p.pop();
            p.pop();
            let inner = dynamic_operand(p)?;
            p.expect(TokenKind::RParen, "`)`")?;
            p.factory().lower_case(inner)
        }
        Some(Keyword::Upper) if is_call => {
            p.pop();
            p.pop();
            let inner = dynamic_operand(p)?;
            p.expect(TokenKind::RParen, "`)`")?;
            p.factory().upper_case(inner)
        }
        _ => {
            let ident = identifier(p)?;
            p.factory().property_value(ident.property, ident.selector)
        }
    };
    p.exit_recursion();
    Ok(operand)
}

/// The argument list of `NAME`, `LOCALNAME` and `SCORE`: an optional
/// selector name, then the closing paren. Empty means the default selector.
fn selector_argument<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
) -> Result<Option<&'a str>, Error> {
    if p.at(TokenKind::RParen) {
        p.pop();
        return Ok(None);
    }
    let selector = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(Some(selector))
}

/// See: JCR 2.0 specification, §6.7.34–35 StaticOperand
///
/// *StaticOperand*:
///     Literal | CastLiteral | BindVariableValue
pub(crate) fn static_operand<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::StaticOperand, Error> {
    if p.at(TokenKind::Dollar) {
        p.pop();
        let token = p.pop();
        if token.kind() != TokenKind::Word {
            return Err(p.err("expected a bind variable name after `$`", token));
        }
        return Ok(p.factory().bind_variable(token.data()));
    }
    if p.keyword() == Some(Keyword::Cast) && p.peek_n(1).kind() == TokenKind::LParen {
        return cast_literal(p);
    }
    let value = literal(p)?;
    Ok(p.factory().literal(value))
}

/// **CAST(** 'value' **AS** propertyType **)**
fn cast_literal<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::StaticOperand, Error> {
    p.pop();
    p.pop();
    let token = p.pop();
    if token.kind() != TokenKind::Quoted {
        return Err(p.err("expected a quoted literal in CAST", token));
    }
    let value = quoted_value(p, token)?;
    p.expect_keyword(Keyword::As)?;
    let property_type = p.pop();
    if property_type.kind() != TokenKind::Word {
        return Err(p.err("expected a property type", property_type));
    }
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(p.factory().cast_literal(value, property_type.data()))
}

/// See: JCR 2.0 specification, §6.7.34 Literal
///
/// A quoted token with its quotes stripped, or a bare word taken verbatim.
pub(crate) fn literal<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
) -> Result<&'a str, Error> {
    let token = p.pop();
    match token.kind() {
        TokenKind::Quoted => quoted_value(p, token),
        TokenKind::Word => Ok(token.data()),
        _ => Err(p.err("expected a literal", token)),
    }
}

/// The inside of a quoted token, checking that the closing quote is there.
fn quoted_value<'a, F: QueryObjectModelFactory>(
    p: &Parser<'a, F>,
    token: Token<'a>,
) -> Result<&'a str, Error> {
    let data = token.data();
    let quote = data.as_bytes()[0];
    if data.len() >= 2 && data.as_bytes()[data.len() - 1] == quote {
        Ok(&data[1..data.len() - 1])
    } else {
        Err(p.err("unterminated string literal", token))
    }
}

/// See: JCR 2.0 specification, §6.7.23 Path
///
/// A path is written as a literal; one bracket pair is stripped, then any
/// quotes inside it, so `[/a]`, `["/a b"]` and `'/a b'` all canonicalize.
pub(crate) fn path<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
) -> Result<&'a str, Error> {
    let token = p.pop();
    match token.kind() {
        TokenKind::Bracketed => {
            let inner = grammar::strip_brackets(token.data());
            Ok(strip_path_quotes(inner))
        }
        TokenKind::Quoted => quoted_value(p, token),
        TokenKind::Word => Ok(token.data()),
        _ => Err(p.err("expected a path", token)),
    }
}

fn strip_path_quotes(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'\'' || bytes[0] == b'"') && bytes[bytes.len() - 1] == bytes[0]
    {
        &path[1..path.len() - 1]
    } else {
        path
    }
}
