use jcr_qom::Operator;
use jcr_qom::QueryObjectModelFactory;

use crate::lexer::TokenKind;
use crate::parser::grammar;
use crate::parser::grammar::operand;
use crate::parser::Keyword;
use crate::parser::Parser;
use crate::Error;

/// See: JCR 2.0 specification, §6.7.12 Constraint
///
/// One primary constraint, then `AND`/`OR` chains. The chains nest to the
/// right: `a AND b AND c` parses as `a AND (b AND c)`.
pub(crate) fn constraint<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::Constraint, Error> {
    p.enter_recursion()?;
    let left = primary_constraint(p)?;
    let result = match p.keyword() {
        Some(Keyword::And) => {
            p.pop();
            let right = constraint(p)?;
            p.factory().and(left, right)
        }
        Some(Keyword::Or) => {
            p.pop();
            let right = constraint(p)?;
            p.factory().or(left, right)
        }
        _ => left,
    };
    p.exit_recursion();
    Ok(result)
}

/// See: JCR 2.0 specification, §6.7.12–15
///
/// Dispatches on the first token: `NOT`, a parenthesized group, `CONTAINS`,
/// a location function, or an identifier opening either a property
/// existence check or a comparison. The last two need the lookahead: the
/// token right after the identifier (one ahead, or three ahead past
/// `selector.property`) decides on `IS`.
fn primary_constraint<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::Constraint, Error> {
    if p.at(TokenKind::LParen) {
        p.pop();
        let group = constraint(p)?;
        p.expect(TokenKind::RParen, "`)`")?;
        return Ok(group);
    }
    match p.keyword() {
        Some(Keyword::Not) => {
            p.pop();
            let inner = constraint(p)?;
            Ok(p.factory().not(inner))
        }
        Some(Keyword::Contains) => full_text_search(p),
        Some(Keyword::IsSameNode) => {
            let (selector, path) = location_arguments(p)?;
            Ok(p.factory().same_node(path, selector))
        }
        Some(Keyword::IsChildNode) => {
            let (selector, path) = location_arguments(p)?;
            Ok(p.factory().child_node(path, selector))
        }
        Some(Keyword::IsDescendantNode) => {
            let (selector, path) = location_arguments(p)?;
            Ok(p.factory().descendant_node(path, selector))
        }
        _ => {
            let after = if p.peek_n(1).kind() == TokenKind::Dot { 3 } else { 1 };
            if p.keyword_at(after) == Some(Keyword::Is) {
                property_existence(p)
            } else {
                comparison(p)
            }
        }
    }
}

/// See: JCR 2.0 specification, §6.7.18 PropertyExistence
///
/// *PropertyExistence*:
///     propertyName **IS NOT NULL** | propertyName **IS NULL**
///
/// `IS NULL` is the negation of an existence node.
fn property_existence<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::Constraint, Error> {
    let ident = operand::identifier(p)?;
    p.expect_keyword(Keyword::Is)?;
    if p.at_keyword(Keyword::Not) {
        p.pop();
        p.expect_keyword(Keyword::Null)?;
        Ok(p.factory().property_existence(ident.property, ident.selector))
    } else {
        p.expect_keyword(Keyword::Null)?;
        let existence = p.factory().property_existence(ident.property, ident.selector);
        Ok(p.factory().not(existence))
    }
}

/// See: JCR 2.0 specification, §6.7.16 Comparison
///
/// *Comparison*:
///     DynamicOperand Operator StaticOperand
fn comparison<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<F::Constraint, Error> {
    let operand1 = operand::dynamic_operand(p)?;
    let operator = operator(p)?;
    let operand2 = operand::static_operand(p)?;
    Ok(p.factory().comparison(operand1, operator, operand2))
}

/// See: JCR 2.0 specification, §6.7.17 Operator
fn operator<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<Operator, Error> {
    let token = p.pop();
    Operator::from_token(token.data())
        .ok_or_else(|| p.err("expected a comparison operator", token))
}

/// See: JCR 2.0 specification, §6.7.19 FullTextSearch
///
/// *FullTextSearch*:
///     **CONTAINS(** scope **,** expression **)**
///
/// The scope is `selector.property`, `selector.*`, a bare property, or
/// `*`; a `*` property searches all properties and becomes an unset
/// property name.
fn full_text_search<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::Constraint, Error> {
    p.pop();
    p.expect(TokenKind::LParen, "`(`")?;
    let ident = operand::identifier(p)?;
    let property = Some(ident.property).filter(|property| *property != "*");
    p.expect(TokenKind::Comma, "`,`")?;
    let expression = operand::static_operand(p)?;
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(p.factory().full_text_search(property, expression, ident.selector))
}

/// See: JCR 2.0 specification, §6.7.20–22
///
/// The argument list shared by `ISSAMENODE`, `ISCHILDNODE` and
/// `ISDESCENDANTNODE` constraints: an optional selector name, then a path.
fn location_arguments<'a, F: QueryObjectModelFactory>(
    p: &mut Parser<'a, F>,
) -> Result<(Option<&'a str>, &'a str), Error> {
    p.pop();
    p.expect(TokenKind::LParen, "`(`")?;
    let selector = if p.peek_n(1).kind() == TokenKind::Comma {
        let name = grammar::name(p, "a selector name")?;
        p.pop();
        Some(name)
    } else {
        None
    };
    let path = operand::path(p)?;
    p.expect(TokenKind::RParen, "`)`")?;
    Ok((selector, path))
}
