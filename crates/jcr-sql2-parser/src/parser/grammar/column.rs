use jcr_qom::QueryObjectModelFactory;

use crate::lexer::TokenKind;
use crate::parser::grammar;
use crate::parser::grammar::operand;
use crate::parser::Keyword;
use crate::parser::Parser;
use crate::Error;

/// See: JCR 2.0 specification, §6.7.39 columns
///
/// *columns*:
///     **\*** | Column [**,** Column]*
///
/// The bare `*` selects all columns and yields an empty column list.
pub(crate) fn columns<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<Vec<F::Column>, Error> {
    if p.at(TokenKind::Star) {
        p.pop();
        return Ok(Vec::new());
    }
    let mut columns = vec![column(p)?];
    while p.at(TokenKind::Comma) {
        p.pop();
        columns.push(column(p)?);
    }
    Ok(columns)
}

/// See: JCR 2.0 specification, §6.7.39 Column
///
/// *Column*:
///     ([selectorName**.**]propertyName [**AS** columnName]) |
///     (selectorName**.\***)
fn column<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<F::Column, Error> {
    let ident = operand::identifier(p)?;
    if ident.property == "*" {
        let Some(selector) = ident.selector else {
            return Err(p.err("a wildcard column needs a selector", ident.token));
        };
        return Ok(p.factory().wildcard_column(selector));
    }
    let alias = if p.at_keyword(Keyword::As) {
        p.pop();
        Some(grammar::name(p, "a column name")?)
    } else {
        None
    };
    Ok(p.factory().column(ident.property, alias, ident.selector))
}
