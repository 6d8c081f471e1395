use jcr_qom::QueryObjectModelFactory;

use crate::lexer::TokenKind;
use crate::parser::grammar::operand;
use crate::parser::Keyword;
use crate::parser::Parser;
use crate::Error;

/// See: JCR 2.0 specification, §6.7.37 orderings
///
/// *orderings*:
///     Ordering [**,** Ordering]*
pub(crate) fn orderings<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<Vec<F::Ordering>, Error> {
    let mut orderings = vec![ordering(p)?];
    while p.at(TokenKind::Comma) {
        p.pop();
        orderings.push(ordering(p)?);
    }
    Ok(orderings)
}

/// See: JCR 2.0 specification, §6.7.38 Ordering
///
/// *Ordering*:
///     DynamicOperand [**ASC** | **DESC**]
///
/// Ascending when the direction is omitted. Only a direction, a comma, a
/// clause keyword or the end of input may follow the operand.
fn ordering<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<F::Ordering, Error> {
    let operand = operand::dynamic_operand(p)?;
    let token = p.peek();
    match p.keyword() {
        Some(Keyword::Asc) => {
            p.pop();
            Ok(p.factory().ascending(operand))
        }
        Some(Keyword::Desc) => {
            p.pop();
            Ok(p.factory().descending(operand))
        }
        Some(Keyword::From | Keyword::Select | Keyword::Where | Keyword::Order) => {
            Ok(p.factory().ascending(operand))
        }
        Some(_) => Err(p.err("expected ASC or DESC", token)),
        None if matches!(token.kind(), TokenKind::Comma | TokenKind::Eof) => {
            Ok(p.factory().ascending(operand))
        }
        None => Err(p.err("expected ASC or DESC", token)),
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use jcr_qom::{DynamicOperand, Order};
    use pretty_assertions::assert_eq;

    #[test]
    fn it_defaults_to_ascending() {
        let query = parse("SELECT * FROM [a] ORDER BY title").unwrap();
        assert_eq!(query.orderings.len(), 1);
        assert_eq!(query.orderings[0].order, Order::Ascending);
    }

    #[test]
    fn it_parses_mixed_directions() {
        let query = parse("SELECT * FROM [a] ORDER BY title ASC, SCORE() DESC").unwrap();
        let orders: Vec<Order> = query.orderings.iter().map(|o| o.order).collect();
        assert_eq!(orders, vec![Order::Ascending, Order::Descending]);
        assert_eq!(
            query.orderings[1].operand,
            DynamicOperand::FullTextSearchScore { selector: None }
        );
    }

    #[test]
    fn it_orders_by_function_operands() {
        let query = parse("SELECT * FROM [a] ORDER BY LOWER(NAME()) DESC").unwrap();
        assert_eq!(
            query.orderings[0].operand,
            DynamicOperand::LowerCase(Box::new(DynamicOperand::NodeName { selector: None }))
        );
        assert_eq!(query.orderings[0].order, Order::Descending);
    }

    #[test]
    fn it_allows_a_clause_after_the_ordering() {
        let query = parse("ORDER BY title SELECT * FROM [a]").unwrap();
        assert_eq!(query.orderings[0].order, Order::Ascending);
        assert!(query.columns.is_empty());
    }

    #[test]
    fn it_rejects_an_invalid_direction() {
        assert!(parse("SELECT * FROM [a] ORDER BY title sideways").is_err());
    }
}
