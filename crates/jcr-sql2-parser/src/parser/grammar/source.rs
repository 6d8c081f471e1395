use jcr_qom::JoinType;
use jcr_qom::QueryObjectModelFactory;

use crate::lexer::TokenKind;
use crate::parser::grammar;
use crate::parser::grammar::operand;
use crate::parser::Keyword;
use crate::parser::Parser;
use crate::Error;

/// See: JCR 2.0 specification, §6.7.2 Source
///
/// *Source*:
///     Selector | Join
///
/// Chained joins associate to the left.
pub(crate) fn source<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::Source, Error> {
    let mut left = selector(p)?;
    while matches!(
        p.keyword(),
        Some(Keyword::Join | Keyword::Inner | Keyword::Left | Keyword::Right)
    ) {
        let join_type = join_type(p)?;
        let right = selector(p)?;
        p.expect_keyword(Keyword::On)?;
        let condition = join_condition(p)?;
        left = p.factory().join(left, right, join_type, condition);
    }
    Ok(left)
}

/// See: JCR 2.0 specification, §6.7.3 Selector
///
/// *Selector*:
///     nodeTypeName [**AS** selectorName]
fn selector<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<F::Source, Error> {
    let node_type = grammar::name(p, "a node type name")?;
    let alias = if p.at_keyword(Keyword::As) {
        p.pop();
        Some(grammar::name(p, "a selector name")?)
    } else {
        None
    };
    Ok(p.factory().selector(node_type, alias))
}

/// See: JCR 2.0 specification, §6.7.6 JoinType
///
/// *JoinType*:
///     **JOIN** | **INNER JOIN** | **LEFT OUTER JOIN** | **RIGHT OUTER JOIN**
///
/// The bare `JOIN` is an inner join.
fn join_type<F: QueryObjectModelFactory>(p: &mut Parser<'_, F>) -> Result<JoinType, Error> {
    let token = p.pop();
    match Keyword::from_token(token.data()) {
        Some(Keyword::Join) => Ok(JoinType::Inner),
        Some(Keyword::Inner) => {
            p.expect_keyword(Keyword::Join)?;
            Ok(JoinType::Inner)
        }
        Some(Keyword::Left) => {
            p.expect_keyword(Keyword::Outer)?;
            p.expect_keyword(Keyword::Join)?;
            Ok(JoinType::LeftOuter)
        }
        Some(Keyword::Right) => {
            p.expect_keyword(Keyword::Outer)?;
            p.expect_keyword(Keyword::Join)?;
            Ok(JoinType::RightOuter)
        }
        _ => Err(p.err("expected a join type", token)),
    }
}

/// See: JCR 2.0 specification, §6.7.7 JoinCondition
///
/// *JoinCondition*:
///     EquiJoinCondition | SameNodeJoinCondition |
///     ChildNodeJoinCondition | DescendantNodeJoinCondition
fn join_condition<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::JoinCondition, Error> {
    match p.keyword() {
        Some(Keyword::IsSameNode) => same_node_join_condition(p),
        Some(Keyword::IsChildNode) => child_node_join_condition(p),
        Some(Keyword::IsDescendantNode) => descendant_node_join_condition(p),
        _ => equi_join_condition(p),
    }
}

/// See: JCR 2.0 specification, §6.7.8 EquiJoinCondition
///
/// *EquiJoinCondition*:
///     selector1Name**.**property1Name **=** selector2Name**.**property2Name
fn equi_join_condition<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::JoinCondition, Error> {
    let left = operand::identifier(p)?;
    let Some(selector1) = left.selector else {
        return Err(p.err("expected `selector.property` in a join condition", left.token));
    };
    p.expect(TokenKind::Eq, "`=`")?;
    let right = operand::identifier(p)?;
    let Some(selector2) = right.selector else {
        return Err(p.err("expected `selector.property` in a join condition", right.token));
    };
    Ok(p.factory()
        .equi_join_condition(selector1, left.property, selector2, right.property))
}

/// See: JCR 2.0 specification, §6.7.9 SameNodeJoinCondition
///
/// *SameNodeJoinCondition*:
///     **ISSAMENODE(** selector1Name **,** selector2Name [**,** selector2Path] **)**
fn same_node_join_condition<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::JoinCondition, Error> {
    p.pop();
    p.expect(TokenKind::LParen, "`(`")?;
    let selector1 = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::Comma, "`,`")?;
    let selector2 = grammar::name(p, "a selector name")?;
    let path = if p.at(TokenKind::Comma) {
        p.pop();
        Some(operand::path(p)?)
    } else {
        None
    };
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(p.factory()
        .same_node_join_condition(selector1, selector2, path))
}

/// See: JCR 2.0 specification, §6.7.10 ChildNodeJoinCondition
///
/// *ChildNodeJoinCondition*:
///     **ISCHILDNODE(** childSelectorName **,** parentSelectorName **)**
fn child_node_join_condition<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::JoinCondition, Error> {
    p.pop();
    p.expect(TokenKind::LParen, "`(`")?;
    let child = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::Comma, "`,`")?;
    let parent = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(p.factory().child_node_join_condition(child, parent))
}

/// See: JCR 2.0 specification, §6.7.11 DescendantNodeJoinCondition
///
/// *DescendantNodeJoinCondition*:
///     **ISDESCENDANTNODE(** descendantSelectorName **,** ancestorSelectorName **)**
fn descendant_node_join_condition<F: QueryObjectModelFactory>(
    p: &mut Parser<'_, F>,
) -> Result<F::JoinCondition, Error> {
    p.pop();
    p.expect(TokenKind::LParen, "`(`")?;
    let descendant = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::Comma, "`,`")?;
    let ancestor = grammar::name(p, "a selector name")?;
    p.expect(TokenKind::RParen, "`)`")?;
    Ok(p.factory()
        .descendant_node_join_condition(descendant, ancestor))
}
