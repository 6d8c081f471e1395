use crate::Column;
use crate::Constraint;
use crate::DynamicOperand;
use crate::JoinCondition;
use crate::JoinType;
use crate::Operator;
use crate::Order;
use crate::Ordering;
use crate::Query;
use crate::Source;
use crate::StaticOperand;

/// Builds the nodes of a Query Object Model.
///
/// This is the seam between the JCR-SQL2 grammar and a concrete node
/// representation: a parser drives the factory, and the associated types
/// decide what actually gets built. Repository implementations can
/// substitute their own node types; [`QomFactory`] builds the types of this
/// crate.
///
/// Name strings pass through verbatim — brackets and quotes are already
/// stripped by the time a factory is called, and no validation against a
/// live repository is performed.
pub trait QueryObjectModelFactory {
    /// The assembled query.
    type Query;
    /// Selector and join nodes.
    type Source;
    /// Join conditions.
    type JoinCondition;
    /// Constraint nodes.
    type Constraint;
    /// Per-row operands.
    type DynamicOperand;
    /// Fixed operands.
    type StaticOperand;
    /// Sort keys.
    type Ordering;
    /// Result columns.
    type Column;

    /// Select nodes of `node_type`, optionally under a selector name.
    fn selector(&self, node_type: &str, alias: Option<&str>) -> Self::Source;

    /// Join two sources under a condition.
    fn join(
        &self,
        left: Self::Source,
        right: Self::Source,
        join_type: JoinType,
        condition: Self::JoinCondition,
    ) -> Self::Source;

    /// `selector1.property1 = selector2.property2`
    fn equi_join_condition(
        &self,
        selector1: &str,
        property1: &str,
        selector2: &str,
        property2: &str,
    ) -> Self::JoinCondition;

    /// `ISSAMENODE(selector1, selector2[, path])`
    fn same_node_join_condition(
        &self,
        selector1: &str,
        selector2: &str,
        path: Option<&str>,
    ) -> Self::JoinCondition;

    /// `ISCHILDNODE(childSelector, parentSelector)`
    fn child_node_join_condition(
        &self,
        child_selector: &str,
        parent_selector: &str,
    ) -> Self::JoinCondition;

    /// `ISDESCENDANTNODE(descendantSelector, ancestorSelector)`
    fn descendant_node_join_condition(
        &self,
        descendant_selector: &str,
        ancestor_selector: &str,
    ) -> Self::JoinCondition;

    /// Both constraints hold.
    fn and(&self, constraint1: Self::Constraint, constraint2: Self::Constraint)
        -> Self::Constraint;

    /// Either constraint holds.
    fn or(&self, constraint1: Self::Constraint, constraint2: Self::Constraint)
        -> Self::Constraint;

    /// The constraint does not hold.
    fn not(&self, constraint: Self::Constraint) -> Self::Constraint;

    /// `operand1 <operator> operand2`
    fn comparison(
        &self,
        operand1: Self::DynamicOperand,
        operator: Operator,
        operand2: Self::StaticOperand,
    ) -> Self::Constraint;

    /// `property IS NOT NULL`
    fn property_existence(&self, property: &str, selector: Option<&str>) -> Self::Constraint;

    /// `CONTAINS(scope, expression)`; `property` of `None` searches all
    /// properties of the selector.
    fn full_text_search(
        &self,
        property: Option<&str>,
        expression: Self::StaticOperand,
        selector: Option<&str>,
    ) -> Self::Constraint;

    /// `ISSAMENODE([selector, ]path)`
    fn same_node(&self, path: &str, selector: Option<&str>) -> Self::Constraint;

    /// `ISCHILDNODE([selector, ]path)`
    fn child_node(&self, path: &str, selector: Option<&str>) -> Self::Constraint;

    /// `ISDESCENDANTNODE([selector, ]path)`
    fn descendant_node(&self, path: &str, selector: Option<&str>) -> Self::Constraint;

    /// The value of a property.
    fn property_value(&self, property: &str, selector: Option<&str>) -> Self::DynamicOperand;

    /// `LENGTH(propertyValue)`
    fn length(&self, property_value: Self::DynamicOperand) -> Self::DynamicOperand;

    /// `NAME([selector])`
    fn node_name(&self, selector: Option<&str>) -> Self::DynamicOperand;

    /// `LOCALNAME([selector])`
    fn node_local_name(&self, selector: Option<&str>) -> Self::DynamicOperand;

    /// `SCORE([selector])`
    fn full_text_search_score(&self, selector: Option<&str>) -> Self::DynamicOperand;

    /// `LOWER(operand)`
    fn lower_case(&self, operand: Self::DynamicOperand) -> Self::DynamicOperand;

    /// `UPPER(operand)`
    fn upper_case(&self, operand: Self::DynamicOperand) -> Self::DynamicOperand;

    /// A literal value, kept verbatim.
    fn literal(&self, value: &str) -> Self::StaticOperand;

    /// `CAST('value' AS propertyType)`
    fn cast_literal(&self, value: &str, property_type: &str) -> Self::StaticOperand;

    /// `$name`
    fn bind_variable(&self, name: &str) -> Self::StaticOperand;

    /// Sort ascending by `operand`.
    fn ascending(&self, operand: Self::DynamicOperand) -> Self::Ordering;

    /// Sort descending by `operand`.
    fn descending(&self, operand: Self::DynamicOperand) -> Self::Ordering;

    /// A single-property result column, optionally renamed.
    fn column(&self, property: &str, alias: Option<&str>, selector: Option<&str>) -> Self::Column;

    /// All properties of one selector, `selector.*`.
    fn wildcard_column(&self, selector: &str) -> Self::Column;

    /// Assemble the query. An empty column list means all columns.
    fn query(
        &self,
        source: Self::Source,
        constraint: Option<Self::Constraint>,
        orderings: Vec<Self::Ordering>,
        columns: Vec<Self::Column>,
    ) -> Self::Query;
}

/// The default factory, producing the node types of this crate.
///
/// ### Example
/// ```rust
/// use jcr_qom::{Order, QomFactory, QueryObjectModelFactory};
///
/// let factory = QomFactory;
/// let ordering = factory.descending(factory.full_text_search_score(None));
/// assert_eq!(ordering.order, Order::Descending);
/// assert_eq!(ordering.to_string(), "SCORE() DESC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QomFactory;

impl QueryObjectModelFactory for QomFactory {
    type Query = Query;
    type Source = Source;
    type JoinCondition = JoinCondition;
    type Constraint = Constraint;
    type DynamicOperand = DynamicOperand;
    type StaticOperand = StaticOperand;
    type Ordering = Ordering;
    type Column = Column;

    fn selector(&self, node_type: &str, alias: Option<&str>) -> Source {
        Source::Selector {
            node_type: node_type.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    fn join(
        &self,
        left: Source,
        right: Source,
        join_type: JoinType,
        condition: JoinCondition,
    ) -> Source {
        Source::Join {
            left: Box::new(left),
            right: Box::new(right),
            join_type,
            condition,
        }
    }

    fn equi_join_condition(
        &self,
        selector1: &str,
        property1: &str,
        selector2: &str,
        property2: &str,
    ) -> JoinCondition {
        JoinCondition::EquiJoin {
            selector1: selector1.to_string(),
            property1: property1.to_string(),
            selector2: selector2.to_string(),
            property2: property2.to_string(),
        }
    }

    fn same_node_join_condition(
        &self,
        selector1: &str,
        selector2: &str,
        path: Option<&str>,
    ) -> JoinCondition {
        JoinCondition::SameNode {
            selector1: selector1.to_string(),
            selector2: selector2.to_string(),
            path: path.map(str::to_string),
        }
    }

    fn child_node_join_condition(
        &self,
        child_selector: &str,
        parent_selector: &str,
    ) -> JoinCondition {
        JoinCondition::ChildNode {
            child_selector: child_selector.to_string(),
            parent_selector: parent_selector.to_string(),
        }
    }

    fn descendant_node_join_condition(
        &self,
        descendant_selector: &str,
        ancestor_selector: &str,
    ) -> JoinCondition {
        JoinCondition::DescendantNode {
            descendant_selector: descendant_selector.to_string(),
            ancestor_selector: ancestor_selector.to_string(),
        }
    }

    fn and(&self, constraint1: Constraint, constraint2: Constraint) -> Constraint {
        Constraint::And(Box::new(constraint1), Box::new(constraint2))
    }

    fn or(&self, constraint1: Constraint, constraint2: Constraint) -> Constraint {
        Constraint::Or(Box::new(constraint1), Box::new(constraint2))
    }

    fn not(&self, constraint: Constraint) -> Constraint {
        Constraint::Not(Box::new(constraint))
    }

    fn comparison(
        &self,
        operand1: DynamicOperand,
        operator: Operator,
        operand2: StaticOperand,
    ) -> Constraint {
        Constraint::Comparison {
            operand1,
            operator,
            operand2,
        }
    }

    fn property_existence(&self, property: &str, selector: Option<&str>) -> Constraint {
        Constraint::PropertyExistence {
            selector: selector.map(str::to_string),
            property: property.to_string(),
        }
    }

    fn full_text_search(
        &self,
        property: Option<&str>,
        expression: StaticOperand,
        selector: Option<&str>,
    ) -> Constraint {
        Constraint::FullTextSearch {
            selector: selector.map(str::to_string),
            property: property.map(str::to_string),
            expression,
        }
    }

    fn same_node(&self, path: &str, selector: Option<&str>) -> Constraint {
        Constraint::SameNode {
            selector: selector.map(str::to_string),
            path: path.to_string(),
        }
    }

    fn child_node(&self, path: &str, selector: Option<&str>) -> Constraint {
        Constraint::ChildNode {
            selector: selector.map(str::to_string),
            path: path.to_string(),
        }
    }

    fn descendant_node(&self, path: &str, selector: Option<&str>) -> Constraint {
        Constraint::DescendantNode {
            selector: selector.map(str::to_string),
            path: path.to_string(),
        }
    }

    fn property_value(&self, property: &str, selector: Option<&str>) -> DynamicOperand {
        DynamicOperand::PropertyValue {
            selector: selector.map(str::to_string),
            property: property.to_string(),
        }
    }

    fn length(&self, property_value: DynamicOperand) -> DynamicOperand {
        DynamicOperand::Length(Box::new(property_value))
    }

    fn node_name(&self, selector: Option<&str>) -> DynamicOperand {
        DynamicOperand::NodeName {
            selector: selector.map(str::to_string),
        }
    }

    fn node_local_name(&self, selector: Option<&str>) -> DynamicOperand {
        DynamicOperand::NodeLocalName {
            selector: selector.map(str::to_string),
        }
    }

    fn full_text_search_score(&self, selector: Option<&str>) -> DynamicOperand {
        DynamicOperand::FullTextSearchScore {
            selector: selector.map(str::to_string),
        }
    }

    fn lower_case(&self, operand: DynamicOperand) -> DynamicOperand {
        DynamicOperand::LowerCase(Box::new(operand))
    }

    fn upper_case(&self, operand: DynamicOperand) -> DynamicOperand {
        DynamicOperand::UpperCase(Box::new(operand))
    }

    fn literal(&self, value: &str) -> StaticOperand {
        StaticOperand::Literal {
            value: value.to_string(),
            cast_type: None,
        }
    }

    fn cast_literal(&self, value: &str, property_type: &str) -> StaticOperand {
        StaticOperand::Literal {
            value: value.to_string(),
            cast_type: Some(property_type.to_string()),
        }
    }

    fn bind_variable(&self, name: &str) -> StaticOperand {
        StaticOperand::BindVariable {
            name: name.to_string(),
        }
    }

    fn ascending(&self, operand: DynamicOperand) -> Ordering {
        Ordering {
            operand,
            order: Order::Ascending,
        }
    }

    fn descending(&self, operand: DynamicOperand) -> Ordering {
        Ordering {
            operand,
            order: Order::Descending,
        }
    }

    fn column(&self, property: &str, alias: Option<&str>, selector: Option<&str>) -> Column {
        Column::Property {
            selector: selector.map(str::to_string),
            property: property.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    fn wildcard_column(&self, selector: &str) -> Column {
        Column::All {
            selector: selector.to_string(),
        }
    }

    fn query(
        &self,
        source: Source,
        constraint: Option<Constraint>,
        orderings: Vec<Ordering>,
        columns: Vec<Column>,
    ) -> Query {
        Query {
            source,
            constraint,
            orderings,
            columns,
        }
    }
}
