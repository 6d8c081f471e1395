use jcr_qom::Column;
use jcr_qom::Constraint;
use jcr_qom::DynamicOperand;
use jcr_qom::JoinCondition;
use jcr_qom::JoinType;
use jcr_qom::Operator;
use jcr_qom::Order;
use jcr_qom::Query;
use jcr_qom::Source;
use jcr_qom::StaticOperand;
use pretty_assertions::assert_eq;

use crate::parse;
use crate::Error;
use crate::Parser;

/// Parse, generate, reparse: the reparsed model must equal the first one,
/// and generating it again must reproduce the same text.
fn assert_roundtrip(input: &str) -> Query {
    let query = parse(input).unwrap_or_else(|err| panic!("`{input}` did not parse: {err}"));
    let generated = query.to_string();
    let reparsed =
        parse(&generated).unwrap_or_else(|err| panic!("`{generated}` did not reparse: {err}"));
    assert_eq!(reparsed, query, "round-trip changed the model of `{input}`");
    assert_eq!(
        reparsed.to_string(),
        generated,
        "generation not idempotent for `{input}`"
    );
    query
}

#[test]
fn roundtrip_corpus() {
    let corpus = [
        "SELECT * FROM [nt:base]",
        "SELECT * FROM [nt:unstructured] AS a WHERE a.[jcr:title] = 'x'",
        "SELECT a.[jcr:title] AS t FROM [nt:file] AS a \
         INNER JOIN [nt:resource] AS b ON ISCHILDNODE(b, a) WHERE a.title LIKE 'foo%'",
        "SELECT * FROM [nt:base] WHERE NOT (title IS NOT NULL OR CONTAINS(*, 'hello world'))",
        "SELECT * FROM [nt:base] WHERE ISDESCENDANTNODE([/content/a b])",
        "SELECT * FROM [nt:base] ORDER BY LOWER(NAME()) DESC, score DESC",
        "SELECT * FROM [nt:base] WHERE x = $param",
        "SELECT * FROM [nt:base] WHERE title IS NULL",
        "SELECT * FROM [nt:base] WHERE a.b = 'x' AND b.c = 'y' AND c.d = 'z'",
        "SELECT * FROM [a] AS x LEFT OUTER JOIN [b] AS y ON ISSAMENODE(x, y, [/content])",
        "SELECT * FROM [a] AS x RIGHT OUTER JOIN [b] AS y ON x.p = y.[jcr:uuid]",
        "SELECT x.* FROM [a] AS x WHERE LENGTH(x.[jcr:data]) >= 1024",
        "SELECT * FROM [a] WHERE x = CAST('2024-01-01T00:00:00.000Z' AS DATE)",
        "SELECT * FROM [a] WHERE CONTAINS(s.*, $needle)",
        "SELECT * FROM [a] WHERE ISCHILDNODE(s, [/content/site])",
        "SELECT * FROM [a] ORDER BY UPPER(LOCALNAME(s)) ASC, SCORE(s) DESC",
        "SELECT [jcr:title], b.name AS n FROM [nt:base] AS b",
        "SELECT * FROM [a] WHERE NOT x.title <> 'left brain'",
    ];
    for input in corpus {
        assert_roundtrip(input);
    }
}

#[test]
fn parses_a_plain_comparison_query() {
    let query = assert_roundtrip("SELECT * FROM [nt:unstructured] AS a WHERE a.[jcr:title] = 'x'");
    assert_eq!(
        query,
        Query {
            source: Source::Selector {
                node_type: String::from("nt:unstructured"),
                alias: Some(String::from("a")),
            },
            constraint: Some(Constraint::Comparison {
                operand1: DynamicOperand::PropertyValue {
                    selector: Some(String::from("a")),
                    property: String::from("jcr:title"),
                },
                operator: Operator::EqualTo,
                operand2: StaticOperand::Literal {
                    value: String::from("x"),
                    cast_type: None,
                },
            }),
            orderings: vec![],
            columns: vec![],
        }
    );
    assert_eq!(
        query.to_string(),
        "SELECT * FROM [nt:unstructured] AS a WHERE a.[jcr:title]='x'"
    );
}

#[test]
fn parses_an_inner_join_with_like() {
    let query = assert_roundtrip(
        "SELECT a.[jcr:title] AS t FROM [nt:file] AS a \
         INNER JOIN [nt:resource] AS b ON ISCHILDNODE(b, a) WHERE a.title LIKE 'foo%'",
    );
    assert_eq!(
        query.source,
        Source::Join {
            left: Box::new(Source::Selector {
                node_type: String::from("nt:file"),
                alias: Some(String::from("a")),
            }),
            right: Box::new(Source::Selector {
                node_type: String::from("nt:resource"),
                alias: Some(String::from("b")),
            }),
            join_type: JoinType::Inner,
            condition: JoinCondition::ChildNode {
                child_selector: String::from("b"),
                parent_selector: String::from("a"),
            },
        }
    );
    assert!(matches!(
        query.constraint,
        Some(Constraint::Comparison {
            operator: Operator::Like,
            ..
        })
    ));
    assert_eq!(
        query.columns,
        vec![Column::Property {
            selector: Some(String::from("a")),
            property: String::from("jcr:title"),
            alias: Some(String::from("t")),
        }]
    );
}

#[test]
fn parses_negated_groups() {
    let query = assert_roundtrip(
        "SELECT * FROM [nt:base] WHERE NOT (title IS NOT NULL OR CONTAINS(*, 'hello world'))",
    );
    assert_eq!(
        query.constraint,
        Some(Constraint::Not(Box::new(Constraint::Or(
            Box::new(Constraint::PropertyExistence {
                selector: None,
                property: String::from("title"),
            }),
            Box::new(Constraint::FullTextSearch {
                selector: None,
                property: None,
                expression: StaticOperand::Literal {
                    value: String::from("hello world"),
                    cast_type: None,
                },
            }),
        ))))
    );
    // The parenthesized group survives generation verbatim.
    assert_eq!(
        query.to_string(),
        "SELECT * FROM [nt:base] WHERE NOT (title IS NOT NULL OR CONTAINS(*, 'hello world'))"
    );
}

#[test]
fn quotes_paths_with_spaces_on_output() {
    let query = assert_roundtrip("SELECT * FROM [nt:base] WHERE ISDESCENDANTNODE([/content/a b])");
    assert_eq!(
        query.constraint,
        Some(Constraint::DescendantNode {
            selector: None,
            path: String::from("/content/a b"),
        })
    );
    assert_eq!(
        query.to_string(),
        "SELECT * FROM [nt:base] WHERE ISDESCENDANTNODE([\"/content/a b\"])"
    );
}

#[test]
fn parses_ordering_functions_and_properties() {
    let query = assert_roundtrip("SELECT * FROM [nt:base] ORDER BY LOWER(NAME()) DESC, score DESC");
    let orderings: Vec<(&DynamicOperand, Order)> = query
        .orderings
        .iter()
        .map(|ordering| (&ordering.operand, ordering.order))
        .collect();
    assert_eq!(
        orderings,
        vec![
            (
                &DynamicOperand::LowerCase(Box::new(DynamicOperand::NodeName { selector: None })),
                Order::Descending,
            ),
            (
                &DynamicOperand::PropertyValue {
                    selector: None,
                    property: String::from("score"),
                },
                Order::Descending,
            ),
        ]
    );
}

#[test]
fn parses_bind_variables() {
    let query = assert_roundtrip("SELECT * FROM [nt:base] WHERE x = $param");
    assert_eq!(
        query.constraint,
        Some(Constraint::Comparison {
            operand1: DynamicOperand::PropertyValue {
                selector: None,
                property: String::from("x"),
            },
            operator: Operator::EqualTo,
            operand2: StaticOperand::BindVariable {
                name: String::from("param"),
            },
        })
    );
}

#[test]
fn regenerates_is_null_in_canonical_not_form() {
    let query = assert_roundtrip("SELECT * FROM [nt:base] WHERE title IS NULL");
    assert_eq!(
        query.to_string(),
        "SELECT * FROM [nt:base] WHERE NOT title IS NOT NULL"
    );
}

#[test]
fn accepts_clauses_in_any_order_and_any_case() {
    let shuffled = parse("order by b.x where b.x is not null select b.* from [nt:base] as b");
    let straight = parse("SELECT b.* FROM [nt:base] AS b WHERE b.x IS NOT NULL ORDER BY b.x");
    assert_eq!(shuffled.unwrap(), straight.unwrap());
}

#[test]
fn keeps_whitespace_inside_quoted_literals() {
    let query = assert_roundtrip("SELECT * FROM [a] WHERE x = 'one  two   three'");
    assert_eq!(
        query.constraint,
        Some(Constraint::Comparison {
            operand1: DynamicOperand::PropertyValue {
                selector: None,
                property: String::from("x"),
            },
            operator: Operator::EqualTo,
            operand2: StaticOperand::Literal {
                value: String::from("one  two   three"),
                cast_type: None,
            },
        })
    );
}

#[test]
fn rejects_queries_without_a_source() {
    assert!(matches!(parse("SELECT *"), Err(Error::InvalidQuery { .. })));
    assert!(matches!(
        parse("WHERE x = 'y'"),
        Err(Error::InvalidQuery { .. })
    ));
    assert!(matches!(parse(""), Err(Error::InvalidQuery { .. })));
}

#[test]
fn rejects_duplicate_clauses() {
    assert!(matches!(
        parse("SELECT * FROM [a] FROM [b]"),
        Err(Error::Syntax { message, .. }) if message.contains("duplicate FROM")
    ));
    assert!(matches!(
        parse("SELECT * SELECT x FROM [a]"),
        Err(Error::Syntax { message, .. }) if message.contains("duplicate SELECT")
    ));
}

#[test]
fn stops_at_the_first_unrecognized_clause_keyword() {
    // Trailing content that no clause claims ends the parse; what was
    // accumulated by then stands.
    let query = parse("SELECT * FROM [nt:base] EXPLAIN").unwrap();
    assert_eq!(query.to_string(), "SELECT * FROM [nt:base]");
}

#[test]
fn syntax_errors_carry_token_offset_and_source() {
    let input = "SELECT * FROM [a] WHERE x = ";
    let Err(Error::Syntax {
        found,
        index,
        query,
        ..
    }) = parse(input)
    else {
        panic!("expected a syntax error");
    };
    assert_eq!(found, "EOF");
    assert_eq!(index, input.len());
    assert_eq!(query, input);
}

#[test]
fn enforces_the_recursion_limit() {
    let nested = format!(
        "SELECT * FROM [a] WHERE {}x{} = 'y'",
        "LOWER(".repeat(16),
        ")".repeat(16)
    );
    let result = Parser::new(&nested).recursion_limit(8).parse();
    assert!(matches!(
        result,
        Err(Error::RecursionLimitExceeded { limit: 8, .. })
    ));

    let result = Parser::new(&nested).recursion_limit(64).parse();
    assert!(result.is_ok());
}
