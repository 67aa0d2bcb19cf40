//! Tests for statement-level assembly: projection, filter, sort and pagination

use crate::common::{asc, attr, desc, eq, int, select, text};
use model::{
    ast::{Core, Node, Statement},
    core::value::Value,
};
use search_dsl::{compile, to_search};
use serde_json::json;

#[test]
fn test_projection_keeps_order() {
    let statement = select(vec![attr("id"), attr("name"), attr("email")], vec![]);

    let doc = to_search(&statement).unwrap();
    assert_eq!(
        doc,
        json!({
            "query": {
                "projection": [{ "name": "id" }, { "name": "name" }, { "name": "email" }]
            }
        })
    );
}

#[test]
fn test_no_wheres_means_no_filter_key() {
    let doc = to_search(&select(vec![attr("id")], vec![])).unwrap();
    assert!(doc["query"].get("filter").is_none());
}

#[test]
fn test_single_where_is_used_directly() {
    let clause = eq(attr("id"), int(1));
    let doc = to_search(&select(vec![], vec![clause.clone()])).unwrap();
    assert_eq!(doc["query"]["filter"], compile(&clause).unwrap());
}

#[test]
fn test_two_wheres_are_combined_with_and() {
    let x = eq(attr("id"), int(1));
    let y = eq(attr("email"), text("e@x.com"));

    let doc = to_search(&select(vec![], vec![x.clone(), y.clone()])).unwrap();
    assert_eq!(
        doc["query"]["filter"],
        json!({ "and": [compile(&x).unwrap(), compile(&y).unwrap()] })
    );
}

#[test]
fn test_single_ascending_order() {
    let statement = Statement {
        orders: vec![asc(attr("email"))],
        ..select(vec![], vec![])
    };

    let doc = to_search(&statement).unwrap();
    assert_eq!(
        doc,
        json!({
            "query": {
                "sort": [{ "attribute": { "name": "email" }, "order": "ascending" }]
            }
        })
    );
}

#[test]
fn test_mixed_orders_keep_input_order() {
    let statement = Statement {
        orders: vec![desc(attr("email")), asc(attr("name"))],
        ..select(vec![], vec![])
    };

    let doc = to_search(&statement).unwrap();
    assert_eq!(
        doc["query"]["sort"],
        json!([
            { "attribute": { "name": "email" }, "order": "descending" },
            { "attribute": { "name": "name" }, "order": "ascending" }
        ])
    );
}

#[test]
fn test_pagination_is_top_level() {
    let statement = Statement {
        limit: Some(Box::new(Node::Literal(Value::Int(10)))),
        offset: Some(Box::new(Node::Literal(Value::Int(5)))),
        ..select(vec![], vec![])
    };

    let doc = to_search(&statement).unwrap();
    assert_eq!(doc["per_page"], json!(10));
    assert_eq!(doc["offset"], json!(5));
    assert!(doc["query"].get("per_page").is_none());
    assert!(doc["query"].get("offset").is_none());
}

#[test]
fn test_offset_without_limit() {
    let statement = Statement {
        offset: Some(Box::new(Node::Literal(Value::Int(20)))),
        ..Statement::default()
    };

    let doc = to_search(&statement).unwrap();
    assert_eq!(doc, json!({ "query": {}, "offset": 20 }));
}

#[test]
fn test_complex_query() {
    let statement = Statement {
        orders: vec![asc(attr("name")), desc(attr("added_at"))],
        ..select(
            vec![
                Node::SqlLiteral("id".to_string()),
                Node::SqlLiteral("name".to_string()),
                Node::SqlLiteral("email".to_string()),
            ],
            vec![
                eq(attr("id"), int(1)),
                eq(attr("email"), text("email@example.com")),
            ],
        )
    };

    let expected = json!({
        "query": {
            "projection": [
                { "name": "id" },
                { "name": "name" },
                { "name": "email" }
            ],
            "filter": {
                "and": [
                    {
                        "filter": {
                            "attribute": { "name": "id" },
                            "parameter": { "eq": 1 }
                        }
                    },
                    {
                        "filter": {
                            "attribute": { "name": "email" },
                            "parameter": { "eq": "email@example.com" }
                        }
                    }
                ]
            },
            "sort": [
                { "attribute": { "name": "name" }, "order": "ascending" },
                { "attribute": { "name": "added_at" }, "order": "descending" }
            ]
        }
    });

    assert_eq!(to_search(&statement).unwrap(), expected);
    assert_eq!(compile(&Node::Statement(statement)).unwrap(), expected);
}

#[test]
fn test_subquery_compiles_like_statement() {
    let inner = select(vec![attr("id")], vec![]);
    let as_subquery = compile(&Node::Subquery(Box::new(inner.clone()))).unwrap();
    assert_eq!(as_subquery, to_search(&inner).unwrap());
}

#[test]
fn test_core_node_compiles_alone() {
    let core = Node::Core(Core {
        projections: vec![attr("id")],
        wheres: vec![eq(attr("id"), int(1))],
    });

    let doc = compile(&core).unwrap();
    assert_eq!(doc["query"]["projection"], json!([{ "name": "id" }]));
    assert_eq!(doc["query"]["filter"]["filter"]["parameter"]["eq"], json!(1));
}
