use model::{
    ast::{Attribute, AttributeKind, Binary, Comparison, Core, Node, Statement},
    core::value::Value,
};

pub fn contacts(name: &str, kind: AttributeKind) -> Node {
    Node::Attribute(Attribute::of("contacts", name, kind))
}

pub fn attr(name: &str) -> Node {
    contacts(name, AttributeKind::Undefined)
}

pub fn int(v: i64) -> Node {
    Node::Casted(Value::Int(v))
}

pub fn text(v: &str) -> Node {
    Node::Casted(Value::String(v.to_string()))
}

pub fn eq(left: Node, right: Node) -> Node {
    Node::Equality(Comparison::new(left, Some(right)))
}

pub fn eq_null(left: Node) -> Node {
    Node::Equality(Comparison::new(left, None))
}

pub fn not_eq(left: Node, right: Node) -> Node {
    Node::NotEqual(Comparison::new(left, Some(right)))
}

pub fn not_eq_null(left: Node) -> Node {
    Node::NotEqual(Comparison::new(left, None))
}

pub fn and(left: Node, right: Node) -> Node {
    Node::And(Binary::new(left, right))
}

pub fn or(left: Node, right: Node) -> Node {
    Node::Or(Binary::new(left, right))
}

pub fn asc(expr: Node) -> Node {
    Node::Ascending(Box::new(expr))
}

pub fn desc(expr: Node) -> Node {
    Node::Descending(Box::new(expr))
}

pub fn select(projections: Vec<Node>, wheres: Vec<Node>) -> Statement {
    Statement::from_core(Core {
        projections,
        wheres,
    })
}
