use serde::{Deserialize, Serialize};

/// The scalar kind a column was declared with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    #[default]
    Undefined,
    Integer,
    Float,
    Decimal,
    String,
    Time,
    Boolean,
}

/// A reference to a column of a relation, e.g. `contacts.email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub relation: Option<String>,
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: &str, kind: AttributeKind) -> Self {
        Self {
            relation: None,
            name: name.to_string(),
            kind,
        }
    }

    pub fn of(relation: &str, name: &str, kind: AttributeKind) -> Self {
        Self {
            relation: Some(relation.to_string()),
            name: name.to_string(),
            kind,
        }
    }
}
