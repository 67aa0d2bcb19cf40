//! Defines the `QuotingPolicy` trait used to stringify quoted literals.

use model::core::value::Value;

pub trait QuotingPolicy: Send + Sync {
    /// Renders a quoted scalar as the string the backend expects.
    fn quote(&self, value: &Value) -> String;

    /// Returns the name of the policy, used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Plain stringification with no escaping. The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl QuotingPolicy for Identity {
    fn quote(&self, value: &Value) -> String {
        value.to_string()
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// SQL-style quoting: text-like scalars are wrapped in single quotes with
/// embedded quotes doubled; numbers, booleans and NULL are left bare.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlQuoted;

impl QuotingPolicy for SqlQuoted {
    fn quote(&self, value: &Value) -> String {
        match value {
            Value::Int(_)
            | Value::Uint(_)
            | Value::Float(_)
            | Value::Decimal(_)
            | Value::Boolean(_) => value.to_string(),
            Value::Null => "NULL".to_string(),
            Value::String(_) | Value::Uuid(_) | Value::Date(_) | Value::Timestamp(_) => {
                format!("'{}'", value.to_string().replace('\'', "''"))
            }
        }
    }

    fn name(&self) -> &str {
        "sql"
    }
}

impl<F> QuotingPolicy for F
where
    F: Fn(&Value) -> String + Send + Sync,
{
    fn quote(&self, value: &Value) -> String {
        self(value)
    }
}
