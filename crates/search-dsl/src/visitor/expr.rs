use crate::{document::Document, error::CompileError, visitor::Compiler};
use model::{ast::Attribute, core::value::Value};

impl Compiler {
    /// Every attribute kind resolves to its bare name.
    pub(crate) fn visit_attribute(&self, attr: &Attribute) -> Document {
        Document::String(attr.name.clone())
    }

    /// Scalars pass through unchanged. A float with no JSON form is rejected
    /// rather than replaced.
    pub(crate) fn visit_scalar(
        &self,
        kind: &'static str,
        value: &Value,
    ) -> Result<Document, CompileError> {
        value
            .to_json()
            .ok_or_else(|| CompileError::invalid_shape(kind, format!("non-finite float `{value}`")))
    }

    pub(crate) fn visit_quoted(&self, value: &Value) -> Document {
        Document::String(self.quoting.quote(value))
    }

    pub(crate) fn visit_sql_literal(&self, text: &str) -> Document {
        Document::String(text.to_string())
    }

    pub(crate) fn visit_bool(&self, b: bool) -> Document {
        Document::Bool(b)
    }
}
