//! Lowers comparisons, boolean combinators and sort terms.

use crate::{
    document::{self, Document, Parameter, SortOrder},
    error::CompileError,
    visitor::Compiler,
};
use model::ast::{Binary, Comparison, Node};

impl Compiler {
    pub(crate) fn visit_equality(
        &self,
        cmp: &Comparison,
        depth: usize,
    ) -> Result<Document, CompileError> {
        let name = self.visit_name(&cmp.left, depth + 1, "Equality", "left side")?;

        match null_or_operand(cmp) {
            None => Ok(document::filter(&name, Parameter::IsNull(true))),
            Some(right) => {
                let value = self.visit(right, depth + 1)?;
                Ok(document::filter(&name, Parameter::Eq(value)))
            }
        }
    }

    /// `<> NULL` becomes `is_null: false` directly, while any other value
    /// becomes a `not` around an `eq` filter.
    pub(crate) fn visit_not_equal(
        &self,
        cmp: &Comparison,
        depth: usize,
    ) -> Result<Document, CompileError> {
        let name = self.visit_name(&cmp.left, depth + 1, "NotEqual", "left side")?;

        match null_or_operand(cmp) {
            None => Ok(document::filter(&name, Parameter::IsNull(false))),
            Some(right) => {
                let value = self.visit(right, depth + 1)?;
                Ok(document::not_filter(document::filter(
                    &name,
                    Parameter::Eq(value),
                )))
            }
        }
    }

    pub(crate) fn visit_and(&self, binary: &Binary, depth: usize) -> Result<Document, CompileError> {
        self.visit_combinator(document::AND, binary, depth)
    }

    pub(crate) fn visit_or(&self, binary: &Binary, depth: usize) -> Result<Document, CompileError> {
        self.visit_combinator(document::OR, binary, depth)
    }

    /// Always two operands; nested chains are kept nested.
    fn visit_combinator(
        &self,
        op: &str,
        binary: &Binary,
        depth: usize,
    ) -> Result<Document, CompileError> {
        let left = self.visit(&binary.left, depth + 1)?;
        let right = self.visit(&binary.right, depth + 1)?;
        Ok(document::combine(op, vec![left, right]))
    }

    pub(crate) fn visit_ascending(&self, expr: &Node, depth: usize) -> Result<Document, CompileError> {
        let name = self.visit_name(expr, depth + 1, "Ascending", "sort expression")?;
        Ok(document::sort(&name, SortOrder::Ascending))
    }

    pub(crate) fn visit_descending(
        &self,
        expr: &Node,
        depth: usize,
    ) -> Result<Document, CompileError> {
        let name = self.visit_name(expr, depth + 1, "Descending", "sort expression")?;
        Ok(document::sort(&name, SortOrder::Descending))
    }
}

fn null_or_operand(cmp: &Comparison) -> Option<&Node> {
    cmp.right.as_deref().filter(|right| !right.is_null_literal())
}
