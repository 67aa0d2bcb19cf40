//! Assembles the top-level document from statement and core nodes.

use crate::{
    document::{self, Document, SortOrder},
    error::CompileError,
    visitor::Compiler,
};
use model::ast::{Core, Node, Statement};
use serde_json::Map;

impl Compiler {
    /// Cores are folded in order and the last one wins: each core's query
    /// replaces whatever earlier cores produced.
    pub(crate) fn visit_statement(
        &self,
        statement: &Statement,
        depth: usize,
    ) -> Result<Document, CompileError> {
        let mut query = Map::new();

        for core in &statement.cores {
            query = self
                .visit_core(core, depth + 1)
                .map_err(|err| err.within("Core"))?;
        }

        if !statement.orders.is_empty() {
            let sort = statement
                .orders
                .iter()
                .map(|order| self.visit_order(order, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            query.insert(document::SORT.to_string(), Document::Array(sort));
        }

        let mut doc = Map::new();
        doc.insert(document::QUERY.to_string(), Document::Object(query));

        if let Some(limit) = &statement.limit {
            doc.insert(document::PER_PAGE.to_string(), self.visit(limit, depth + 1)?);
        }
        if let Some(offset) = &statement.offset {
            doc.insert(document::OFFSET.to_string(), self.visit(offset, depth + 1)?);
        }

        Ok(Document::Object(doc))
    }

    /// Builds the `projection`/`filter` part of a query. Empty clauses leave
    /// their key out entirely.
    pub(crate) fn visit_core(
        &self,
        core: &Core,
        depth: usize,
    ) -> Result<Map<String, Document>, CompileError> {
        let mut query = Map::new();

        if !core.projections.is_empty() {
            let projection = core
                .projections
                .iter()
                .map(|p| {
                    self.visit_name(p, depth + 1, "Core", "projection")
                        .map(|name| document::attribute(&name))
                })
                .collect::<Result<Vec<_>, _>>()?;
            query.insert(document::PROJECTION.to_string(), Document::Array(projection));
        }

        // One clause is used as-is; several get a single AND over the whole list.
        let mut filters = core
            .wheres
            .iter()
            .map(|w| self.visit(w, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let filter = match filters.len() {
            0 => None,
            1 => filters.pop(),
            _ => Some(document::combine(document::AND, filters)),
        };
        if let Some(filter) = filter {
            query.insert(document::FILTER.to_string(), filter);
        }

        Ok(query)
    }

    /// A bare expression in ORDER BY sorts ascending.
    fn visit_order(&self, order: &Node, depth: usize) -> Result<Document, CompileError> {
        match order {
            Node::Ascending(_) | Node::Descending(_) => self.visit(order, depth),
            _ => {
                let name = self.visit_name(order, depth, "Statement", "sort term")?;
                Ok(document::sort(&name, SortOrder::Ascending))
            }
        }
    }
}
