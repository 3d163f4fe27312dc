//! Block desugaring
//!
//! A block `{ e0, e1, ..., en }` becomes a chain of curried
//! abstractions. Each item opens one abstraction per binding the
//! previous item introduced (or one for an ignored argument if it
//! introduced none) so that:
//!
//! - `{ let(:a, x), f(a) }` becomes `λ. let(#Binding a, x, λ. f(#0))`,
//!   i.e. an item which binds receives the rest of the block as its
//!   continuation, and
//! - `{ f(x), g(y) }` becomes `λ. (λ. g(y)) f(x)`, i.e. an item
//!   which binds nothing is sequenced by applying the rest of the
//!   block to it.
use super::desugarer::Desugarer;
use crate::{
    core::{
        error::CoreError,
        expr::{acore::*, Expr, NIL, RESERVED_LITERALS},
    },
    syntax::{ast::SynNode, make},
};
use log::debug;
use std::cmp::max;

impl Desugarer {
    /// Desugar a block's items into a single abstraction
    pub fn desugar_block(&mut self, items: &[SynNode]) -> Result<Expr, CoreError> {
        let nil_item;
        let items = if items.is_empty() {
            nil_item = [make::atom(0, RESERVED_LITERALS[NIL])];
            &nil_item[..]
        } else {
            items
        };

        let depth = self.depth();
        let mut deferred = vec![];
        let mut steps = Vec::with_capacity(items.len());

        for item in items {
            let opened = self.open_scope(&mut deferred);
            let expr = self.desugar_value(item)?;
            steps.push((opened, expr));
        }

        debug!(
            "block of {} items opens {:?}",
            steps.len(),
            steps.iter().map(|(n, _)| *n).collect::<Vec<_>>()
        );

        // anything the final item introduced has no scope to go to;
        // shadows of multi-level bindings pass to the scope after
        // this block
        self.set_pending(deferred);
        self.truncate(depth);

        Ok(fold_items(steps))
    }
}

/// Fold `(opened, expr)` pairs from the right into nested
/// abstractions
fn fold_items(steps: Vec<(usize, Expr)>) -> Expr {
    steps
        .into_iter()
        .rev()
        .fold(None, |later: Option<(usize, Expr)>, (opened, expr)| {
            let body = match later {
                None => expr,
                Some((0, rest)) => app(rest, expr),
                Some((_, rest)) => app(expr, rest),
            };
            Some((opened, body.abstracted(max(1, opened))))
        })
        .map_or_else(nil, |(_, expr)| expr)
}
