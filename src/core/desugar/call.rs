//! Ordinary value and call desugaring
use super::{builtins, desugarer::Desugarer, wrap::definition_kind};
use crate::{
    common::environment::VarKind,
    core::{
        error::CoreError,
        expr::{acore::*, Expr},
    },
    syntax::ast::{HasSpan, SynKind, SynNode},
};
use log::{debug, trace};

impl Desugarer {
    /// Desugar `node` as an ordinary value
    pub fn desugar_value(&mut self, node: &SynNode) -> Result<Expr, CoreError> {
        match &node.kind {
            SynKind::Var(name) => self.desugar_var(node, name),
            SynKind::Atom(text) => Ok(lit(self.atom(text))),
            SynKind::StrLit(text) => Ok(lit(self.text(text))),
            SynKind::Binding {
                level,
                consume,
                name,
            } => Ok(lit(self.record_binding(
                *level,
                *consume,
                name,
                VarKind::Ordinary,
            ))),
            SynKind::Block(items) => self.desugar_block(items),
            SynKind::Call { callee, args } => self.desugar_call(callee, args),
        }
    }

    /// Resolve a name against the environment, then the built-ins,
    /// then the effect convention
    fn desugar_var(&mut self, node: &SynNode, name: &str) -> Result<Expr, CoreError> {
        if let Some(index) = self.resolve(name) {
            Ok(var(index))
        } else if let Some(builtin) = builtins::lookup(name) {
            trace!("{} is a built-in of arity {}", name, builtin.arity());
            Ok(builtin.expr())
        } else if self.is_effect(name) {
            Ok(effect(self.atom(name)))
        } else {
            Err(CoreError::UnresolvedName(node.span(), name.to_string()))
        }
    }

    /// Desugar an application, wrapping arguments if the callee is a
    /// macro
    fn desugar_call(&mut self, callee: &SynNode, args: &[SynNode]) -> Result<Expr, CoreError> {
        let is_macro = self.is_macro_callee(callee);
        let saved = self.take_pending();

        let f = match &callee.kind {
            SynKind::Binding {
                level,
                consume,
                name,
            } => lit(self.record_binding(*level, *consume, name, definition_kind(args))),
            _ => self.desugar_value(callee)?,
        };

        if is_macro {
            debug!("macro call at {} with {} arguments", callee.pos, args.len());
        }

        let xs = if args.is_empty() {
            vec![nil()]
        } else {
            args.iter()
                .map(|arg| {
                    if is_macro {
                        self.wrap(arg)
                    } else {
                        self.desugar_value(arg)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        self.restore_pending(saved);
        Ok(app_n(f, xs))
    }
}
