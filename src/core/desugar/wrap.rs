//! Wrapping of macro arguments
//!
//! Arguments of a call to a macro are not simply evaluated. Each is
//! passed as a tagged structure so that the macro can observe
//! whether it introduces a binding:
//!
//! - a binding `:x` becomes `Binding "x"`
//! - a call containing bindings becomes `Call f [args...]` with the
//!   callee and arguments wrapped in turn
//! - a block is lowered and passed as is
//! - anything else becomes `Value v` for its ordinary value `v`
use super::desugarer::Desugarer;
use crate::{
    common::environment::VarKind,
    core::{
        error::CoreError,
        expr::{acore::*, Expr, BINDING, CALL, VALUE},
    },
    syntax::ast::{ConsumeKind, SynKind, SynNode},
};

/// Kind of the name introduced by a binding heading a definition
/// pattern with parameters `params`
///
/// A definition which receives a binder in order to hand it on to a
/// block observes bindings and is therefore a macro.
pub fn definition_kind(params: &[SynNode]) -> VarKind {
    let takes_binder = params.iter().any(|p| {
        matches!(
            p.kind,
            SynKind::Binding {
                consume: ConsumeKind::Block,
                ..
            }
        )
    });

    if takes_binder {
        VarKind::Macro
    } else {
        VarKind::Ordinary
    }
}

impl Desugarer {
    /// Whether `node` must be passed to a macro as structure rather
    /// than collapsed to a value. Purely syntactic.
    pub fn has_bindings(&self, node: &SynNode) -> bool {
        match &node.kind {
            SynKind::Binding { .. } => true,
            SynKind::Var(_) | SynKind::Atom(_) | SynKind::StrLit(_) | SynKind::Block(_) => false,
            SynKind::Call { callee, args } => {
                if self.is_macro_callee(callee) {
                    false
                } else if self.has_bindings(callee) {
                    true
                } else {
                    args.iter().any(|arg| self.has_bindings(arg))
                }
            }
        }
    }

    /// Desugar `node` as an argument of a macro call
    pub fn wrap(&mut self, node: &SynNode) -> Result<Expr, CoreError> {
        match &node.kind {
            SynKind::Binding { .. } => Ok(self.wrap_binding(node, VarKind::Ordinary)),
            SynKind::Block(items) => self.desugar_block(items),
            SynKind::Call { callee, args } if self.has_bindings(node) => {
                let head = match callee.kind {
                    SynKind::Binding { .. } => self.wrap_binding(callee, definition_kind(args)),
                    _ => self.wrap(callee)?,
                };
                let wrapped = args
                    .iter()
                    .map(|arg| self.wrap(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(app(tag(CALL, head), list(wrapped)))
            }
            _ => Ok(tag(VALUE, self.desugar_value(node)?)),
        }
    }

    fn wrap_binding(&mut self, node: &SynNode, kind: VarKind) -> Expr {
        match &node.kind {
            SynKind::Binding {
                level,
                consume,
                name,
            } => {
                let index = self.record_binding(*level, *consume, name, kind);
                tag(BINDING, lit(index))
            }
            _ => unreachable!("wrap_binding on non-binding"),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::desugar::desugarer::DesugarSettings;
    use crate::syntax::make::*;

    fn desugarer() -> Desugarer {
        Desugarer::new(
            &DesugarSettings::default()
                .with_value("f")
                .with_macro("m"),
        )
    }

    #[test]
    pub fn test_has_bindings_precedence() {
        let ds = desugarer();
        assert!(ds.has_bindings(&bind(0, "x")));
        assert!(!ds.has_bindings(&name(0, "f")));
        assert!(!ds.has_bindings(&atom(0, "a")));
        assert!(!ds.has_bindings(&block(0, vec![bind(1, "x")])));
        // nested macro calls are settled
        assert!(!ds.has_bindings(&call_named(0, "m", vec![bind(2, "x")])));
        // binding in function position
        assert!(ds.has_bindings(&call(0, bind(0, "g"), vec![atom(3, "a")])));
        assert!(ds.has_bindings(&call_named(
            0,
            "f",
            vec![atom(2, "a"), call_named(4, "f", vec![bind(6, "y")])]
        )));
        assert!(!ds.has_bindings(&call_named(0, "f", vec![name(2, "f")])));
    }

    #[test]
    pub fn test_has_bindings_does_not_mutate() {
        let ds = desugarer();
        let node = call_named(0, "f", vec![bind(2, "x")]);
        assert!(ds.has_bindings(&node));
        assert!(ds.has_bindings(&node));
        assert!(ds.pending().is_empty());
    }

    #[test]
    pub fn test_wrap_binding() {
        let mut ds = desugarer();
        let expr = ds.wrap(&bind(0, "x")).unwrap();
        let x = ds.atom("x");
        assert_eq!(expr, tag(BINDING, lit(x)));
        assert_eq!(ds.pending().len(), 1);
    }

    #[test]
    pub fn test_wrap_value() {
        let mut ds = desugarer();
        assert_eq!(ds.wrap(&name(0, "f")).unwrap(), tag(VALUE, var(1)));
        let a = ds.atom("a");
        assert_eq!(ds.wrap(&atom(0, "a")).unwrap(), tag(VALUE, lit(a)));
    }

    #[test]
    pub fn test_wrap_call_with_bindings() {
        let mut ds = desugarer();
        let expr = ds
            .wrap(&call_named(0, "f", vec![bind(2, "x"), atom(5, "a")]))
            .unwrap();
        let x = ds.atom("x");
        let a = ds.atom("a");
        assert_eq!(
            expr,
            app(
                tag(CALL, tag(VALUE, var(1))),
                list(vec![tag(BINDING, lit(x)), tag(VALUE, lit(a))])
            )
        );
    }

    #[test]
    pub fn test_wrap_call_without_bindings_is_value() {
        let mut ds = desugarer();
        let a = ds.atom("a");
        let expr = ds.wrap(&call_named(0, "f", vec![atom(2, "a")])).unwrap();
        assert_eq!(expr, tag(VALUE, app(var(1), lit(a))));
    }

    #[test]
    pub fn test_definition_kind() {
        assert_eq!(
            definition_kind(&[bind(0, "n")]),
            VarKind::Ordinary
        );
        assert_eq!(
            definition_kind(&[bind_block(0, "v"), bind(3, "body")]),
            VarKind::Macro
        );
    }
}
