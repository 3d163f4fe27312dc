//! Check the de Bruijn structure of a desugared program
use crate::core::expr::*;

/// Panic unless `expr` is an abstraction whose variables all refer to
/// an enclosing binder or to one of `prelude` outer names.
///
/// Failure here is a defect in the desugarer, not in the input.
pub fn verify(expr: &Expr, prelude: usize) {
    assert!(
        expr.is_abs(),
        "desugared program is not an abstraction: {:?}",
        expr
    );
    if let Some(index) = max_free_index(expr) {
        assert!(
            index < prelude,
            "desugared program refers to unbound variable #{} (prelude has {} names)",
            index,
            prelude
        );
    }
}

/// Largest free variable index of `expr`, counted from outside it
pub fn max_free_index(expr: &Expr) -> Option<usize> {
    let mut tracker = ScopeTracker::default();
    tracker.scan(expr);
    tracker.max_free
}

#[derive(Debug, Default)]
struct ScopeTracker {
    depth: usize,
    max_free: Option<usize>,
}

impl ScopeTracker {
    fn encounter(&mut self, index: usize) {
        if index >= self.depth {
            let free = index - self.depth;
            self.max_free = Some(self.max_free.map_or(free, |m| m.max(free)));
        }
    }

    fn scan(&mut self, expr: &Expr) {
        match expr {
            Expr::Var(i) => self.encounter(*i),
            _ => {
                let binders = expr.binders();
                self.depth += binders;
                for child in expr.children() {
                    self.scan(child);
                }
                self.depth -= binders;
            }
        }
    }
}
