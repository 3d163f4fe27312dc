//! Desugarer maintains state during the desugar pass.
use super::literal::LiteralPool;
use crate::{
    common::environment::{ScopeEntry, ScopeStack, VarKind},
    core::expr::{Expr, Program},
    syntax::ast::{ConsumeKind, SynKind, SynNode},
};
use log::trace;

/// Settings for a desugar pass
#[derive(Debug, Clone)]
pub struct DesugarSettings {
    /// Unresolved names ending in this suffix are effects
    pub effect_suffix: String,
    /// Names in scope around the whole program, outermost first
    pub prelude: Vec<(VarKind, String)>,
}

impl Default for DesugarSettings {
    fn default() -> Self {
        DesugarSettings {
            effect_suffix: "!".to_string(),
            prelude: vec![],
        }
    }
}

impl DesugarSettings {
    pub fn with_effect_suffix<T: AsRef<str>>(mut self, suffix: T) -> Self {
        self.effect_suffix = suffix.as_ref().to_string();
        self
    }

    /// Add an ordinary name to the prelude
    pub fn with_value<T: AsRef<str>>(mut self, name: T) -> Self {
        self.prelude
            .push((VarKind::Ordinary, name.as_ref().to_string()));
        self
    }

    /// Add a macro name to the prelude
    pub fn with_macro<T: AsRef<str>>(mut self, name: T) -> Self {
        self.prelude.push((VarKind::Macro, name.as_ref().to_string()));
        self
    }
}

/// A binding which has been seen but not yet attached to a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBinding {
    /// Number of scopes the name must still be visible across
    pub level: u32,
    pub consume: ConsumeKind,
    pub name: String,
    pub kind: VarKind,
}

impl PendingBinding {
    /// The copy left behind for the next scope out, if any
    fn shadow(&self) -> Option<PendingBinding> {
        if self.level > 1 {
            Some(PendingBinding {
                level: self.level - 1,
                ..self.clone()
            })
        } else {
            None
        }
    }
}

/// State kept during desugaring pass
pub struct Desugarer {
    /// Literal pool
    literals: LiteralPool,
    /// Names in scope
    vars: ScopeStack,
    /// Bindings waiting for the next scope to open
    pending: Vec<PendingBinding>,
    /// Suffix marking effect names
    effect_suffix: String,
}

impl Default for Desugarer {
    fn default() -> Self {
        Desugarer::new(&DesugarSettings::default())
    }
}

impl Desugarer {
    /// Construct a Desugarer with the prelude of `settings` in scope
    pub fn new(settings: &DesugarSettings) -> Self {
        let mut vars = ScopeStack::new();
        for (kind, name) in &settings.prelude {
            vars.push(ScopeEntry::named(*kind, name));
        }

        Desugarer {
            literals: LiteralPool::default(),
            vars,
            pending: vec![],
            effect_suffix: settings.effect_suffix.clone(),
        }
    }

    /// Intern an atom or name
    pub fn atom(&mut self, text: &str) -> usize {
        self.literals.atom(text)
    }

    /// Intern a text literal
    pub fn text(&mut self, text: &str) -> usize {
        self.literals.text(text)
    }

    /// De Bruijn index of `name` in the current environment
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.vars.resolve(name)
    }

    /// Kind of the innermost binding of `name`
    pub fn classify(&self, name: &str) -> Option<VarKind> {
        self.vars.classify(name)
    }

    /// True iff `node` is a name bound as a macro
    pub fn is_macro_callee(&self, node: &SynNode) -> bool {
        match &node.kind {
            SynKind::Var(name) => self.classify(name) == Some(VarKind::Macro),
            _ => false,
        }
    }

    /// True iff `name` denotes an ambient effect
    pub fn is_effect(&self, name: &str) -> bool {
        !self.effect_suffix.is_empty()
            && name.len() > self.effect_suffix.len()
            && name.ends_with(&self.effect_suffix)
    }

    /// Current environment depth
    pub fn depth(&self) -> usize {
        self.vars.depth()
    }

    /// Pop environment entries back to `depth`
    pub fn truncate(&mut self, depth: usize) {
        self.vars.truncate(depth)
    }

    /// Queue a binding for the next scope and return its name literal
    pub fn record_binding(
        &mut self,
        level: u32,
        consume: ConsumeKind,
        name: &str,
        kind: VarKind,
    ) -> usize {
        trace!("pending binding {} (level {}, {:?})", name, level, kind);
        self.pending.push(PendingBinding {
            level,
            consume,
            name: name.to_string(),
            kind,
        });
        self.atom(name)
    }

    /// Bindings currently pending
    pub fn pending(&self) -> &[PendingBinding] {
        &self.pending
    }

    /// Remove and return the pending queue
    pub fn take_pending(&mut self) -> Vec<PendingBinding> {
        std::mem::take(&mut self.pending)
    }

    /// Put `saved` back in front of anything queued since it was taken
    pub fn restore_pending(&mut self, mut saved: Vec<PendingBinding>) {
        saved.append(&mut self.pending);
        self.pending = saved;
    }

    /// Replace the pending queue
    pub fn set_pending(&mut self, pending: Vec<PendingBinding>) {
        self.pending = pending;
    }

    /// Open a scope: drain the pending queue into the environment and
    /// return how many bindings were drained. A scope draining nothing
    /// still pushes a nameless entry so it opens exactly one
    /// abstraction. Shadows of multi-level bindings go to `deferred`.
    pub fn open_scope(&mut self, deferred: &mut Vec<PendingBinding>) -> usize {
        let drained = self.take_pending();
        let count = drained.len();

        for binding in drained {
            trace!("scope opens {}", binding.name);
            if let Some(shadow) = binding.shadow() {
                deferred.push(shadow);
            }
            self.vars.push(ScopeEntry::named(binding.kind, &binding.name));
        }

        if count == 0 {
            self.vars.push(ScopeEntry::placeholder());
        }

        count
    }

    /// Finish, packaging the expression with the literal table
    pub fn into_program(self, expr: Expr) -> Program {
        Program {
            expr,
            literals: self.literals.into_vec(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_prelude_outermost_first() {
        let settings = DesugarSettings::default()
            .with_value("if")
            .with_macro("let");
        let ds = Desugarer::new(&settings);
        assert_eq!(ds.resolve("let"), Some(0));
        assert_eq!(ds.resolve("if"), Some(1));
        assert_eq!(ds.classify("let"), Some(VarKind::Macro));
    }

    #[test]
    pub fn test_restore_prepends_saved() {
        let mut ds = Desugarer::default();
        ds.record_binding(1, ConsumeKind::Scope, "a", VarKind::Ordinary);
        let saved = ds.take_pending();
        assert!(ds.pending().is_empty());
        ds.record_binding(1, ConsumeKind::Scope, "b", VarKind::Ordinary);
        ds.restore_pending(saved);
        let names: Vec<_> = ds.pending().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    pub fn test_open_scope_pushes_placeholder_when_empty() {
        let mut ds = Desugarer::default();
        let mut deferred = vec![];
        assert_eq!(ds.open_scope(&mut deferred), 0);
        assert_eq!(ds.depth(), 1);
        assert!(deferred.is_empty());
    }

    #[test]
    pub fn test_open_scope_defers_shadows() {
        let mut ds = Desugarer::default();
        ds.record_binding(2, ConsumeKind::Scope, "f", VarKind::Ordinary);
        ds.record_binding(1, ConsumeKind::Scope, "n", VarKind::Ordinary);
        let mut deferred = vec![];
        assert_eq!(ds.open_scope(&mut deferred), 2);
        assert_eq!(ds.resolve("n"), Some(0));
        assert_eq!(ds.resolve("f"), Some(1));
        assert!(ds.pending().is_empty());
        assert_eq!(deferred.len(), 1);
        assert_eq!(deferred[0].name, "f");
        assert_eq!(deferred[0].level, 1);
    }

    #[test]
    pub fn test_effect_suffix() {
        let ds = Desugarer::default();
        assert!(ds.is_effect("print!"));
        assert!(!ds.is_effect("!"));
        assert!(!ds.is_effect("print"));
    }
}
