//! Lexical environment for de Bruijn resolution
use serde::{Deserialize, Serialize};

/// How calls to a name are desugared
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// Arguments are wrapped as structural tags
    Macro,
    /// Arguments are evaluated normally
    Ordinary,
}

/// One entry of the environment
///
/// Nameless entries stand in for the ignored argument of a sequenced
/// item and can never be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    kind: VarKind,
    name: Option<String>,
}

impl ScopeEntry {
    pub fn named<T: AsRef<str>>(kind: VarKind, name: T) -> Self {
        ScopeEntry {
            kind,
            name: Some(name.as_ref().to_string()),
        }
    }

    pub fn placeholder() -> Self {
        ScopeEntry {
            kind: VarKind::Ordinary,
            name: None,
        }
    }

    pub fn kind(&self) -> VarKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A stack of in-scope names; the most recent push is index 0
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    entries: Vec<ScopeEntry>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn push(&mut self, entry: ScopeEntry) {
        self.entries.push(entry)
    }

    /// Current depth, for restoring with `truncate`
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Drop everything pushed since depth was `depth`
    pub fn truncate(&mut self, depth: usize) {
        self.entries.truncate(depth)
    }

    /// Innermost matching entry with its de Bruijn index
    fn lookup(&self, name: &str) -> Option<(usize, &ScopeEntry)> {
        self.entries
            .iter()
            .rev()
            .enumerate()
            .find(|(_, e)| e.name() == Some(name))
    }

    /// De Bruijn index of the innermost binding of `name`
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.lookup(name).map(|(i, _)| i)
    }

    /// Kind of the innermost binding of `name`
    pub fn classify(&self, name: &str) -> Option<VarKind> {
        self.lookup(name).map(|(_, e)| e.kind())
    }
}
