//! Literal pool
//!
//! Atoms, text literals and binding names are interned into small
//! indices which the target expressions refer to.
use crate::core::expr::RESERVED_LITERALS;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pooled literal
///
/// Atoms and text literals are kept apart only so that they can be
/// formatted differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Atom(String),
    Text(String),
}

impl Literal {
    pub fn text(&self) -> &str {
        match self {
            Literal::Atom(s) | Literal::Text(s) => s,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Atom(s) => write!(f, "{}", s),
            Literal::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Insertion-ordered, deduplicated literal table
#[derive(Debug, Clone)]
pub struct LiteralPool {
    literals: IndexSet<Literal>,
}

impl Default for LiteralPool {
    /// A pool holding only the reserved atoms
    fn default() -> Self {
        let mut pool = LiteralPool::empty();
        for reserved in RESERVED_LITERALS {
            pool.intern(Literal::Atom(reserved.to_string()));
        }
        pool
    }
}

impl LiteralPool {
    /// A pool without even the reserved atoms
    pub fn empty() -> Self {
        LiteralPool {
            literals: IndexSet::new(),
        }
    }

    /// Return the index of `literal`, adding it if it is new
    pub fn intern(&mut self, literal: Literal) -> usize {
        self.literals.insert_full(literal).0
    }

    /// Intern an atom (also used for names)
    pub fn atom<T: AsRef<str>>(&mut self, text: T) -> usize {
        self.intern(Literal::Atom(text.as_ref().to_string()))
    }

    /// Intern a text literal
    pub fn text<T: AsRef<str>>(&mut self, text: T) -> usize {
        self.intern(Literal::Text(text.as_ref().to_string()))
    }

    pub fn get(&self, index: usize) -> Option<&Literal> {
        self.literals.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Consume the pool, returning literals in index order
    pub fn into_vec(self) -> Vec<Literal> {
        self.literals.into_iter().collect()
    }
}
