//! Target expression syntax
//!
//! A call-by-value lambda calculus with de Bruijn variables. Literals
//! and effect names are indices into the literal table of the
//! [`Program`] they belong to.
use serde::{Deserialize, Serialize};

use super::desugar::literal::Literal;

/// Index of the nil atom, used as the sentinel argument of nullary
/// calls and as the terminator of argument lists
pub const NIL: usize = 0;
/// Tag for macro arguments passed as evaluated values
pub const VALUE: usize = 1;
/// Tag for macro arguments which introduce a binding
pub const BINDING: usize = 2;
/// Tag for macro arguments which are calls containing bindings
pub const CALL: usize = 3;

/// Literal texts occupying the reserved indices above
pub const RESERVED_LITERALS: [&str; 4] = ["Nil", "Value", "Binding", "Call"];

/// Core expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// De Bruijn index, 0 is innermost
    Var(usize),
    /// Literal by literal table index
    Lit(usize),
    /// Ambient effect by literal table index of its name
    Effect(usize),
    /// Single argument abstraction
    Abs(Box<Expr>),
    /// Self-referential abstraction: #0 is the argument, #1 the
    /// abstraction itself
    Rec(Box<Expr>),
    /// Application
    App(Box<Expr>, Box<Expr>),
    /// Type of a value
    TypeOf(Box<Expr>),
    /// Split a compound value: value, on-compound, otherwise
    Unpack(Box<[Expr; 3]>),
    /// Install an effect handler: body, handler
    Handle(Box<[Expr; 2]>),
    /// Compare two values: left, right, if-equal, otherwise
    Compare(Box<[Expr; 4]>),
}

impl Expr {
    pub fn is_abs(&self) -> bool {
        matches!(self, Expr::Abs(_))
    }

    /// Body of an abstraction
    pub fn body(&self) -> Option<&Expr> {
        match self {
            Expr::Abs(body) | Expr::Rec(body) => Some(body),
            _ => None,
        }
    }

    /// Number of binders introduced directly above sub-expressions
    pub fn binders(&self) -> usize {
        match self {
            Expr::Abs(_) => 1,
            Expr::Rec(_) => 2,
            _ => 0,
        }
    }

    /// Immediate sub-expressions in order
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Var(_) | Expr::Lit(_) | Expr::Effect(_) => vec![],
            Expr::Abs(b) | Expr::Rec(b) | Expr::TypeOf(b) => vec![b],
            Expr::App(f, x) => vec![f, x],
            Expr::Unpack(xs) => xs.iter().collect(),
            Expr::Handle(xs) => xs.iter().collect(),
            Expr::Compare(xs) => xs.iter().collect(),
        }
    }

    /// Wrap in `n` abstractions
    pub fn abstracted(self, n: usize) -> Expr {
        (0..n).fold(self, |body, _| acore::abs(body))
    }
}

/// A fully desugared program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// The top-level abstraction
    pub expr: Expr,
    /// Literal table referenced by `Lit` and `Effect`
    pub literals: Vec<Literal>,
}

impl Program {
    /// The program body under its top-level abstraction
    pub fn body(&self) -> Option<&Expr> {
        match &self.expr {
            Expr::Abs(body) => Some(body),
            _ => None,
        }
    }

    /// Text of the literal at `index`
    pub fn literal(&self, index: usize) -> Option<&str> {
        self.literals.get(index).map(Literal::text)
    }

    /// Index of the literal with text `text`, if present
    pub fn literal_index<T: AsRef<str>>(&self, text: T) -> Option<usize> {
        self.literals.iter().position(|l| l.text() == text.as_ref())
    }
}

/// Anonymous construction of core expressions
pub mod acore {
    use super::*;

    /// Variable by de Bruijn index
    pub fn var(index: usize) -> Expr {
        Expr::Var(index)
    }

    /// Literal by table index
    pub fn lit(index: usize) -> Expr {
        Expr::Lit(index)
    }

    /// The nil sentinel
    pub fn nil() -> Expr {
        Expr::Lit(NIL)
    }

    /// Effect by table index
    pub fn effect(index: usize) -> Expr {
        Expr::Effect(index)
    }

    /// Abstraction
    pub fn abs(body: Expr) -> Expr {
        Expr::Abs(Box::new(body))
    }

    /// Recursive abstraction
    pub fn rec(body: Expr) -> Expr {
        Expr::Rec(Box::new(body))
    }

    /// Application
    pub fn app(f: Expr, x: Expr) -> Expr {
        Expr::App(Box::new(f), Box::new(x))
    }

    /// Curried application of `f` to `xs`
    pub fn app_n(f: Expr, xs: Vec<Expr>) -> Expr {
        xs.into_iter().fold(f, app)
    }

    /// A tagged structure
    pub fn tag(tag: usize, payload: Expr) -> Expr {
        app(lit(tag), payload)
    }

    /// Argument list, right-folded and terminated by nil
    pub fn list(items: Vec<Expr>) -> Expr {
        items.into_iter().rev().fold(nil(), |tail, item| app(item, tail))
    }

    pub fn type_of(x: Expr) -> Expr {
        Expr::TypeOf(Box::new(x))
    }

    pub fn unpack(value: Expr, on_compound: Expr, otherwise: Expr) -> Expr {
        Expr::Unpack(Box::new([value, on_compound, otherwise]))
    }

    pub fn handle(body: Expr, handler: Expr) -> Expr {
        Expr::Handle(Box::new([body, handler]))
    }

    pub fn compare(left: Expr, right: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::Compare(Box::new([left, right, then, otherwise]))
    }
}
