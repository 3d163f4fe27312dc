//! Built-in operator names and the closed expressions they denote
//!
//! Built-ins are consulted only after the lexical environment so any
//! binding shadows them.
use crate::core::expr::{acore::*, Expr};
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `=`: definition, handing the defined value to a continuation
    Define,
    /// `=>`: anonymous function
    Lambda,
    /// `~>`: recursive anonymous function
    RecLambda,
    /// `type`
    TypeOf,
    /// `__unpack`
    Unpack,
    /// `__handle`
    Handle,
    /// `__compare`
    Compare,
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, Builtin> = {
        let mut m = HashMap::new();
        m.insert("=", Builtin::Define);
        m.insert("=>", Builtin::Lambda);
        m.insert("~>", Builtin::RecLambda);
        m.insert("type", Builtin::TypeOf);
        m.insert("__unpack", Builtin::Unpack);
        m.insert("__handle", Builtin::Handle);
        m.insert("__compare", Builtin::Compare);
        m
    };
}

/// Look up a built-in by name
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.get(name).copied()
}

impl Builtin {
    /// Number of arguments consumed
    pub fn arity(&self) -> usize {
        match self {
            Builtin::TypeOf => 1,
            Builtin::Lambda | Builtin::RecLambda | Builtin::Handle => 2,
            Builtin::Define | Builtin::Unpack => 3,
            Builtin::Compare => 4,
        }
    }

    /// The closed expression the name desugars to
    pub fn expr(&self) -> Expr {
        match self {
            // λp. λv. λk. unpack(p, λhead. λlast. k (μ. v #1 #0), λ_. k v)
            Builtin::Define => {
                let on_compound = app(var(2), rec(app(app(var(5), var(1)), var(0))))
                    .abstracted(2);
                let otherwise = abs(app(var(1), var(2)));
                unpack(var(2), on_compound, otherwise).abstracted(3)
            }
            // λpattern. λbody. body
            Builtin::Lambda => var(0).abstracted(2),
            // λpattern. λf. μ. f #1 #0
            Builtin::RecLambda => rec(app(app(var(2), var(1)), var(0))).abstracted(2),
            Builtin::TypeOf => type_of(var(0)).abstracted(1),
            Builtin::Unpack => unpack(var(2), var(1), var(0)).abstracted(3),
            Builtin::Handle => handle(var(1), var(0)).abstracted(2),
            Builtin::Compare => compare(var(3), var(2), var(1), var(0)).abstracted(4),
        }
    }
}
