//! Helpers for constructing surface syntax nodes

use super::ast::{ConsumeKind, SynKind, SynNode};

/// Construct a name reference
pub fn name<T: AsRef<str>>(pos: usize, name: T) -> SynNode {
    SynNode::new(pos, SynKind::Var(name.as_ref().to_string()))
}

/// Construct an atom
pub fn atom<T: AsRef<str>>(pos: usize, text: T) -> SynNode {
    SynNode::new(pos, SynKind::Atom(text.as_ref().to_string()))
}

/// Construct a text literal
pub fn text<T: AsRef<str>>(pos: usize, content: T) -> SynNode {
    SynNode::new(pos, SynKind::StrLit(content.as_ref().to_string()))
}

/// Construct an ordinary (single level) binding consumed by the
/// enclosing scope
pub fn bind<T: AsRef<str>>(pos: usize, name: T) -> SynNode {
    binding(pos, 1, ConsumeKind::Scope, name)
}

/// Construct a binding visible across `level` scopes
pub fn bind_level<T: AsRef<str>>(pos: usize, level: u32, name: T) -> SynNode {
    binding(pos, level, ConsumeKind::Scope, name)
}

/// Construct a binding consumed by a block argument
pub fn bind_block<T: AsRef<str>>(pos: usize, name: T) -> SynNode {
    binding(pos, 1, ConsumeKind::Block, name)
}

/// Construct an arbitrary binding
pub fn binding<T: AsRef<str>>(pos: usize, level: u32, consume: ConsumeKind, name: T) -> SynNode {
    SynNode::new(
        pos,
        SynKind::Binding {
            level,
            consume,
            name: name.as_ref().to_string(),
        },
    )
}

/// Construct a block
pub fn block(pos: usize, items: Vec<SynNode>) -> SynNode {
    SynNode::new(pos, SynKind::Block(items))
}

/// Construct a call
pub fn call(pos: usize, callee: SynNode, args: Vec<SynNode>) -> SynNode {
    SynNode::new(
        pos,
        SynKind::Call {
            callee: Box::new(callee),
            args,
        },
    )
}

/// Construct a call of a named function
pub fn call_named<T: AsRef<str>>(pos: usize, callee: T, args: Vec<SynNode>) -> SynNode {
    call(pos, name(pos, callee), args)
}
