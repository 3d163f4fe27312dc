//! Surface syntax tree handed to the desugarer
//!
//! The tree is produced by an external parser. It is deliberately
//! small: names, literals, explicit bindings, explicit blocks and
//! calls. Every node carries the byte offset at which it starts in
//! the source text so errors can be reported against it.
use codespan::Span;
use serde::{Deserialize, Serialize};

/// Anything which can be located in the source text
pub trait HasSpan {
    fn span(&self) -> Span;
}

/// Which scope consumes a binding
///
/// `:x` in `let(:x, v)` is consumed by the enclosing block (the
/// items which follow the call); `:x` in `foo(:x, { bar(x) })` is
/// consumed by the block argument of the same call. Both reduce to
/// the same queue entry during desugaring.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumeKind {
    #[default]
    Scope,
    Block,
}

/// The syntactic variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynKind {
    /// A name reference
    Var(String),
    /// A symbolic constant
    Atom(String),
    /// A text constant
    #[serde(rename = "str")]
    StrLit(String),
    /// Introduces `name` for `level` enclosing scopes
    Binding {
        level: u32,
        #[serde(default)]
        consume: ConsumeKind,
        name: String,
    },
    /// An explicit scope
    Block(Vec<SynNode>),
    /// Application of `callee` to `args`
    Call {
        callee: Box<SynNode>,
        args: Vec<SynNode>,
    },
}

/// A surface syntax node: source offset and variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynNode {
    pub pos: usize,
    pub kind: SynKind,
}

impl SynNode {
    pub fn new(pos: usize, kind: SynKind) -> Self {
        SynNode { pos, kind }
    }

    /// The binding name if this is a binding
    pub fn binding_name(&self) -> Option<&str> {
        match &self.kind {
            SynKind::Binding { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Length in bytes of the text that produced the node, where
    /// that can be known without the source
    fn width(&self) -> usize {
        match &self.kind {
            SynKind::Var(n) | SynKind::Atom(n) => n.len(),
            SynKind::StrLit(s) => s.len() + 2,
            SynKind::Binding { level, name, .. } => *level as usize + name.len(),
            _ => 1,
        }
    }
}

impl HasSpan for SynNode {
    fn span(&self) -> Span {
        let start = u32::try_from(self.pos).unwrap_or(u32::MAX);
        let end = u32::try_from(self.pos.saturating_add(self.width())).unwrap_or(u32::MAX);
        Span::new(start, end)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::syntax::make::*;

    #[test]
    pub fn test_deserialise_tree() {
        let json = r#"
        [
          { "pos": 0,
            "kind": { "call": {
              "callee": { "pos": 0, "kind": { "var": "let" } },
              "args": [
                { "pos": 4, "kind": { "binding": { "level": 1, "name": "x" } } },
                { "pos": 8, "kind": { "str": "hi" } }
              ] } } },
          { "pos": 14, "kind": { "var": "x" } }
        ]
        "#;
        let items: Vec<SynNode> = serde_json::from_str(json).unwrap();
        assert_eq!(
            items,
            vec![
                call(0, name(0, "let"), vec![bind(4, "x"), text(8, "hi")]),
                name(14, "x")
            ]
        );
    }

    #[test]
    pub fn test_binding_span_covers_sigils() {
        let node = bind_level(3, 2, "fact");
        assert_eq!(node.span(), Span::new(3, 9));
        assert_eq!(node.binding_name(), Some("fact"));
    }

    #[test]
    pub fn test_span_saturates_at_file_limit() {
        let near = name(u32::MAX as usize - 1, "abc");
        assert_eq!(near.span(), Span::new(u32::MAX - 1, u32::MAX));
        let beyond = name(usize::MAX, "x");
        assert_eq!(beyond.span(), Span::new(u32::MAX, u32::MAX));
    }
}
