//! The Desugarable trait

use crate::{
    core::{error::CoreError, expr::Expr},
    syntax::ast::SynNode,
};

use super::Desugarer;

/// Surface syntax which can be lowered into a core expression
pub trait Desugarable {
    fn desugar(&self, _: &mut Desugarer) -> Result<Expr, CoreError>;
}

/// A sequence of nodes desugars as the items of a block
impl Desugarable for [SynNode] {
    fn desugar(&self, desugarer: &mut Desugarer) -> Result<Expr, CoreError> {
        desugarer.desugar_block(self)
    }
}

/// Top-level items for desugaring, with the file id used for
/// diagnostics
pub struct Content<'a>(usize, &'a [SynNode]);

impl<'a> Content<'a> {
    pub fn new(file_id: usize, items: &'a [SynNode]) -> Self {
        Content(file_id, items)
    }

    pub fn file_id(&self) -> usize {
        self.0
    }

    pub fn items(&self) -> &[SynNode] {
        self.1
    }
}

/// Content always desugars as a block, so the result is an
/// abstraction
impl Desugarable for Content<'_> {
    fn desugar(&self, desugarer: &mut Desugarer) -> Result<Expr, CoreError> {
        self.items().desugar(desugarer)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::expr::acore::*;
    use crate::syntax::make::*;

    #[test]
    pub fn test_content_desugars_as_block() {
        let mut ds = Desugarer::default();
        let a = ds.atom("a");

        let single = [atom(0, "a")];
        let content = Content::new(7, &single);
        assert_eq!(content.file_id(), 7);
        assert_eq!(content.desugar(&mut ds).unwrap(), abs(lit(a)));

        let none = Content::new(0, &[]);
        assert!(none.desugar(&mut ds).unwrap().is_abs());
    }
}
