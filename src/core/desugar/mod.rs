//! Desugaring of the surface tree into the core lambda calculus.
//!
//! This:
//! - resolves names to de Bruijn indices, falling back to built-ins
//!   and effects
//! - interns atoms, text and binding names in a literal pool
//! - lowers blocks into chains of abstractions driven by the
//!   bindings each item introduces
//! - passes the arguments of macro calls as tagged structure so the
//!   macro can observe which of them bind
//!
//! Which arguments are treated as bindings is decided from syntax
//! alone, before anything is evaluated.

pub mod block;
pub mod builtins;
pub mod call;
pub mod desugarable;
pub mod desugarer;
pub mod literal;
pub mod wrap;

pub use desugarable::{Content, Desugarable};
pub use desugarer::{DesugarSettings, Desugarer};
pub use literal::Literal;

use crate::{
    core::{
        error::CoreError,
        expr::Program,
        verify,
    },
    syntax::ast::SynNode,
};
use log::debug;

/// Desugar the items of a top-level block into a checked program
pub fn desugar_program(
    items: &[SynNode],
    settings: &DesugarSettings,
) -> Result<Program, CoreError> {
    let program = desugar_content(&Content::new(0, items), settings)?;
    verify_program(&program, settings);
    Ok(program)
}

/// Desugar content read from a file into a program, leaving the
/// consistency check to the caller
pub fn desugar_content(
    content: &Content,
    settings: &DesugarSettings,
) -> Result<Program, CoreError> {
    debug!(
        "desugaring {} items of file {}",
        content.items().len(),
        content.file_id()
    );
    let mut desugarer = Desugarer::new(settings);
    let expr = content.desugar(&mut desugarer)?;
    Ok(desugarer.into_program(expr))
}

/// Check the de Bruijn structure of a program desugared with
/// `settings`
///
/// Panics on failure, which indicates a defect in the desugarer.
pub fn verify_program(program: &Program, settings: &DesugarSettings) {
    verify::binding::verify(&program.expr, settings.prelude.len());
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::expr::{acore::*, RESERVED_LITERALS};
    use crate::syntax::make::*;

    #[test]
    pub fn test_empty_program() {
        let program = desugar_program(&[], &DesugarSettings::default()).unwrap();
        assert_eq!(program.expr, abs(nil()));
        assert_eq!(program.literals.len(), RESERVED_LITERALS.len());
    }

    #[test]
    pub fn test_program_literals() {
        let program = desugar_program(
            &[atom(0, "a"), text(2, "a")],
            &DesugarSettings::default(),
        )
        .unwrap();
        assert_eq!(program.literals[4], Literal::Atom("a".to_string()));
        assert_eq!(program.literals[5], Literal::Text("a".to_string()));
    }

    #[test]
    pub fn test_content_reports_errors() {
        let items = vec![name(0, "nowhere")];
        let content = Content::new(0, &items);
        assert!(desugar_content(&content, &DesugarSettings::default()).is_err());
    }

    #[test]
    pub fn test_single_item_content_is_abstraction() {
        let settings = DesugarSettings::default();
        let items = [atom(0, "a")];
        let program = desugar_content(&Content::new(0, &items), &settings).unwrap();
        verify_program(&program, &settings);
        assert_eq!(program.expr, abs(lit(4)));
        assert_eq!(program.body(), Some(&lit(4)));
    }
}
