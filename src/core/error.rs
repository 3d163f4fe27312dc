//! Errors encountered during desugaring
use codespan::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

#[derive(Eq, PartialEq, Debug, Clone, Error)]
pub enum CoreError {
    #[error("unresolved name: {1}")]
    UnresolvedName(Span, String),
}

impl CoreError {
    /// Source span the error refers to
    pub fn span(&self) -> Span {
        match self {
            CoreError::UnresolvedName(span, _) => *span,
        }
    }

    /// Convert to a diagnostic against the file `file_id`
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let diag = Diagnostic::error().with_message(format!("{}", self));
        match self {
            CoreError::UnresolvedName(span, _) => diag
                .with_labels(vec![Label::primary(file_id, *span)])
                .with_notes(vec![
                    "names must be bound by an enclosing binding, be built in, or end in the effect suffix"
                        .to_string(),
                ]),
        }
    }
}
