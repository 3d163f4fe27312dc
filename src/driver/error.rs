//! Overall high-level error type for bindsugar
use crate::core::error::CoreError;
use codespan_reporting::diagnostic::Diagnostic;
use std::fmt::Display;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid syntax tree: {0}")]
    Tree(#[from] serde_json::Error),
    #[error("path {0} could not be read")]
    FileCouldNotBeRead(String),
}

fn default_diagnostic<E>(e: &E) -> Diagnostic<usize>
where
    E: Display,
{
    Diagnostic::error().with_message(format!("{}", e))
}

impl DriverError {
    /// Convert to a diagnostic, labelling positions in `source` if
    /// source text is available
    pub fn to_diagnostic(&self, source: Option<usize>) -> Diagnostic<usize> {
        match (self, source) {
            (DriverError::Core(e), Some(file_id)) => e.to_diagnostic(file_id),
            (e, _) => default_diagnostic(e),
        }
    }
}
