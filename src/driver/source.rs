//! Loading of syntax trees and the source text they came from
use crate::driver::error::DriverError;
use crate::syntax::ast::SynNode;
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::{self, SimpleFiles};
use codespan_reporting::term::emit;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A loader for the syntax tree and the source text it was parsed
/// from, which keeps the text for error reporting.
pub struct SourceLoader {
    /// Access to source file text
    files: SimpleFiles<String, String>,
    /// File id of the source text, if one was supplied
    source: Option<usize>,
}

impl Default for SourceLoader {
    fn default() -> Self {
        SourceLoader {
            files: SimpleFiles::new(),
            source: None,
        }
    }
}

impl SourceLoader {
    /// Read a JSON syntax tree from `path`, `-` meaning stdin
    pub fn load_tree(&self, path: &str) -> Result<Vec<SynNode>, DriverError> {
        let text = if path == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(path)
                .map_err(|_| DriverError::FileCouldNotBeRead(path.to_string()))?
        };

        let tree = parse_tree(&text)?;
        debug!("loaded {} top-level items from {}", tree.len(), path);
        Ok(tree)
    }

    /// Read source text so diagnostics can refer to it
    pub fn load_source(&mut self, path: &Path) -> Result<usize, DriverError> {
        let text = fs::read_to_string(path)
            .map_err(|_| DriverError::FileCouldNotBeRead(path.display().to_string()))?;
        Ok(self.add_source(path.display().to_string(), text))
    }

    /// Register source text directly
    pub fn add_source<N: Into<String>>(&mut self, name: N, text: String) -> usize {
        let id = self.files.add(name.into(), text);
        self.source = Some(id);
        id
    }

    /// File id of the source text, if any
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Diagnostic for an error, pointing into source text if we have
    /// it
    pub fn diagnostic(&self, error: &DriverError) -> Diagnostic<usize> {
        error.to_diagnostic(self.source)
    }

    pub fn diagnose_to_stderr(&self, diag: &Diagnostic<usize>) -> Result<(), files::Error> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        let result = emit(&mut writer.lock(), &config, &self.files, diag);
        result
    }

    pub fn diagnose_to_string(&self, diag: &Diagnostic<usize>) -> Result<String, files::Error> {
        let mut s: Vec<u8> = Vec::new();
        {
            let mut writer = NoColor::new(&mut s);
            let config = codespan_reporting::term::Config::default();
            emit(&mut writer, &config, &self.files, diag)?;
        }
        Ok(String::from_utf8_lossy(&s).into_owned())
    }
}

/// Parse the JSON form of a top-level block
pub fn parse_tree(text: &str) -> Result<Vec<SynNode>, DriverError> {
    Ok(serde_json::from_str(text)?)
}
