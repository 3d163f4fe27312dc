//! Command line argument handling with clap v4.

use crate::{common::environment::VarKind, core::desugar::DesugarSettings};
use clap::Parser;
use itertools::Itertools;
use std::fmt;
use std::path::PathBuf;

/// How to write out the desugared program
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty printed lambda terms
    #[default]
    Pretty,
    /// Program and literal table as JSON
    Json,
    /// Debug print of the expression structure
    Debug,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Debug => write!(f, "debug"),
        }
    }
}

/// Bindsugar - desugar explicit binding syntax into lambda terms
#[derive(Parser, Debug, Clone)]
#[command(name = "bsg")]
#[command(about = "Desugar explicit binding syntax into lambda terms")]
#[command(version)]
pub struct BindsugarCli {
    /// JSON syntax tree to desugar (`-` for stdin)
    #[arg(value_name = "TREE", default_value = "-")]
    pub tree: String,

    /// Source text the tree was parsed from, for diagnostics
    #[arg(short = 's', long = "source")]
    pub source: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Page width for pretty output
    #[arg(short = 'w', long = "width", default_value = "80")]
    pub width: usize,

    /// Bring a macro name into scope around the program
    #[arg(short = 'm', long = "macro", action = clap::ArgAction::Append)]
    pub macros: Vec<String>,

    /// Bring an ordinary name into scope around the program
    #[arg(short = 'v', long = "value", action = clap::ArgAction::Append)]
    pub values: Vec<String>,

    /// Suffix marking unresolved names as effects
    #[arg(long = "effect-suffix", default_value = "!")]
    pub effect_suffix: String,

    /// Print phase timings to stderr before exiting
    #[arg(short = 'S', long = "statistics")]
    pub statistics: bool,

    /// Turn on debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

/// Options for a desugaring run
#[derive(Debug, Clone)]
pub struct DesugarOptions {
    tree: String,
    source: Option<PathBuf>,
    format: OutputFormat,
    width: usize,
    settings: DesugarSettings,
    statistics: bool,
    debug: bool,
}

impl Default for DesugarOptions {
    fn default() -> Self {
        DesugarOptions {
            tree: "-".to_string(),
            source: None,
            format: OutputFormat::default(),
            width: 80,
            settings: DesugarSettings::default(),
            statistics: false,
            debug: false,
        }
    }
}

impl From<BindsugarCli> for DesugarOptions {
    /// Values are seeded outside macros, each in command line order
    fn from(cli: BindsugarCli) -> Self {
        let settings = cli
            .values
            .iter()
            .fold(DesugarSettings::default(), |s, v| s.with_value(v));
        let settings = cli
            .macros
            .iter()
            .fold(settings, |s, m| s.with_macro(m))
            .with_effect_suffix(&cli.effect_suffix);

        DesugarOptions {
            tree: cli.tree,
            source: cli.source,
            format: cli.format,
            width: cli.width,
            settings,
            statistics: cli.statistics,
            debug: cli.debug,
        }
    }
}

impl DesugarOptions {
    pub fn from_args() -> Self {
        DesugarOptions::from(BindsugarCli::parse())
    }

    /// Path of the tree, `-` meaning stdin
    pub fn tree(&self) -> &str {
        &self.tree
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn settings(&self) -> &DesugarSettings {
        &self.settings
    }

    pub fn statistics(&self) -> bool {
        self.statistics
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn with_tree<T: AsRef<str>>(mut self, tree: T) -> Self {
        self.tree = tree.as_ref().to_string();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_macro<T: AsRef<str>>(mut self, name: T) -> Self {
        self.settings = self.settings.with_macro(name);
        self
    }

    pub fn with_value<T: AsRef<str>>(mut self, name: T) -> Self {
        self.settings = self.settings.with_value(name);
        self
    }

    /// Describe the options in effect
    pub fn explanation(&self) -> String {
        let names = |kind: VarKind| {
            self.settings
                .prelude
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, n)| n.as_str())
                .join(", ")
        };

        format!(
            "tree: {}\nformat: {}\nmacros: {}\nvalues: {}\neffect suffix: {}",
            self.tree,
            self.format,
            names(VarKind::Macro),
            names(VarKind::Ordinary),
            self.settings.effect_suffix
        )
    }
}
