//! YAML error diagnostics with source spans

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from reading or parsing YAML files
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),
}

/// A YAML syntax error with the offending location highlighted
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse {filename}")]
#[diagnostic(help("Check the YAML syntax near the highlighted location"))]
pub struct YamlSyntaxError {
    /// File being parsed
    pub filename: String,

    /// Underlying parser message
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{message}")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error and the source content
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err
            .location()
            .map(|loc| SourceSpan::from(loc.index().min(content.len().saturating_sub(1))));

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}
