//! Error types for masthead. Only loading author data can fail; rendering never does.

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use smol_str::SmolStr;
use std::path::PathBuf;

/// Main error type for masthead operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum MastheadError {
    /// The author data file could not be read
    #[error("failed to read author data from {}", .path.display())]
    #[diagnostic(code(masthead::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The author data was not well-formed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Two records share a key
    #[error("duplicate author key `{0}`")]
    #[diagnostic(
        code(masthead::duplicate_author),
        help("every author key must be unique within the data file")
    )]
    DuplicateAuthor(SmolStr),
}

/// Parse error with source code location information
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("could not parse author data: {source}")]
#[diagnostic(code(masthead::parse))]
pub struct ParseError {
    source: serde_json::Error,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    err_location: SourceSpan,
    err_line_col: (usize, usize),
    #[help]
    advice: Option<String>,
}

impl ParseError {
    /// Attach the offending document to a `serde_json` error.
    pub fn from_json(err: serde_json::Error, name: impl AsRef<str>, src: impl Into<String>) -> Self {
        let src = src.into();
        let line = err.line();
        let column = err.column();
        // serde_json reports line 0 when it has no position to give
        let err_location = if line == 0 {
            SourceSpan::new(SourceOffset::from(0), 0)
        } else {
            SourceSpan::new(SourceOffset::from_location(&src, line, column), 1)
        };
        let advice = if err.is_data() {
            Some(
                "each author needs `name`, `firstName` and `image`; `twitter` is optional"
                    .to_string(),
            )
        } else {
            None
        };
        Self {
            source: err,
            src: NamedSource::new(name, src),
            err_location,
            err_line_col: (line, column),
            advice,
        }
    }

    /// One-based line and column reported by the JSON parser.
    pub fn line_col(&self) -> (usize, usize) {
        self.err_line_col
    }
}
