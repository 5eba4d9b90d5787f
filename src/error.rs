//! Error types for scene parsing and geometry construction.
//!
//! The renderer itself never fails: a missed ray returns the background
//! color and an unassigned material defaults to black. The two fallible
//! surfaces are parsing a scene file and normalizing a zero-length vector.

use thiserror::Error;

/// A 1-based source location used to report lexer/parser errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A lexical, syntactic or semantic error encountered while parsing a scene.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{location}: {message}")]
pub struct GrammarError {
    pub location: SourceLocation,
    pub message: String,
}

impl GrammarError {
    pub fn new(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A geometric construction that cannot succeed, e.g. normalizing the zero vector.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
}

/// Marker for malformed image data. No PFM parsing lives in this crate; this
/// variant exists so a host wiring an external image reader into the core
/// has a named error to convert into.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PfmFormatError {
    #[error("invalid PFM header")]
    InvalidHeader,
    #[error("unexpected end of file")]
    UnexpectedEof,
}
