//! All error types for the themefile crate.
//!
//! Parsing returns a [`ParseError`] describing the first offending line.
//! Every other fallible operation (file I/O, building documents in memory)
//! returns the crate-wide [`Error`].

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

/// The class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Malformed section header, empty key, missing `=`, or an unterminated
    /// locale tag.
    InvalidSyntax,
    /// A bad `\` escape sequence or an embedded NUL.
    InvalidEscapes,
    /// A character other than a space between the key (or locale) and `=`.
    InvalidChars,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::InvalidSyntax => "invalid syntax",
            ParseErrorKind::InvalidEscapes => "invalid escapes",
            ParseErrorKind::InvalidChars => "invalid characters",
        };
        f.write_str(name)
    }
}

/// Where in the input a parse error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// Name of the enclosing section, unless it is the preamble.
    pub section: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Some(section) => write!(f, "in section {} at line {}", section, self.line),
            None => write!(f, "at line {}", self.line),
        }
    }
}

/// The single error reported by a failed parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error {location}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        line: usize,
        section: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        ParseError {
            kind,
            location: Location {
                line,
                section: section.map(str::to_string),
            },
            message: message.into(),
        }
    }

    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// Name of the section the offending line belongs to, if named.
    pub fn section(&self) -> Option<&str> {
        self.location.section.as_deref()
    }
}
