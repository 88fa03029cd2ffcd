//! Error and diagnostic types shared by the lexer and the parser.
//!
//! Both passes are best-effort: they never stop at the first problem.
//! Instead every [`LexError`] and [`ParseError`] is turned into a
//! [`Diagnostic`] and collected, so callers always get back whatever could
//! be built plus the full list of problems.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Errors detected while scanning characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character: '{ch}'")]
    UnexpectedChar { ch: char, location: SourceLocation },

    #[error("Unterminated string")]
    UnterminatedString { location: SourceLocation },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnexpectedChar { location, .. }
            | LexError::UnterminatedString { location } => *location,
        }
    }
}

/// A grammar rule found something other than what it required
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Which pass produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexical,
    Syntax,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lexical => write!(f, "lexer"),
            Phase::Syntax => write!(f, "parse"),
        }
    }
}

/// A recorded problem, kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub phase: Phase,
}

impl Diagnostic {
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error at line {}, column {}: {}",
            self.phase, self.line, self.column, self.message
        )
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        let location = err.location();
        Diagnostic {
            message: err.to_string(),
            line: location.line,
            column: location.column,
            phase: Phase::Lexical,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic {
            line: err.location.line,
            column: err.location.column,
            message: err.message,
            phase: Phase::Syntax,
        }
    }
}
