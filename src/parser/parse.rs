//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the cursor helpers, the top-level recovery loop, and the [`parse`] entry
//! point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: `let` and `fn` declarations, type annotations
//! - `statements`: blocks and expression statements
//! - `expressions`: the binary precedence ladder and primaries
//!
//! # Error recovery
//!
//! Grammar rules return `Result<_, ParseError>` and bubble failures up with
//! `?`. Only [`Parser::parse_program`] catches them: it records a
//! [`Diagnostic`], skips exactly one token and tries the next declaration.
//! Recovered statements after an error are not guaranteed to mean anything.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::diagnostic::{Diagnostic, ParseError};
use crate::parser::lexer::{tokenize, Token, TokenKind};
use tracing::debug;

/// How deep blocks and parenthesized expressions may nest before the parser
/// gives up on the construct instead of overflowing the stack.
pub(crate) const MAX_DEPTH: usize = 128;

/// Parse a token sequence into a program plus syntax diagnostics.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Diagnostic>) {
    Parser::new(tokens).parse_program()
}

/// Run both passes over `source`. Lexical diagnostics come first.
pub fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = tokenize(source);
    let (program, parse_diagnostics) = parse(tokens);
    diagnostics.extend(parse_diagnostics);
    (program, diagnostics)
}

/// Recursive descent parser for Sable
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Take ownership of a token sequence.
    ///
    /// If the sequence does not end with an end-of-input token one is
    /// appended, so the cursor always has somewhere to stop.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.location.line);
            tokens.push(Token::eof(line, 1));
        }

        Self {
            tokens,
            position: 0,
            depth: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(mut self) -> (Program, Vec<Diagnostic>) {
        let mut program = Program::new();

        while !self.is_at_end() {
            match self.parse_declaration() {
                Ok(stmt) => program.statements.push(stmt),
                Err(err) => {
                    debug!(
                        line = err.location.line,
                        column = err.location.column,
                        message = %err.message,
                        "recovering from parse error"
                    );
                    self.diagnostics.push(err.into());
                    self.advance();
                }
            }
        }

        debug!(
            statements = program.len(),
            errors = self.diagnostics.len(),
            "parsed program"
        );

        (program, self.diagnostics)
    }

    // ===== Helper methods =====

    /// Consume the current token if it has the given kind
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Never true at end of input, whatever `kind` is
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Consume a token of the given kind or fail with `message` at the
    /// current token
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        self.expect_kind(TokenKind::Identifier, message)
            .map(|token| token.text.clone())
    }

    pub(crate) fn error_here(&self, message: &str) -> ParseError {
        ParseError::new(message, self.current_location())
    }

    /// Run a recursive rule one nesting level deeper, failing at the current
    /// token once [`MAX_DEPTH`] is reached
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here("Maximum nesting depth exceeded."));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
