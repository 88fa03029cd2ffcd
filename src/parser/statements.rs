//! Statement parsing implementation
//!
//! - Compound statements: `{ ... }`
//! - Expression statements: `expr;`
//!
//! # Grammar
//!
//! ```text
//! statement ::= block | expr_stmt
//! block     ::= "{" declaration* "}"
//! expr_stmt ::= expression ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostic::ParseError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::LBrace) {
            let loc = self.previous_location();
            let statements = self.parse_block_statements()?;
            return Ok(Stmt::Block {
                statements,
                location: loc,
            });
        }

        self.parse_expression_statement()
    }

    /// Parse declarations up to and including the closing brace. The
    /// opening brace has already been consumed.
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.nested(|parser| {
            let mut statements = Vec::new();

            while !parser.check(TokenKind::RBrace) && !parser.is_at_end() {
                statements.push(parser.parse_declaration()?);
            }

            parser.expect_kind(TokenKind::RBrace, "Expect '}' after block.")?;
            Ok(statements)
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();
        let expr = self.parse_expression()?;
        self.expect_kind(TokenKind::Semicolon, "Expect ';' after expression.")?;

        Ok(Stmt::Expression {
            expr,
            location: loc,
        })
    }
}
