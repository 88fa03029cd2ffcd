//! Declaration parsing implementation
//!
//! This module handles parsing of declarations:
//!
//! - Variable declarations: `let name: type = expr;`
//! - Function declarations: `fn name() -> type { ... }`
//! - Type annotations
//!
//! # Grammar
//!
//! ```text
//! declaration ::= var_decl | func_decl | statement
//! var_decl    ::= "let" identifier (":" type)? ("=" expression)? ";"
//! func_decl   ::= "fn" identifier "(" ")" ("->" type)? block
//! type        ::= "int" | "float" | "str" | "bool" | identifier
//! ```
//!
//! Functions take no parameters yet; the parentheses must be empty.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostic::ParseError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a declaration, falling back to a plain statement
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_kind(TokenKind::Let) {
            return self.parse_variable_declaration();
        }

        if self.match_kind(TokenKind::Fn) {
            return self.parse_function_declaration();
        }

        self.parse_statement()
    }

    /// Parse variable declaration after `let`
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.previous_location();
        let name = self.expect_identifier("Expect variable name.")?;

        let type_name = if self.match_kind(TokenKind::Colon) {
            self.parse_type()?
        } else {
            TypeName::Inferred
        };

        let initializer = if self.match_kind(TokenKind::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_kind(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::VarDecl {
            name,
            type_name,
            initializer,
            location: loc,
        })
    }

    /// Parse function declaration after `fn`
    fn parse_function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.previous_location();
        let name = self.expect_identifier("Expect function name.")?;

        self.expect_kind(TokenKind::LParen, "Expect '(' after function name.")?;
        self.expect_kind(TokenKind::RParen, "Expect ')' after parameters.")?;

        let return_type = if self.match_kind(TokenKind::Arrow) {
            self.parse_type()?
        } else {
            TypeName::Inferred
        };

        self.expect_kind(TokenKind::LBrace, "Expect '{' before function body.")?;
        let body = self.parse_block_statements()?;

        Ok(Stmt::Function {
            name,
            return_type,
            body,
            location: loc,
        })
    }

    /// Parse a type name after `:` or `->`
    pub(crate) fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        let type_name = match self.peek().kind {
            TokenKind::Int => TypeName::Int,
            TokenKind::Float => TypeName::Float,
            TokenKind::Str => TypeName::Str,
            TokenKind::Bool => TypeName::Bool,
            TokenKind::Identifier => TypeName::Named(self.peek().text.clone()),
            _ => return Err(self.error_here("Expect type name.")),
        };

        self.advance();
        Ok(type_name)
    }
}
