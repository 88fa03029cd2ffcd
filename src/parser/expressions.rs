//! Expression parsing implementation
//!
//! Binary operators are parsed by precedence climbing, one method per level.
//! Each level parses its left operand once and then folds further operands
//! into a left-deep tree, so every operator is left-associative.
//!
//! # Precedence (lowest to highest)
//!
//! | Level      | Operators          |
//! |------------|--------------------|
//! | equality   | `==` `!=`          |
//! | comparison | `>` `>=` `<` `<=`  |
//! | term       | `+` `-`            |
//! | factor     | `*` `/` `%`        |
//! | primary    | literals, names, `( expr )` |
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::diagnostic::ParseError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

const EQUALITY: &[(TokenKind, BinOp)] = &[
    (TokenKind::EqEq, BinOp::Eq),
    (TokenKind::NotEq, BinOp::Ne),
];

const COMPARISON: &[(TokenKind, BinOp)] = &[
    (TokenKind::Gt, BinOp::Gt),
    (TokenKind::Ge, BinOp::Ge),
    (TokenKind::Lt, BinOp::Lt),
    (TokenKind::Le, BinOp::Le),
];

const TERM: &[(TokenKind, BinOp)] = &[
    (TokenKind::Plus, BinOp::Add),
    (TokenKind::Minus, BinOp::Sub),
];

const FACTOR: &[(TokenKind, BinOp)] = &[
    (TokenKind::Star, BinOp::Mul),
    (TokenKind::Slash, BinOp::Div),
    (TokenKind::Percent, BinOp::Mod),
];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(Self::parse_equality)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(EQUALITY, Self::parse_comparison)
    }

    /// Parse comparison (> >= < <=)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(COMPARISON, Self::parse_term)
    }

    /// Parse additive (+ -)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(TERM, Self::parse_factor)
    }

    /// Parse multiplicative (* / %)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(FACTOR, Self::parse_primary)
    }

    /// One left-associative level: `operand (op operand)*`
    fn parse_binary_level(
        &mut self,
        operators: &[(TokenKind, BinOp)],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;

        loop {
            let loc = self.current_location();
            let Some(op) = operators
                .iter()
                .find(|(kind, _)| self.check(*kind))
                .map(|(_, op)| *op)
            else {
                break;
            };
            self.advance();

            let right = Box::new(operand(self)?);
            left = Expr::Binary {
                left: Box::new(left),
                op,
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse primary (literals, variables, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        if self.match_kind(TokenKind::Number) {
            let text = &self.previous().text;
            let value = text.parse::<f64>().map_err(|_| {
                ParseError::new(format!("Invalid number literal '{}'.", text), loc)
            })?;
            return Ok(Expr::Number {
                value,
                location: loc,
            });
        }

        if self.match_kind(TokenKind::String) {
            return Ok(Expr::Str {
                value: self.previous().text.clone(),
                location: loc,
            });
        }

        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable {
                name: self.previous().text.clone(),
                location: loc,
            });
        }

        // Parenthesized expression
        if self.match_kind(TokenKind::LParen) {
            let expr = self.parse_expression()?;
            self.expect_kind(TokenKind::RParen, "Expect ')' after expression.")?;
            return Ok(expr);
        }

        Err(self.error_here("Expect expression."))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::{Token, TokenKind};
    use crate::parser::parse::{parse, parse_source};

    fn expr(source: &str) -> Expr {
        let (mut program, errors) = parse_source(source);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        match program.statements.remove(0) {
            Stmt::Expression { expr, .. } => expr,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(expr("1 - 2 - 3;").to_string(), "((1 - 2) - 3)");
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(expr("1 + 2 * 3;").to_string(), "(1 + (2 * 3))");
        assert_eq!(expr("1 * 2 + 3;").to_string(), "((1 * 2) + 3)");
    }

    #[test]
    fn test_full_ladder() {
        assert_eq!(
            expr("a == b < c + d * e;").to_string(),
            "(a == (b < (c + (d * e))))"
        );
        assert_eq!(
            expr("a % b / c != d >= e - f;").to_string(),
            "(((a % b) / c) != (d >= (e - f)))"
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(expr("(1 + 2) * 3;").to_string(), "((1 + 2) * 3)");
    }

    #[test]
    fn test_binary_shape() {
        match expr("x <= 2.5;") {
            Expr::Binary {
                left,
                op,
                right,
                location,
            } => {
                assert_eq!(op, BinOp::Le);
                assert!(matches!(*left, Expr::Variable { ref name, .. } if name == "x"));
                assert!(matches!(*right, Expr::Number { value, .. } if value == 2.5));
                assert_eq!(location, SourceLocation::new(1, 3));
            }
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_string_primary() {
        assert!(matches!(
            expr("\"a\\nb\";"),
            Expr::Str { ref value, .. } if value == "a\nb"
        ));
    }

    #[test]
    fn test_unclosed_paren() {
        let (_, errors) = parse_source("(1 + 2;");
        assert_eq!(errors[0].message, "Expect ')' after expression.");
    }

    #[test]
    fn test_invalid_number_text() {
        // Only reachable with hand-built tokens; the lexer never produces this
        let tokens = vec![
            Token::new(TokenKind::Number, "1.2.3", SourceLocation::new(1, 1)),
            Token::new(TokenKind::Semicolon, ";", SourceLocation::new(1, 6)),
            Token::eof(1, 7),
        ];
        let (program, errors) = parse(tokens);

        assert!(program.is_empty());
        assert_eq!(errors[0].message, "Invalid number literal '1.2.3'.");
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        let source = format!("{}1{};", "(".repeat(300), ")".repeat(300));
        let (program, errors) = parse_source(&source);

        assert!(program.is_empty());
        assert_eq!(errors[0].message, "Maximum nesting depth exceeded.");
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn test_keyword_is_not_an_expression() {
        let (_, errors) = parse_source("return 1;");
        assert_eq!(errors[0].message, "Expect expression.");
    }
}
