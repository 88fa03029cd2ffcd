//! Sable source code parser
//!
//! This module transforms Sable source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across [`declarations`],
//!   [`statements`] and [`expressions`]
//! - [`ast`]: AST node definitions
//! - [`diagnostic`]: error types and the collected [`diagnostic::Diagnostic`]
//! - [`pretty`]: fully parenthesized rendering of trees
//!
//! # Supported language
//!
//! - Declarations: `let name: type = expr;`, `fn name() -> type { ... }`
//! - Statements: blocks and expression statements
//! - Expressions: number and string literals, names, parentheses, and the
//!   binary operators `== != < <= > >= + - * / %`
//! - No function parameters, calls, assignment expressions or control flow
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
pub mod declarations;
pub mod diagnostic;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod pretty;
pub mod statements;
