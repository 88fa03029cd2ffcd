//! # Introduction
//!
//! Sable is the front-end of a small imperative language. It turns source
//! text into a syntax tree and a list of diagnostics, and stops there: no
//! name resolution, type checking or evaluation happens here.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + Diagnostics
//! ```
//!
//! 1. [`parser::lexer`] — scans characters into tokens, recording lexical
//!    problems and carrying on.
//! 2. [`parser::parse`] — builds [`parser::ast::Program`] by recursive
//!    descent, recovering from syntax errors one token at a time.
//! 3. [`report`] — renders diagnostics against the source for terminals;
//!    used by the `sable` binary.
//!
//! ```
//! use sable::parser::parse::parse_source;
//!
//! let (program, diagnostics) = parse_source("let x: int = 1 + 2 * 3;");
//! assert!(diagnostics.is_empty());
//! assert_eq!(program.to_string(), "let x: int = (1 + (2 * 3));\n");
//! ```

pub mod parser;
pub mod report;
