//! Lexer (tokenizer) for Sable source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. Scanning is a single forward pass that never looks more than one
//! character past the cursor. Problems are recorded as diagnostics and
//! scanning carries on, so the result always ends with exactly one
//! [`TokenKind::Eof`] sentinel.

use super::ast::SourceLocation;
use super::diagnostic::{Diagnostic, LexError};
use std::fmt;
use tracing::{debug, trace};

/// The closed vocabulary of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,
    String,

    // Identifiers
    Identifier,

    // Keywords
    Fn,
    Return,
    Let,
    True,
    False,
    If,
    Else,
    While,
    Int,
    Float,
    Bool,
    Str,

    // Arithmetic
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %

    // Comparison
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    Le,    // <=
    Gt,    // >
    Ge,    // >=

    Bang, // !

    // Assignment
    Eq,     // =
    PlusEq, // +=

    PlusPlus, // ++
    Arrow,    // ->

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Dot,       // .
    Semicolon, // ;
    Colon,     // :

    // End of input
    Eof,
}

impl TokenKind {
    /// Look up a reserved word. Matching is case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "fn" => TokenKind::Fn,
            "return" => TokenKind::Return,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "int" => TokenKind::Int,
            "float" => TokenKind::Float,
            "bool" => TokenKind::Bool,
            "str" => TokenKind::Str,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Return
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::Str
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Fn => write!(f, "'fn'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::Float => write!(f, "'float'"),
            TokenKind::Bool => write!(f, "'bool'"),
            TokenKind::Str => write!(f, "'str'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::PlusEq => write!(f, "'+='"),
            TokenKind::PlusPlus => write!(f, "'++'"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// A single lexeme with its category and position.
///
/// `text` holds the decoded contents for string literals and the exact
/// source text for everything else. The end-of-input token has empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", SourceLocation::new(line, column))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::String => write!(f, "string {:?}", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Tokenize `source` in one pass, returning the tokens and any lexical
/// diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}

/// Lexer for Sable source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    line_start: usize, // index of the first character of the current line
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while let Some(ch) = self.peek() {
            self.scan_token(ch);
        }

        let eof_column = self.position - self.line_start + 1;
        self.tokens.push(Token::eof(self.line, eof_column));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized source"
        );

        let diagnostics = self.errors.into_iter().map(Diagnostic::from).collect();
        (self.tokens, diagnostics)
    }

    /// Scan whatever starts at the cursor. Always consumes at least one
    /// character.
    fn scan_token(&mut self, ch: char) {
        let start = self.current_location();

        match ch {
            // Whitespace; `advance` does the line bookkeeping for '\n'
            ' ' | '\t' | '\r' | '\n' => {
                self.advance();
            }

            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            ',' => self.single(TokenKind::Comma, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '.' => self.single(TokenKind::Dot, start),
            ':' => self.single(TokenKind::Colon, start),
            '*' => self.single(TokenKind::Star, start),
            '%' => self.single(TokenKind::Percent, start),

            '+' => {
                if self.peek_next() == Some('=') {
                    self.double(TokenKind::PlusEq, start);
                } else if self.peek_next() == Some('+') {
                    self.double(TokenKind::PlusPlus, start);
                } else {
                    self.single(TokenKind::Plus, start);
                }
            }
            '-' => {
                if self.peek_next() == Some('>') {
                    self.double(TokenKind::Arrow, start);
                } else {
                    self.single(TokenKind::Minus, start);
                }
            }
            '=' => self.with_optional_eq(TokenKind::EqEq, TokenKind::Eq, start),
            '!' => self.with_optional_eq(TokenKind::NotEq, TokenKind::Bang, start),
            '<' => self.with_optional_eq(TokenKind::Le, TokenKind::Lt, start),
            '>' => self.with_optional_eq(TokenKind::Ge, TokenKind::Gt, start),

            '/' => {
                if self.peek_next() == Some('/') {
                    self.skip_line_comment();
                } else {
                    self.single(TokenKind::Slash, start);
                }
            }

            '"' => self.string_literal(start),

            '0'..='9' => self.number_literal(start),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(start),

            _ => {
                self.advance();
                self.errors.push(LexError::UnexpectedChar { ch, location: start });
            }
        }
    }

    /// Consume one character and emit it as `kind`
    fn single(&mut self, kind: TokenKind, start: SourceLocation) {
        let ch = self.advance().unwrap_or_default();
        self.add_token(kind, ch.to_string(), start);
    }

    /// Consume two characters and emit them as `kind`
    fn double(&mut self, kind: TokenKind, start: SourceLocation) {
        let mut text = String::with_capacity(2);
        text.extend(self.advance());
        text.extend(self.advance());
        self.add_token(kind, text, start);
    }

    /// `=`, `!`, `<` and `>` all pick their two-character form when a `=`
    /// follows
    fn with_optional_eq(&mut self, long: TokenKind, short: TokenKind, start: SourceLocation) {
        if self.peek_next() == Some('=') {
            self.double(long, start);
        } else {
            self.single(short, start);
        }
    }

    /// Parse string literal, decoding escapes.
    ///
    /// An unterminated literal is reported at its opening quote, not at the
    /// line where input ran out.
    fn string_literal(&mut self, start: SourceLocation) {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                None => {
                    // Partial contents are dropped along with the token
                    self.errors
                        .push(LexError::UnterminatedString { location: start });
                    return;
                }
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    // Unknown escapes keep the escaped character as-is
                    Some(other) => value.push(other),
                    None => {
                        self.errors
                            .push(LexError::UnterminatedString { location: start });
                        return;
                    }
                },
                Some(ch) => value.push(ch),
            }
        }

        self.add_token(TokenKind::String, value, start);
    }

    /// Parse numeric literal: digits, optionally `.` and more digits.
    ///
    /// The text is kept as written; the parser converts it when it builds
    /// the literal node.
    fn number_literal(&mut self, start: SourceLocation) {
        let from = self.position;
        self.consume_digits();

        // A trailing dot without a digit after it is not part of the number
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        let text = self.slice(from);
        self.add_token(TokenKind::Number, text, start);
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, start: SourceLocation) {
        let from = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let ident = self.slice(from);
        let kind = TokenKind::keyword(&ident).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, ident, start);
    }

    /// Skip single-line comment (// ...), leaving the newline in place
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind, text: String, location: SourceLocation) {
        trace!(%kind, text = %text, line = location.line, column = location.column, "token");
        self.tokens.push(Token::new(kind, text, location));
    }

    fn slice(&self, from: usize) -> String {
        self.input[from..self.position].iter().collect()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek at the character after the current one
    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.line_start = self.position;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position - self.line_start + 1)
    }
}
