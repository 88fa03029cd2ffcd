// Integration tests for the Sable front-end

use sable::parser::ast::*;
use sable::parser::diagnostic::Phase;
use sable::parser::lexer::{tokenize, TokenKind};
use sable::parser::parse::{parse, parse_source};
use std::fs;
use std::path::Path;

fn first_expr(source: &str) -> Expr {
    let (mut program, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    match program.statements.remove(0) {
        Stmt::Expression { expr, .. } => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_showcase_file() {
    let path = Path::new("demos/showcase.sb");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let (program, diagnostics) = parse_source(&source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    assert_eq!(program.len(), 7);

    let types: Vec<_> = program
        .statements
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::VarDecl { type_name, .. } => Some(type_name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        types,
        vec![
            TypeName::Int,
            TypeName::Float,
            TypeName::Str,
            TypeName::Bool,
            TypeName::Named("Point".to_string()),
            TypeName::Inferred,
        ]
    );

    match &program.statements[6] {
        Stmt::Function {
            name,
            return_type,
            body,
            location,
        } => {
            assert_eq!(name, "main");
            assert_eq!(*return_type, TypeName::Int);
            assert_eq!(body.len(), 4);
            assert_eq!(location.line, 10);
        }
        other => panic!("Expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_tokens_flow_into_parser() {
    let (tokens, lex_diagnostics) = tokenize("let x = 1;");
    assert!(lex_diagnostics.is_empty());
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

    let (program, diagnostics) = parse(tokens);
    assert!(diagnostics.is_empty());
    assert_eq!(program.to_string(), "let x = 1;\n");
}

#[test]
fn test_left_associativity() {
    match first_expr("1 - 2 - 3;") {
        Expr::Binary {
            left,
            op: BinOp::Sub,
            right,
            ..
        } => {
            assert_eq!(left.to_string(), "(1 - 2)");
            assert!(matches!(*right, Expr::Number { value, .. } if value == 3.0));
        }
        other => panic!("Expected subtraction, got {:?}", other),
    }
}

#[test]
fn test_precedence() {
    match first_expr("1 + 2 * 3;") {
        Expr::Binary {
            left,
            op: BinOp::Add,
            right,
            ..
        } => {
            assert!(matches!(*left, Expr::Number { value, .. } if value == 1.0));
            assert_eq!(right.to_string(), "(2 * 3)");
        }
        other => panic!("Expected addition, got {:?}", other),
    }
}

#[test]
fn test_error_isolation() {
    let (program, diagnostics) = parse_source("let ; let x = 1;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(program.len(), 1);
    assert!(matches!(&program.statements[0], Stmt::VarDecl { name, .. } if name == "x"));
}

#[test]
fn test_recovery_keeps_later_statements() {
    let source = "let a = 1;\nlet b = (2;\nlet c = 3;\nfn f() { c; }";
    let (program, diagnostics) = parse_source(source);

    // `(2;` fails at `;`; skipping it lands on `let c`
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Expect ')' after expression.");
    assert_eq!(diagnostics[0].line, 2);

    let names: Vec<_> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::VarDecl { name, .. } | Stmt::Function { name, .. } => name.as_str(),
            _ => "?",
        })
        .collect();
    assert_eq!(names, vec!["a", "c", "f"]);
}

#[test]
fn test_unterminated_string() {
    let (tokens, diagnostics) = tokenize("\"abc");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].phase, Phase::Lexical);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_string_escape_decoding() {
    let (tokens, _) = tokenize(r#""a\nb""#);
    assert_eq!(tokens[0].text, "a\nb");
}

#[test]
fn test_compound_assignment_is_one_token() {
    let (tokens, _) = tokenize("+=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::PlusEq);
    assert_eq!(tokens[0].text, "+=");
}

#[test]
fn test_keyword_versus_identifier() {
    let (tokens, _) = tokenize("let letter");
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "letter");
}

#[test]
fn test_arrow_is_not_swallowed() {
    let (tokens, diagnostics) = tokenize("a->b");
    assert!(diagnostics.is_empty());
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );

    // An arrow outside a function signature is a syntax error, not silence
    let (program, diagnostics) = parse_source("a -> b;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Expect ';' after expression.");
    assert_eq!(diagnostics[0].column, 3);
    // The arrow is skipped and `b;` still parses
    assert_eq!(program.len(), 1);
}

#[test]
fn test_mixed_lexical_and_syntax_errors() {
    let (program, diagnostics) = parse_source("let x = 1 $ 2;\nlet y = 3;");

    // `$` is dropped by the lexer, which leaves `1 2` and a syntax error
    assert_eq!(diagnostics[0].phase, Phase::Lexical);
    assert_eq!(diagnostics[0].message, "Unexpected character: '$'");
    assert!(diagnostics[1..].iter().all(|d| d.phase == Phase::Syntax));
    assert!(program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::VarDecl { name, .. } if name == "y")));
}

#[test]
fn test_keywords_are_classified() {
    let (tokens, _) = tokenize("fn main while x");
    let keywords: Vec<_> = tokens.iter().map(|t| t.kind.is_keyword()).collect();
    assert_eq!(keywords, vec![true, false, true, false, false]);
}

#[test]
fn test_binary_location_is_operator() {
    let expr = first_expr("alpha\n  * beta;");
    assert_eq!(expr.location(), SourceLocation::new(2, 3));
    match expr {
        Expr::Binary { left, right, .. } => {
            assert_eq!(left.location(), SourceLocation::new(1, 1));
            assert_eq!(right.location(), SourceLocation::new(2, 5));
        }
        other => panic!("Expected multiplication, got {:?}", other),
    }
}

#[test]
fn test_deep_nesting_is_a_diagnostic() {
    let parens = format!("{}1{};\nlet after = 2;", "(".repeat(1000), ")".repeat(1000));
    let (program, diagnostics) = parse_source(&parens);
    assert_eq!(diagnostics[0].message, "Maximum nesting depth exceeded.");
    assert!(program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::VarDecl { name, .. } if name == "after")));

    let blocks = format!("{}{}", "{".repeat(3000), "}".repeat(3000));
    let (_, diagnostics) = parse_source(&blocks);
    assert_eq!(diagnostics[0].message, "Maximum nesting depth exceeded.");
}
