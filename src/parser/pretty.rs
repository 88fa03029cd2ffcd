//! Canonical text rendering of parsed trees.
//!
//! Binary expressions are always fully parenthesized so the rendered form
//! shows exactly how the parser grouped operands: `1 + 2 * 3` prints as
//! `(1 + (2 * 3))`. Statements print one per line with four-space
//! indentation inside blocks and function bodies.

use super::ast::{BinOp, Expr, Program, Stmt, TypeName};
use std::fmt;

const INDENT: &str = "    ";

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Inferred => write!(f, "inferred"),
            TypeName::Int => write!(f, "int"),
            TypeName::Float => write!(f, "float"),
            TypeName::Str => write!(f, "str"),
            TypeName::Bool => write!(f, "bool"),
            TypeName::Named(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value, .. } => write!(f, "{}", value),
            Expr::Str { value, .. } => write!(f, "{:?}", value),
            Expr::Variable { name, .. } => write!(f, "{}", name),
            Expr::Binary {
                left, op, right, ..
            } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write_stmt(f, stmt, 0)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;

    match stmt {
        Stmt::VarDecl {
            name,
            type_name,
            initializer,
            ..
        } => {
            write!(f, "let {}", name)?;
            if *type_name != TypeName::Inferred {
                write!(f, ": {}", type_name)?;
            }
            if let Some(init) = initializer {
                write!(f, " = {}", init)?;
            }
            write!(f, ";")
        }
        Stmt::Function {
            name,
            return_type,
            body,
            ..
        } => {
            write!(f, "fn {}()", name)?;
            if *return_type != TypeName::Inferred {
                write!(f, " -> {}", return_type)?;
            }
            f.write_str(" ")?;
            write_body(f, body, depth)
        }
        Stmt::Block { statements, .. } => write_body(f, statements, depth),
        Stmt::Expression { expr, .. } => write!(f, "{};", expr),
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, statements: &[Stmt], depth: usize) -> fmt::Result {
    if statements.is_empty() {
        return f.write_str("{}");
    }

    writeln!(f, "{{")?;
    for stmt in statements {
        write_stmt(f, stmt, depth + 1)?;
        writeln!(f)?;
    }
    write_indent(f, depth)?;
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use crate::parser::parse::parse_source;

    fn render(source: &str) -> String {
        let (program, errors) = parse_source(source);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        program.to_string()
    }

    #[test]
    fn test_render_declarations() {
        assert_eq!(render("let x:int=1+2;"), "let x: int = (1 + 2);\n");
        assert_eq!(render("let y;"), "let y;\n");
        assert_eq!(render("let s = \"a\\tb\";"), "let s = \"a\\tb\";\n");
    }

    #[test]
    fn test_render_function() {
        let source = "fn main() -> Point { let p = 0.5; { p; } {} }";
        assert_eq!(
            render(source),
            "fn main() -> Point {\n    let p = 0.5;\n    {\n        p;\n    }\n    {}\n}\n"
        );
    }

    #[test]
    fn test_rendered_output_reparses_to_same_shape() {
        let source = "fn f() { let a: float = (1 - 2) - 3 * x; a >= 2 == b; }";
        let first = render(source);
        assert_eq!(render(&first), first);
    }
}
