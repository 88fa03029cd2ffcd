// AST (Abstract Syntax Tree) definitions for the Sable front-end

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    /// The operator as it is written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

/// Declared type of a variable or function result.
///
/// Anything that is not one of the built-in type keywords is kept verbatim
/// in [`TypeName::Named`]; nothing checks that such a type exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeName {
    /// No annotation was written
    #[default]
    Inferred,
    Int,
    Float,
    Str,
    Bool,
    Named(String),
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number {
        value: f64,
        location: SourceLocation,
    },
    Str {
        value: String,
        location: SourceLocation,
    },
    Variable {
        name: String,
        location: SourceLocation,
    },
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
        location: SourceLocation, // location of the operator
    },
}

impl Expr {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Number { location, .. }
            | Expr::Str { location, .. }
            | Expr::Variable { location, .. }
            | Expr::Binary { location, .. } => *location,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl {
        name: String,
        type_name: TypeName,
        initializer: Option<Expr>,
        location: SourceLocation,
    },
    /// Function declaration. Parameters are not part of the language yet.
    Function {
        name: String,
        return_type: TypeName,
        body: Vec<Stmt>,
        location: SourceLocation,
    },
    Block {
        statements: Vec<Stmt>,
        location: SourceLocation,
    },
    Expression {
        expr: Expr,
        location: SourceLocation,
    },
}

impl Stmt {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::VarDecl { location, .. }
            | Stmt::Function { location, .. }
            | Stmt::Block { location, .. }
            | Stmt::Expression { location, .. } => *location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>, // Top-level declarations in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
