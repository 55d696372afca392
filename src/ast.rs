use std::fmt;

use crate::interpreter::lexer::Token;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. The scanner decodes them into tokens and the parser lifts them into
/// [`Expr::Literal`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number such as `3` or `2.5`.
    Number(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without its quotes.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Operator nodes keep the token they were parsed from so the evaluator can
/// report errors on the right line. Every child is exclusively owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// A parenthesized expression.
    Grouping {
        /// The enclosed expression.
        expr: Box<Self>,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operator token.
        operator: Token,
        /// The operand expression.
        expr:     Box<Self>,
    },
    /// A binary operation (arithmetic, comparison or set algebra).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Roster form `{e1, e2, ...}`.
    SetLiteral {
        /// Element expressions in source order.
        elements: Vec<Self>,
    },
    /// Builder form `{ result | variable in domain, filter }`.
    Comprehension {
        /// Expression producing each element of the result.
        result:   Box<Self>,
        /// The bound variable.
        variable: Token,
        /// Expression producing the set iterated over.
        domain:   Box<Self>,
        /// Optional filter; elements for which it is falsy are skipped.
        filter:   Option<Box<Self>>,
    },
    /// Cardinality `|expr|`.
    Cardinality {
        /// The opening `|` token.
        pipe: Token,
        /// The expression whose element count is taken.
        expr: Box<Self>,
    },
    /// Call expression such as `max(A)`.
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// The closing `)` token.
        paren:     Token,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
    /// Assignment to an existing variable, `name = value`.
    Assign {
        /// The target identifier token.
        name:  Token,
        /// The value expression.
        value: Box<Self>,
    },
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print expr;`
    Print {
        /// The expression to print.
        expr: Expr,
    },
    /// `let name = initializer;`
    Let {
        /// The name being bound.
        name:        Token,
        /// The initial value.
        initializer: Expr,
    },
    /// `def name(params) = body;`
    Function(FunctionDef),
    /// An expression evaluated for its side effects, `expr;`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a function declaration.
///
/// Function declarations are parsed in full but have no runtime semantics yet;
/// evaluating one raises an `Unsupported` error.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   Token,
    /// The parameter names.
    pub params: Vec<Token>,
    /// The body expression.
    pub body:   Expr,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Set union (`union`)
    Union,
    /// Set intersection (`intersect`)
    Intersect,
    /// Subset-or-equal test (`subseteq`)
    SubsetEq,
    /// Membership test (`in`)
    In,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, In, Intersect, Less, LessEqual, Mod, Mul,
            NotEqual, Sub, SubsetEq, Union,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            Union => "union",
            Intersect => "intersect",
            SubsetEq => "subseteq",
            In => "in",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Prints the expression back as source text.
///
/// Grouping nodes are the only source of parentheses, so printing a parsed
/// tree and parsing the text again yields the same tree.
///
/// ## Example
/// ```
/// use setta::parse_source;
///
/// let mut diagnostics: Vec<setta::report::Diagnostic> = Vec::new();
/// let parsed = parse_source("print {x * x | x in A, x > 1};", &mut diagnostics);
///
/// assert_eq!(parsed.statements[0].to_string(), "print {x * x | x in A, x > 1};");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{}", name.lexeme),
            Self::Grouping { expr } => write!(f, "({expr})"),
            Self::Unary { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::Binary { left, op, right, .. } => write!(f, "{left} {op} {right}"),
            Self::SetLiteral { elements } => {
                write!(f, "{{")?;
                write_comma_separated(f, elements)?;
                write!(f, "}}")
            },
            Self::Comprehension { result,
                                  variable,
                                  domain,
                                  filter, } => {
                write!(f, "{{{result} | {} in {domain}", variable.lexeme)?;
                if let Some(filter) = filter {
                    write!(f, ", {filter}")?;
                }
                write!(f, "}}")
            },
            Self::Cardinality { expr, .. } => write!(f, "|{expr}|"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Assign { name, value } => write!(f, "{} = {value}", name.lexeme),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print { expr } => write!(f, "print {expr};"),
            Self::Let { name, initializer } => write!(f, "let {} = {initializer};", name.lexeme),
            Self::Function(def) => {
                write!(f, "def {}(", def.name.lexeme)?;
                for (index, param) in def.params.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param.lexeme)?;
                }
                write!(f, ") = {};", def.body)
            },
            Self::Expression { expr } => write!(f, "{expr};"),
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
