pub mod formatter;

use compact_str::CompactString;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn get_statement(&self, index: usize) -> Option<&Statement> {
        self.body.get(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Empty,
    Block(Vec<Statement>),
    VarDeclaration {
        name: CompactString,
        initializer: Option<Expression>,
        constant: bool,
        line: u32,
    },
    Expression(Expression),
}

/// Expression nodes own their children exclusively; the tree is immutable
/// once the parser hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary {
        operator: BinaryOperator,
        line: u32,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOperator,
        line: u32,
        operand: Box<Expression>,
    },
    Assignment {
        name: CompactString,
        line: u32,
        value: Box<Expression>,
    },
    Symbol {
        name: CompactString,
        line: u32,
    },
    Integer(i64),
    Real(f64),
    Str(CompactString),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Quotient,
    Remainder,
    Modulo,
    Power,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    EqualEqual,
    NotEqual,
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Quotient => "%",
            BinaryOperator::Remainder => "rem",
            BinaryOperator::Modulo => "mod",
            BinaryOperator::Power => "^",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::EqualEqual => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Nand => "nand",
            BinaryOperator::Nor => "nor",
            BinaryOperator::Xor => "xor",
            BinaryOperator::Xnor => "xnor",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
    Sqrt,
    Ln,
    Lg,
    Log,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "not",
            UnaryOperator::Sqrt => "sqrt",
            UnaryOperator::Ln => "ln",
            UnaryOperator::Lg => "lg",
            UnaryOperator::Log => "log",
        };
        write!(f, "{text}")
    }
}
