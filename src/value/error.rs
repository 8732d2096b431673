use super::Value;
use crate::ast::{BinaryOperator, UnaryOperator};
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Integer overflow while evaluating the expression.")]
    Overflow,
    #[error("Unknown symbol '{0}'.")]
    UndefinedSymbol(CompactString),
    #[error("Symbol '{0}' is already declared in this scope.")]
    Redeclaration(CompactString),
    #[error("Cannot assign to constant '{0}'.")]
    ConstAssignment(CompactString),
    #[error("Cannot assign to undeclared symbol '{0}'.")]
    AssignmentToUndeclared(CompactString),
    #[error("Unrecognized binary operation '{operator}' for {left} and {right}.")]
    UnsupportedOperands {
        operator: BinaryOperator,
        left: Value,
        right: Value,
    },
    #[error("Unrecognized unary operation '{operator}' for {operand}.")]
    UnsupportedUnaryOperand {
        operator: UnaryOperator,
        operand: Value,
    },
    #[error("Math domain error: {0}.")]
    MathDomain(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct RuntimeError {
    #[source]
    pub kind: RuntimeErrorKind,
    pub line: u32,
}
