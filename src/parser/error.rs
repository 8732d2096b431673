use crate::token::TokenKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserErrorKind {
    #[error("Expected {expected} but got {actual}.")]
    UnexpectedToken {
        actual: TokenKind,
        expected: TokenKind,
    },
    #[error("Expected an expression but got {0}.")]
    NonExpression(TokenKind),
    #[error("Expected a statement but got {0}.")]
    InvalidStatement(TokenKind),
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("A 'const' declaration requires an initializer.")]
    ConstWithoutInitializer,
    #[error("Integer literal out of range.")]
    IntegerOutOfRange,
    #[error("Expected an identifier after '{0}'.")]
    MissingDeclarationName(TokenKind),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct ParserError {
    #[source]
    pub kind: ParserErrorKind,
    pub line: u32,
}
