use crate::token::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexicalErrorKind {
    #[error("Unrecognized character '{0}'.")]
    Unrecognized(char),
    #[error("Unterminated string literal.")]
    UnterminatedString,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("[line {line}] {kind}")]
pub struct LexicalError {
    #[source]
    pub kind: LexicalErrorKind,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}
