pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod token;
pub mod value;

use interpreter::Interpreter;
use lexer::{Lexer, LexicalError};
use parser::{Parser, ParserError};
use std::fmt::Display;
use thiserror::Error;
use value::{RuntimeError, Value};

/// Which phase of the pipeline an evaluation failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Runtime,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex"),
            Stage::Parse => write!(f, "parse"),
            Stage::Runtime => write!(f, "runtime"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("{0}")]
    Lex(#[from] LexicalError),
    #[error("{0}")]
    Parse(#[from] ParserError),
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}

impl EngineError {
    pub fn stage(&self) -> Stage {
        match self {
            EngineError::Lex(_) => Stage::Lex,
            EngineError::Parse(_) => Stage::Parse,
            EngineError::Runtime(_) => Stage::Runtime,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            EngineError::Lex(e) => e.line,
            EngineError::Parse(e) => e.line,
            EngineError::Runtime(e) => e.line,
        }
    }
}

/// Runs `source` through the whole pipeline and returns its value.
///
/// Everything is per-call state: a failed evaluation has no effect on the
/// next one. Callers render the value with `Display` and tag it with
/// [`Value::type_name`].
pub fn evaluate(source: &str) -> Result<Value, EngineError> {
    let tokens = Lexer::new(source).scan_all()?;
    let program = Parser::new(tokens).parse()?;
    let mut interpreter = Interpreter::new();
    Ok(interpreter.interpret(&program)?)
}
