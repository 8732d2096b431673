mod environment;

pub use environment::Environment;

use crate::ast::{Expression, Program, Statement};
use crate::value::{RuntimeError, Value};

/// Tree-walking evaluator.
///
/// One interpreter evaluates one program: the environment chain (and any
/// `const` bindings it accumulates) must not leak into unrelated runs, so
/// callers construct a fresh `Interpreter` per independent evaluation.
/// Errors propagate with `?`, which is what makes them sticky: once a
/// statement fails, nothing after it in the program is evaluated.
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    /// The program's value is its last statement's value, `Null` when empty.
    pub fn interpret(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        self.execute_all(&program.body)
    }

    fn execute_all(&mut self, body: &[Statement]) -> Result<Value, RuntimeError> {
        let mut value = Value::Null;
        for statement in body {
            value = self.execute(statement)?;
        }
        Ok(value)
    }

    fn execute(&mut self, statement: &Statement) -> Result<Value, RuntimeError> {
        match statement {
            Statement::Empty => Ok(Value::Null),
            Statement::Block(body) => {
                self.environment.push_scope();
                let result = self.execute_all(body);
                self.environment.pop_scope();
                result
            }
            Statement::VarDeclaration {
                name,
                initializer,
                constant,
                line,
            } => {
                let value = match initializer {
                    Some(expression) => self.evaluate(expression)?,
                    None => Value::Null,
                };
                self.environment
                    .declare(name, value.clone(), *constant)
                    .map_err(|kind| RuntimeError { kind, line: *line })?;
                Ok(value)
            }
            Statement::Expression(expression) => self.evaluate(expression),
        }
    }

    fn evaluate(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Integer(value) => Ok(Value::Integer(*value)),
            Expression::Real(value) => Ok(Value::Real(*value)),
            Expression::Str(value) => Ok(Value::Str(value.clone())),
            Expression::Bool(value) => Ok(Value::Bool(*value)),
            Expression::Null => Ok(Value::Null),
            Expression::Symbol { name, line } => self
                .environment
                .lookup(name)
                .map_err(|kind| RuntimeError { kind, line: *line }),
            Expression::Assignment { name, line, value } => {
                // The target must exist before the right-hand side runs;
                // assignment never declares implicitly.
                if !self.environment.is_declared(name) {
                    return Err(RuntimeError {
                        kind: crate::value::RuntimeErrorKind::AssignmentToUndeclared(name.clone()),
                        line: *line,
                    });
                }
                let value = self.evaluate(value)?;
                self.environment
                    .assign(name, value.clone())
                    .map_err(|kind| RuntimeError { kind, line: *line })?;
                Ok(value)
            }
            Expression::Unary {
                operator,
                line,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                Value::apply_unary(*operator, &operand)
                    .map_err(|kind| RuntimeError { kind, line: *line })
            }
            Expression::Binary {
                operator,
                line,
                left,
                right,
            } => {
                // Both operands evaluate eagerly; the boolean connectives do
                // not short-circuit.
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Value::apply_binary(*operator, &left, &right)
                    .map_err(|kind| RuntimeError { kind, line: *line })
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
