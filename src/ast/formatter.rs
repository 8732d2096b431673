use super::{Expression, Program, Statement};

pub trait AstFormatter {
    fn format(&self, program: &Program) -> String;
    fn format_expression(&self, expression: &Expression) -> String;
}

pub struct DebugFormatter;

impl AstFormatter for DebugFormatter {
    fn format(&self, program: &Program) -> String {
        format!("{program:?}")
    }

    fn format_expression(&self, expression: &Expression) -> String {
        format!("{expression:?}")
    }
}

pub struct SExpressionFormatter;

impl SExpressionFormatter {
    fn format_statement(statement: &Statement) -> String {
        match statement {
            Statement::Empty => "()".into(),
            Statement::Block(body) => {
                let inner: Vec<String> = body.iter().map(Self::format_statement).collect();
                format!("(block {})", inner.join(" "))
            }
            Statement::VarDeclaration {
                name,
                initializer,
                constant,
                ..
            } => {
                let keyword = if *constant { "const" } else { "let" };
                match initializer {
                    Some(value) => {
                        format!("({keyword} {name} {})", Self::format_node(value))
                    }
                    None => format!("({keyword} {name})"),
                }
            }
            Statement::Expression(expression) => Self::format_node(expression),
        }
    }

    fn format_node(expression: &Expression) -> String {
        match expression {
            Expression::Binary {
                operator,
                left,
                right,
                ..
            } => format!(
                "({operator} {} {})",
                Self::format_node(left),
                Self::format_node(right)
            ),
            Expression::Unary {
                operator, operand, ..
            } => {
                format!("({operator} {})", Self::format_node(operand))
            }
            Expression::Assignment { name, value, .. } => {
                format!("(= {name} {})", Self::format_node(value))
            }
            Expression::Symbol { name, .. } => format!("{name}"),
            Expression::Integer(value) => format!("{value}"),
            Expression::Real(value) => format!("{value:?}"),
            Expression::Str(value) => format!("\"{value}\""),
            Expression::Bool(value) => format!("{value}"),
            Expression::Null => "null".into(),
        }
    }
}

impl AstFormatter for SExpressionFormatter {
    fn format(&self, program: &Program) -> String {
        let statements: Vec<String> = program.body.iter().map(Self::format_statement).collect();
        statements.join("\n")
    }

    fn format_expression(&self, expression: &Expression) -> String {
        Self::format_node(expression)
    }
}
