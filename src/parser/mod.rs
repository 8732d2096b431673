mod error;

pub use error::{ParserError, ParserErrorKind};

use crate::ast::{BinaryOperator, Expression, Program, Statement, UnaryOperator};
use crate::token::{Token, TokenKind};

const MULTIPLICATIVE: &[(TokenKind, BinaryOperator)] = &[
    (TokenKind::Star, BinaryOperator::Multiply),
    (TokenKind::Slash, BinaryOperator::Divide),
    (TokenKind::Percent, BinaryOperator::Quotient),
    (TokenKind::KeywordRem, BinaryOperator::Remainder),
    (TokenKind::KeywordMod, BinaryOperator::Modulo),
];
const ADDITIVE: &[(TokenKind, BinaryOperator)] = &[
    (TokenKind::Plus, BinaryOperator::Add),
    (TokenKind::Minus, BinaryOperator::Subtract),
];
const RELATIONAL: &[(TokenKind, BinaryOperator)] = &[
    (TokenKind::Less, BinaryOperator::Less),
    (TokenKind::LessEqual, BinaryOperator::LessEqual),
    (TokenKind::Greater, BinaryOperator::Greater),
    (TokenKind::GreaterEqual, BinaryOperator::GreaterEqual),
];
const EQUALITY: &[(TokenKind, BinaryOperator)] = &[
    (TokenKind::BangEqual, BinaryOperator::NotEqual),
    (TokenKind::EqualEqual, BinaryOperator::EqualEqual),
];
const XNOR: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordXnor, BinaryOperator::Xnor)];
const XOR: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordXor, BinaryOperator::Xor)];
const NOR: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordNor, BinaryOperator::Nor)];
const NAND: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordNand, BinaryOperator::Nand)];
const OR: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordOr, BinaryOperator::Or)];
const AND: &[(TokenKind, BinaryOperator)] = &[(TokenKind::KeywordAnd, BinaryOperator::And)];

/// Recursive-descent parser over the scanned token array.
///
/// Each precedence level is one method that parses "one level down" and then
/// folds its own operators left-associatively. The first error aborts the
/// whole parse; there is no recovery and no partial tree.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// The token array must end with an `Eof` token, as produced by
    /// [`crate::lexer::Lexer::scan_all`].
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last(),
            Some(Token {
                kind: TokenKind::Eof,
                ..
            })
        ));
        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Program, ParserError> {
        let mut body = Vec::new();
        while !self.check(TokenKind::Eof) {
            body.push(self.parse_statement()?);
        }
        Ok(Program { body })
    }
}

// Cursor primitives. These are the only methods that move `current`.
impl Parser {
    fn peek(&self) -> &Token {
        self.tokens
            .get(self.current)
            .unwrap_or_else(|| self.tokens.last().expect("Token array is never empty."))
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn matches(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParserError> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            let actual = self.peek();
            Err(ParserError {
                kind: ParserErrorKind::UnexpectedToken {
                    actual: actual.kind,
                    expected,
                },
                line: actual.line,
            })
        }
    }
}

// Statements
impl Parser {
    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        match self.peek().kind {
            TokenKind::Semicolon => {
                let _ = self.advance();
                Ok(Statement::Empty)
            }
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::KeywordLet | TokenKind::KeywordConst => self.parse_declaration(),
            // Reserved keywords have no statement form yet.
            TokenKind::KeywordIf | TokenKind::KeywordElse => {
                let token = self.peek();
                Err(ParserError {
                    kind: ParserErrorKind::InvalidStatement(token.kind),
                    line: token.line,
                })
            }
            _ => {
                let expression = self.parse_expression()?;
                let _ = self.eat(TokenKind::Semicolon)?;
                Ok(Statement::Expression(expression))
            }
        }
    }

    fn parse_block(&mut self) -> Result<Statement, ParserError> {
        let _ = self.eat(TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::Eof) {
            body.push(self.parse_statement()?);
        }
        let _ = self.eat(TokenKind::RightBrace)?;
        Ok(Statement::Block(body))
    }

    fn parse_declaration(&mut self) -> Result<Statement, ParserError> {
        let keyword = self.advance();
        let constant = keyword.kind == TokenKind::KeywordConst;

        let name = match self.matches(&[TokenKind::Identifier]) {
            Some(token) => token.lexeme,
            None => {
                let actual = self.peek();
                return Err(ParserError {
                    kind: ParserErrorKind::MissingDeclarationName(keyword.kind),
                    line: actual.line,
                });
            }
        };

        let initializer = match self.matches(&[TokenKind::Equal]) {
            Some(_) => Some(self.parse_expression()?),
            None => None,
        };

        if constant && initializer.is_none() {
            return Err(ParserError {
                kind: ParserErrorKind::ConstWithoutInitializer,
                line: keyword.line,
            });
        }

        let _ = self.eat(TokenKind::Semicolon)?;
        Ok(Statement::VarDeclaration {
            name,
            initializer,
            constant,
            line: keyword.line,
        })
    }
}

// Expressions, loosest level first.
impl Parser {
    pub fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expression, ParserError> {
        let expression = self.parse_and()?;

        if let Some(equal) = self.matches(&[TokenKind::Equal]) {
            let value = self.parse_assignment()?;
            return match expression {
                Expression::Symbol { name, line } => Ok(Expression::Assignment {
                    name,
                    line,
                    value: Box::new(value),
                }),
                _ => Err(ParserError {
                    kind: ParserErrorKind::InvalidAssignmentTarget,
                    line: equal.line,
                }),
            };
        }

        Ok(expression)
    }

    fn parse_left_assoc(
        &mut self,
        operators: &[(TokenKind, BinaryOperator)],
        next: fn(&mut Self) -> Result<Expression, ParserError>,
    ) -> Result<Expression, ParserError> {
        let mut expression = next(self)?;
        loop {
            let token = self.peek();
            let Some(&(_, operator)) = operators.iter().find(|(kind, _)| *kind == token.kind)
            else {
                break;
            };
            let line = token.line;
            let _ = self.advance();
            let right = next(self)?;
            expression = Expression::Binary {
                operator,
                line,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }
        Ok(expression)
    }

    fn parse_and(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(AND, Self::parse_or)
    }

    fn parse_or(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(OR, Self::parse_nand)
    }

    fn parse_nand(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(NAND, Self::parse_nor)
    }

    fn parse_nor(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(NOR, Self::parse_xor)
    }

    fn parse_xor(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(XOR, Self::parse_xnor)
    }

    fn parse_xnor(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(XNOR, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(EQUALITY, Self::parse_relational)
    }

    fn parse_relational(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(RELATIONAL, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, ParserError> {
        self.parse_left_assoc(MULTIPLICATIVE, Self::parse_exponent)
    }

    /// The right-hand side of `^` re-enters the additive level, so
    /// `2 ^ 3 + 1` nests as `2 ^ (3 + 1)`.
    fn parse_exponent(&mut self) -> Result<Expression, ParserError> {
        let mut expression = self.parse_unary()?;
        while let Some(caret) = self.matches(&[TokenKind::Caret]) {
            let right = self.parse_additive()?;
            expression = Expression::Binary {
                operator: BinaryOperator::Power,
                line: caret.line,
                left: Box::new(expression),
                right: Box::new(right),
            };
        }
        Ok(expression)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParserError> {
        let operator = match self.peek().kind {
            TokenKind::Minus => Some(UnaryOperator::Negate),
            TokenKind::Bang | TokenKind::KeywordNot => Some(UnaryOperator::Not),
            TokenKind::KeywordSqrt => Some(UnaryOperator::Sqrt),
            TokenKind::KeywordLn => Some(UnaryOperator::Ln),
            TokenKind::KeywordLg => Some(UnaryOperator::Lg),
            TokenKind::KeywordLog => Some(UnaryOperator::Log),
            _ => None,
        };

        if let Some(operator) = operator {
            let token = self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expression::Unary {
                operator,
                line: token.line,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ParserError> {
        let token = self.advance();
        match token.kind {
            TokenKind::IntegerLiteral => {
                let value = token.lexeme.parse().map_err(|_| ParserError {
                    kind: ParserErrorKind::IntegerOutOfRange,
                    line: token.line,
                })?;
                Ok(Expression::Integer(value))
            }
            TokenKind::RealLiteral => {
                let value = token
                    .lexeme
                    .parse()
                    .expect("Real literal tokens are valid `f64`");
                Ok(Expression::Real(value))
            }
            TokenKind::StringLiteral => Ok(Expression::Str(token.lexeme)),
            TokenKind::KeywordTrue => Ok(Expression::Bool(true)),
            TokenKind::KeywordFalse => Ok(Expression::Bool(false)),
            TokenKind::KeywordNull => Ok(Expression::Null),
            TokenKind::Identifier => Ok(Expression::Symbol {
                name: token.lexeme,
                line: token.line,
            }),
            TokenKind::LeftParen => {
                let inner = self.parse_expression()?;
                let _ = self.eat(TokenKind::RightParen)?;
                Ok(inner)
            }
            kind => Err(ParserError {
                kind: ParserErrorKind::NonExpression(kind),
                line: token.line,
            }),
        }
    }
}
