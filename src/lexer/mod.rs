mod error;

pub use error::{LexicalError, LexicalErrorKind};

use crate::token::{Span, Token, TokenKind, KEYWORD_HASHMAP};
use compact_str::ToCompactString;
use std::iter::Peekable;
use std::str::CharIndices;

/// Single-pass scanner over the source text.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`]; after the end
/// of input it keeps returning `Eof` tokens. [`Lexer::scan_all`] drives the
/// whole scan and stops at the first error, so an error is terminal for the
/// caller.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    line_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            line_start: 0,
        }
    }

    pub fn get_source(&self) -> &'src str {
        self.source
    }

    /// Scans the remaining input, appending the terminal `Eof` token.
    pub fn scan_all(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_whitespace();

        let Some(&(start, c)) = self.chars.peek() else {
            return Ok(self.make_token(TokenKind::Eof, self.source.len(), self.source.len()));
        };
        let _ = self.chars.next();

        match c {
            '(' => Ok(self.make_token(TokenKind::LeftParen, start, start + 1)),
            ')' => Ok(self.make_token(TokenKind::RightParen, start, start + 1)),
            '{' => Ok(self.make_token(TokenKind::LeftBrace, start, start + 1)),
            '}' => Ok(self.make_token(TokenKind::RightBrace, start, start + 1)),
            ';' => Ok(self.make_token(TokenKind::Semicolon, start, start + 1)),
            ',' => Ok(self.make_token(TokenKind::Comma, start, start + 1)),
            '-' => Ok(self.make_token(TokenKind::Minus, start, start + 1)),
            '*' => Ok(self.make_token(TokenKind::Star, start, start + 1)),
            '/' => Ok(self.make_token(TokenKind::Slash, start, start + 1)),
            '%' => Ok(self.make_token(TokenKind::Percent, start, start + 1)),
            '^' => Ok(self.make_token(TokenKind::Caret, start, start + 1)),
            // Greedy longest-match for the two-character operators.
            '+' => Ok(self.one_or_two(start, '+', TokenKind::PlusPlus, TokenKind::Plus)),
            '=' => Ok(self.one_or_two(start, '=', TokenKind::EqualEqual, TokenKind::Equal)),
            '!' => Ok(self.one_or_two(start, '=', TokenKind::BangEqual, TokenKind::Bang)),
            '<' => Ok(self.one_or_two(start, '=', TokenKind::LessEqual, TokenKind::Less)),
            '>' => Ok(self.one_or_two(start, '=', TokenKind::GreaterEqual, TokenKind::Greater)),
            '"' => self.lex_string(start),
            '0'..='9' => Ok(self.lex_number(start)),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.lex_identifier(start)),
            c => Err(LexicalError {
                kind: LexicalErrorKind::Unrecognized(c),
                line: self.line,
                column: self.column_at(start),
                span: Span {
                    start,
                    end: start + c.len_utf8(),
                },
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(offset, c)) = self.chars.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    let _ = self.chars.next();
                }
                '\n' => {
                    let _ = self.chars.next();
                    self.line += 1;
                    self.line_start = offset + 1;
                }
                _ => break,
            }
        }
    }

    fn one_or_two(&mut self, start: usize, second: char, double: TokenKind, single: TokenKind) -> Token {
        if let Some(&(_, c)) = self.chars.peek() {
            if c == second {
                let _ = self.chars.next();
                return self.make_token(double, start, start + 2);
            }
        }
        self.make_token(single, start, start + 1)
    }

    fn lex_string(&mut self, start: usize) -> Result<Token, LexicalError> {
        let line = self.line;
        let column = self.column_at(start);

        while let Some((offset, c)) = self.chars.next() {
            match c {
                '"' => {
                    // Lexeme is the string contents without the quotes.
                    let token = Token {
                        kind: TokenKind::StringLiteral,
                        lexeme: (&self.source[start + 1..offset]).to_compact_string(),
                        line,
                        column,
                        span: Span {
                            start,
                            end: offset + 1,
                        },
                    };
                    return Ok(token);
                }
                '\n' => {
                    self.line += 1;
                    self.line_start = offset + 1;
                }
                _ => {}
            }
        }

        Err(LexicalError {
            kind: LexicalErrorKind::UnterminatedString,
            line,
            column,
            span: Span {
                start,
                end: self.source.len(),
            },
        })
    }

    fn lex_number(&mut self, start: usize) -> Token {
        let mut end = start + 1;
        while let Some(&(offset, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                let _ = self.chars.next();
                end = offset + 1;
            } else {
                break;
            }
        }

        // A dot only extends the literal when a digit follows it; otherwise
        // the integer ends here and the dot is left for the next token.
        let mut kind = TokenKind::IntegerLiteral;
        if let Some(&(dot_offset, '.')) = self.chars.peek() {
            let mut ahead = self.chars.clone();
            let _ = ahead.next();
            if let Some(&(_, c)) = ahead.peek() {
                if c.is_ascii_digit() {
                    let _ = self.chars.next();
                    kind = TokenKind::RealLiteral;
                    end = dot_offset + 1;
                    while let Some(&(offset, c)) = self.chars.peek() {
                        if c.is_ascii_digit() {
                            let _ = self.chars.next();
                            end = offset + 1;
                        } else {
                            break;
                        }
                    }
                }
            }
        }

        self.make_token(kind, start, end)
    }

    fn lex_identifier(&mut self, start: usize) -> Token {
        let mut end = start + 1;
        while let Some(&(offset, c)) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                let _ = self.chars.next();
                end = offset + 1;
            } else {
                break;
            }
        }

        let lexeme = &self.source[start..end];
        let kind = KEYWORD_HASHMAP
            .get(lexeme)
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.make_token(kind, start, end)
    }

    fn make_token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token {
            kind,
            lexeme: (&self.source[start..end]).to_compact_string(),
            line: self.line,
            column: self.column_at(start),
            span: Span { start, end },
        }
    }

    fn column_at(&self, offset: usize) -> u32 {
        (offset.saturating_sub(self.line_start) + 1) as u32
    }
}
