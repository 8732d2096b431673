use compact_str::CompactString;
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::Range;
use std::sync::LazyLock;

/// The hashmap for keywords
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("let", TokenKind::KeywordLet);
    map.insert("const", TokenKind::KeywordConst);
    map.insert("if", TokenKind::KeywordIf);
    map.insert("else", TokenKind::KeywordElse);
    map.insert("and", TokenKind::KeywordAnd);
    map.insert("or", TokenKind::KeywordOr);
    map.insert("xor", TokenKind::KeywordXor);
    map.insert("nand", TokenKind::KeywordNand);
    map.insert("nor", TokenKind::KeywordNor);
    map.insert("xnor", TokenKind::KeywordXnor);
    map.insert("not", TokenKind::KeywordNot);
    map.insert("mod", TokenKind::KeywordMod);
    map.insert("rem", TokenKind::KeywordRem);
    map.insert("log", TokenKind::KeywordLog);
    map.insert("ln", TokenKind::KeywordLn);
    map.insert("lg", TokenKind::KeywordLg);
    map.insert("sqrt", TokenKind::KeywordSqrt);
    map.insert("true", TokenKind::KeywordTrue);
    map.insert("false", TokenKind::KeywordFalse);
    map.insert("null", TokenKind::KeywordNull);
    map
});

/// Byte range of a token within the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Brackets
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    // Punctuation
    Semicolon,
    Comma,
    // Operators
    Plus,
    PlusPlus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Literals
    IntegerLiteral,
    RealLiteral,
    StringLiteral,
    Identifier,

    // Keywords
    KeywordLet,
    KeywordConst,
    KeywordIf,
    KeywordElse,
    KeywordAnd,
    KeywordOr,
    KeywordXor,
    KeywordNand,
    KeywordNor,
    KeywordXnor,
    KeywordNot,
    KeywordMod,
    KeywordRem,
    KeywordLog,
    KeywordLn,
    KeywordLg,
    KeywordSqrt,
    KeywordTrue,
    KeywordFalse,
    KeywordNull,

    // End of file.
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "LEFT_PAREN"),
            TokenKind::RightParen => write!(f, "RIGHT_PAREN"),
            TokenKind::LeftBrace => write!(f, "LEFT_BRACE"),
            TokenKind::RightBrace => write!(f, "RIGHT_BRACE"),
            TokenKind::Semicolon => write!(f, "SEMICOLON"),
            TokenKind::Comma => write!(f, "COMMA"),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::PlusPlus => write!(f, "PLUS_PLUS"),
            TokenKind::Minus => write!(f, "MINUS"),
            TokenKind::Star => write!(f, "STAR"),
            TokenKind::Slash => write!(f, "SLASH"),
            TokenKind::Percent => write!(f, "PERCENT"),
            TokenKind::Caret => write!(f, "CARET"),
            TokenKind::Equal => write!(f, "EQUAL"),
            TokenKind::EqualEqual => write!(f, "EQUAL_EQUAL"),
            TokenKind::Bang => write!(f, "BANG"),
            TokenKind::BangEqual => write!(f, "BANG_EQUAL"),
            TokenKind::Less => write!(f, "LESS"),
            TokenKind::LessEqual => write!(f, "LESS_EQUAL"),
            TokenKind::Greater => write!(f, "GREATER"),
            TokenKind::GreaterEqual => write!(f, "GREATER_EQUAL"),
            TokenKind::IntegerLiteral => write!(f, "INTEGER"),
            TokenKind::RealLiteral => write!(f, "REAL"),
            TokenKind::StringLiteral => write!(f, "STRING"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::KeywordLet => write!(f, "LET"),
            TokenKind::KeywordConst => write!(f, "CONST"),
            TokenKind::KeywordIf => write!(f, "IF"),
            TokenKind::KeywordElse => write!(f, "ELSE"),
            TokenKind::KeywordAnd => write!(f, "AND"),
            TokenKind::KeywordOr => write!(f, "OR"),
            TokenKind::KeywordXor => write!(f, "XOR"),
            TokenKind::KeywordNand => write!(f, "NAND"),
            TokenKind::KeywordNor => write!(f, "NOR"),
            TokenKind::KeywordXnor => write!(f, "XNOR"),
            TokenKind::KeywordNot => write!(f, "NOT"),
            TokenKind::KeywordMod => write!(f, "MOD"),
            TokenKind::KeywordRem => write!(f, "REM"),
            TokenKind::KeywordLog => write!(f, "LOG"),
            TokenKind::KeywordLn => write!(f, "LN"),
            TokenKind::KeywordLg => write!(f, "LG"),
            TokenKind::KeywordSqrt => write!(f, "SQRT"),
            TokenKind::KeywordTrue => write!(f, "TRUE"),
            TokenKind::KeywordFalse => write!(f, "FALSE"),
            TokenKind::KeywordNull => write!(f, "NULL"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: CompactString,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
