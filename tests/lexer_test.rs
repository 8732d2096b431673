use quotient::lexer::{Lexer, LexicalErrorKind};
use quotient::token::TokenKind;

fn check(input: &str, expected: &[&str], test_name: &str) {
    let mut scanner = Lexer::new(input);
    let mut actual = Vec::new();
    loop {
        match scanner.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::Eof;
                actual.push(token.to_string());
                if done {
                    break;
                }
            }
            Err(error) => {
                actual.push(error.to_string());
                break;
            }
        }
    }

    assert_eq!(actual, expected, "Failed the test {test_name}");
}

#[test]
fn smoke_test() {
    check("", &["EOF  1:1"], "smoke");
}

#[test]
fn test_arithmetic_expression() {
    check(
        "2 + 3",
        &["INTEGER 2 1:1", "PLUS + 1:3", "INTEGER 3 1:5", "EOF  1:6"],
        "arithmetic",
    );
}

#[test]
fn test_greedy_double_operators() {
    check(
        "++ + == = != ! <= < >= >",
        &[
            "PLUS_PLUS ++ 1:1",
            "PLUS + 1:4",
            "EQUAL_EQUAL == 1:6",
            "EQUAL = 1:9",
            "BANG_EQUAL != 1:11",
            "BANG ! 1:14",
            "LESS_EQUAL <= 1:16",
            "LESS < 1:19",
            "GREATER_EQUAL >= 1:21",
            "GREATER > 1:24",
            "EOF  1:25",
        ],
        "greedy",
    );
}

#[test]
fn test_keywords_and_identifiers() {
    check(
        "let const nand xnor sqrt rem foo_1",
        &[
            "LET let 1:1",
            "CONST const 1:5",
            "NAND nand 1:11",
            "XNOR xnor 1:16",
            "SQRT sqrt 1:21",
            "REM rem 1:26",
            "IDENTIFIER foo_1 1:30",
            "EOF  1:35",
        ],
        "keywords",
    );
}

#[test]
fn test_literal_keywords_are_not_identifiers() {
    check(
        "true false null",
        &[
            "TRUE true 1:1",
            "FALSE false 1:6",
            "NULL null 1:12",
            "EOF  1:16",
        ],
        "literals",
    );
}

#[test]
fn test_integer_versus_real() {
    check(
        "12 12.5 0.25",
        &[
            "INTEGER 12 1:1",
            "REAL 12.5 1:4",
            "REAL 0.25 1:9",
            "EOF  1:13",
        ],
        "numbers",
    );
}

#[test]
fn test_dot_without_digit_does_not_extend_the_literal() {
    let error = Lexer::new("7.").scan_all().unwrap_err();
    assert_eq!(error.kind, LexicalErrorKind::Unrecognized('.'));
    assert_eq!(error.line, 1);
    assert_eq!(error.column, 2);
}

#[test]
fn test_string_literal() {
    check(
        "\"hello world\"",
        &["STRING hello world 1:1", "EOF  1:14"],
        "string",
    );
}

#[test]
fn test_unterminated_string() {
    let error = Lexer::new("\"abc").scan_all().unwrap_err();
    assert_eq!(error.kind, LexicalErrorKind::UnterminatedString);
    assert_eq!(error.line, 1);
    assert_eq!(error.span.range(), 0..4);
}

#[test]
fn test_unrecognized_character_is_terminal() {
    let error = Lexer::new("1 @ 2").scan_all().unwrap_err();
    assert_eq!(error.kind, LexicalErrorKind::Unrecognized('@'));
    assert_eq!(error.column, 3);
}

#[test]
fn test_newlines_bump_the_line_counter() {
    check(
        "1\n  2",
        &["INTEGER 1 1:1", "INTEGER 2 2:3", "EOF  2:4"],
        "newlines",
    );
}

#[test]
fn test_scan_all_appends_eof() {
    let tokens = Lexer::new("let x;").scan_all().unwrap();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(tokens.len(), 4);
}
