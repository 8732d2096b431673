use quotient::ast::formatter::{AstFormatter, SExpressionFormatter};
use quotient::ast::Program;
use quotient::lexer::Lexer;
use quotient::parser::{Parser, ParserError, ParserErrorKind};
use quotient::token::TokenKind;

fn parse(input: &str) -> Result<Program, ParserError> {
    let tokens = Lexer::new(input)
        .scan_all()
        .expect("Test inputs lex cleanly.");
    Parser::new(tokens).parse()
}

fn check(input: &str, expected: &str, test_name: &str) {
    let program = match parse(input) {
        Ok(program) => program,
        Err(e) => panic!("Failed the test {test_name}: unexpected parse error {e}"),
    };
    let actual = SExpressionFormatter.format(&program);
    assert_eq!(actual, expected, "Failed the test {test_name}");
}

fn check_error(input: &str, test_name: &str) -> ParserErrorKind {
    match parse(input) {
        Ok(program) => panic!(
            "Failed the test {test_name}: expected an error but parsed {}",
            SExpressionFormatter.format(&program)
        ),
        Err(e) => e.kind,
    }
}

#[test]
fn smoke_test() {
    check(";", "()", "smoke");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    check("2 + 3 * 4;", "(+ 2 (* 3 4))", "precedence");
}

#[test]
fn test_exponent_right_recurses_into_additive() {
    check("2 ^ 3 + 1;", "(^ 2 (+ 3 1))", "exponent_additive");
    check("2 ^ 3 * 4;", "(^ 2 (* 3 4))", "exponent_multiplicative");
    check("2 * 3 ^ 4;", "(* 2 (^ 3 4))", "exponent_rhs_of_star");
}

#[test]
fn test_additive_folds_left() {
    check("1 - 2 - 3;", "(- (- 1 2) 3)", "left_assoc");
}

#[test]
fn test_connective_ladder() {
    check("a and b or c;", "(and a (or b c))", "and_loosest");
    check("a or b nand c;", "(or a (nand b c))", "or_over_nand");
    check("a nor b xor c;", "(nor a (xor b c))", "nor_over_xor");
    check(
        "1 == 2 xnor 3 == 4;",
        "(xnor (== 1 2) (== 3 4))",
        "xnor_over_equality",
    );
}

#[test]
fn test_relational_and_equality() {
    check("1 < 2 == 3 >= 4;", "(== (< 1 2) (>= 3 4))", "relational");
}

#[test]
fn test_unary_operators() {
    check("-2 ^ 2;", "(^ (- 2) 2)", "negate_base");
    check("not true and false;", "(and (not true) false)", "not");
    check("!a;", "(not a)", "bang_not");
    check("sqrt 9 + 1;", "(+ (sqrt 9) 1)", "sqrt");
    check("ln e;", "(ln e)", "ln");
    check("- -1;", "(- (- 1))", "double_negate");
}

#[test]
fn test_parenthesized_grouping() {
    check("(1 + 2) * 3;", "(* (+ 1 2) 3)", "grouping");
}

#[test]
fn test_literals() {
    check("12.5;", "12.5", "real");
    check("\"hi\";", "\"hi\"", "string");
    check("null;", "null", "null");
    check("true;", "true", "bool");
}

#[test]
fn test_declarations() {
    check("let x = 5;", "(let x 5)", "let");
    check("let y;", "(let y)", "let_uninitialized");
    check("const k = 1;", "(const k 1)", "const");
}

#[test]
fn test_blocks_and_programs() {
    check(
        "let x = 1; { let y = 2; x + y; }",
        "(let x 1)\n(block (let y 2) (+ x y))",
        "block",
    );
    check("{}", "(block )", "empty_block");
}

#[test]
fn test_assignment_chains_right() {
    check("x = y = 2;", "(= x (= y 2))", "assignment");
}

#[test]
fn test_const_requires_initializer() {
    assert_eq!(
        check_error("const k;", "const_no_init"),
        ParserErrorKind::ConstWithoutInitializer
    );
}

#[test]
fn test_invalid_assignment_target() {
    assert_eq!(
        check_error("1 = 2;", "assign_to_literal"),
        ParserErrorKind::InvalidAssignmentTarget
    );
    assert_eq!(
        check_error("x + 1 = 2;", "assign_to_binary"),
        ParserErrorKind::InvalidAssignmentTarget
    );
}

#[test]
fn test_unclosed_paren() {
    assert_eq!(
        check_error("(1 + 2;", "unclosed_paren"),
        ParserErrorKind::UnexpectedToken {
            actual: TokenKind::Semicolon,
            expected: TokenKind::RightParen,
        }
    );
}

#[test]
fn test_missing_semicolon() {
    assert_eq!(
        check_error("1 + 2", "missing_semicolon"),
        ParserErrorKind::UnexpectedToken {
            actual: TokenKind::Eof,
            expected: TokenKind::Semicolon,
        }
    );
}

#[test]
fn test_missing_operand() {
    assert_eq!(
        check_error("1 + ;", "missing_operand"),
        ParserErrorKind::NonExpression(TokenKind::Semicolon)
    );
}

#[test]
fn test_reserved_keywords_are_rejected() {
    assert_eq!(
        check_error("if;", "reserved_if"),
        ParserErrorKind::InvalidStatement(TokenKind::KeywordIf)
    );
}

#[test]
fn test_declaration_requires_a_name() {
    assert_eq!(
        check_error("let 5 = 3;", "let_number"),
        ParserErrorKind::MissingDeclarationName(TokenKind::KeywordLet)
    );
}

#[test]
fn test_first_error_wins() {
    // Both statements are bad; only the first is reported.
    let error = parse("1 = 2; const k;").unwrap_err();
    assert_eq!(error.kind, ParserErrorKind::InvalidAssignmentTarget);
    assert_eq!(error.line, 1);
}

#[test]
fn test_error_carries_the_line() {
    let error = parse("1;\n\n(2;").unwrap_err();
    assert_eq!(error.line, 3);
}
