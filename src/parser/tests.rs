//! Unit tests for the parser module.
//!
//! Covers the statement rule, left-associative folding of `+`, and each of
//! the ways a statement can be rejected.

use crate::{
    ast::ast::Expr,
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    expr::{parse_expr, parse_term},
    parser::{parse, Parser},
};

fn parse_str(source: &str) -> Result<String, ErrorImpl> {
    parse(source.to_string(), Some("test.let".to_string()))
        .map(|stmt| stmt.to_string())
        .map_err(|error| error.kind().clone())
}

fn parser_for(source: &str) -> Parser {
    Parser::new(Lexer::new(source.to_string(), None))
}

#[test]
fn test_parse_single_number() {
    assert_eq!(
        parse_str("let x = 5;").unwrap(),
        "Assignment(Variable(x), Number(5))"
    );
}

#[test]
fn test_parse_single_identifier() {
    assert_eq!(
        parse_str("let x = y;").unwrap(),
        "Assignment(Variable(x), Variable(y))"
    );
}

#[test]
fn test_parse_addition() {
    assert_eq!(
        parse_str("let total = a + 1;").unwrap(),
        "Assignment(Variable(total), Operator(+, Variable(a), Number(1)))"
    );
}

#[test]
fn test_parse_is_left_associative() {
    assert_eq!(
        parse_str("let x = a + b + c;").unwrap(),
        "Assignment(Variable(x), Operator(+, Operator(+, Variable(a), Variable(b)), Variable(c)))"
    );
}

#[test]
fn test_parse_long_chain_leans_left() {
    let stmt = parse("let x = 1 + 2 + 3 + 4;".to_string(), None).unwrap();

    let mut depth = 0;
    let mut expr = &stmt.value;
    while let Expr::Binary(binary) = expr {
        assert!(!matches!(*binary.right, Expr::Binary(_)));
        expr = &*binary.left;
        depth += 1;
    }

    assert_eq!(depth, 3);
    assert!(matches!(expr, Expr::Number(number) if number.value == 1));
}

#[test]
fn test_parse_whitespace_insensitive() {
    assert_eq!(
        parse_str("let  x=5+ 6 ;").unwrap(),
        parse_str("let x = 5 + 6;").unwrap()
    );
}

#[test]
fn test_parse_identifier_with_digits() {
    assert_eq!(
        parse_str("let x1 = 2;").unwrap(),
        "Assignment(Variable(x1), Number(2))"
    );
}

#[test]
fn test_parse_skips_unknown_characters() {
    // `#` is dropped by the lexer, so the statement still parses.
    assert_eq!(
        parse_str("let x = 5 # + 6;").unwrap(),
        "Assignment(Variable(x), Operator(+, Number(5), Number(6)))"
    );
}

#[test]
fn test_parse_missing_semicolon() {
    assert_eq!(
        parse_str("let x = 5").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EndOfInput,
            token: String::new(),
        }
    );
}

#[test]
fn test_parse_missing_let() {
    assert_eq!(
        parse_str("x = 5;").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Let,
            found: TokenKind::Identifier,
            token: "x".to_string(),
        }
    );
}

#[test]
fn test_parse_missing_identifier() {
    assert_eq!(
        parse_str("let = 5;").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assign,
            token: "=".to_string(),
        }
    );
}

#[test]
fn test_parse_keyword_as_identifier() {
    assert_eq!(
        parse_str("let let = 5;").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Let,
            token: "let".to_string(),
        }
    );
}

#[test]
fn test_parse_missing_assign() {
    assert_eq!(
        parse_str("let x 5;").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Number,
            token: "5".to_string(),
        }
    );
}

#[test]
fn test_parse_empty_expression() {
    assert_eq!(
        parse_str("let x = ;").unwrap_err(),
        ErrorImpl::UnexpectedTerm {
            found: TokenKind::Semicolon,
            token: ";".to_string(),
        }
    );
}

#[test]
fn test_parse_dangling_plus() {
    assert_eq!(
        parse_str("let x = 1 +;").unwrap_err(),
        ErrorImpl::UnexpectedTerm {
            found: TokenKind::Semicolon,
            token: ";".to_string(),
        }
    );
}

#[test]
fn test_parse_double_plus() {
    assert_eq!(
        parse_str("let x = 1 + + 2;").unwrap_err(),
        ErrorImpl::UnexpectedTerm {
            found: TokenKind::Plus,
            token: "+".to_string(),
        }
    );
}

#[test]
fn test_parse_adjacent_terms() {
    assert_eq!(
        parse_str("let x = 1 2;").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Number,
            token: "2".to_string(),
        }
    );
}

#[test]
fn test_parse_empty_source() {
    assert_eq!(
        parse_str("").unwrap_err(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Let,
            found: TokenKind::EndOfInput,
            token: String::new(),
        }
    );
}

#[test]
fn test_parse_number_overflow() {
    assert_eq!(
        parse_str("let x = 9223372036854775808;").unwrap_err(),
        ErrorImpl::NumberParseError {
            token: "9223372036854775808".to_string(),
        }
    );
}

#[test]
fn test_parse_largest_number() {
    assert_eq!(
        parse_str("let x = 9223372036854775807;").unwrap(),
        "Assignment(Variable(x), Number(9223372036854775807))"
    );
}

#[test]
fn test_error_position_points_at_token() {
    let error = parse("let x = 5 6;".to_string(), None).unwrap_err();

    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_trailing_input_is_left_unconsumed() {
    let mut parser = parser_for("let x = 1; let y = 2;");

    assert!(parser.parse().is_ok());
    assert!(!parser.is_at_end());
    assert_eq!(parser.current_token_kind(), TokenKind::Let);

    let mut parser = parser_for("let x = 1;");
    assert!(parser.parse().is_ok());
    assert!(parser.is_at_end());
}

#[test]
fn test_expect_advances_on_match() {
    let mut parser = parser_for("let x");

    let token = parser.expect(TokenKind::Let).unwrap();
    assert_eq!(token.kind, TokenKind::Let);
    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
}

#[test]
fn test_expect_does_not_advance_on_mismatch() {
    let mut parser = parser_for("x");

    assert!(parser.expect(TokenKind::Let).is_err());
    assert_eq!(parser.current_token_kind(), TokenKind::Identifier);
}

#[test]
fn test_parse_term_directly() {
    let mut parser = parser_for("42");
    assert!(matches!(parse_term(&mut parser).unwrap(), Expr::Number(n) if n.value == 42));

    let mut parser = parser_for("=");
    assert!(parse_term(&mut parser).is_err());
}

#[test]
fn test_parse_expr_stops_before_semicolon() {
    let mut parser = parser_for("a + b;");

    let expr = parse_expr(&mut parser).unwrap();
    assert_eq!(expr.to_string(), "Operator(+, Variable(a), Variable(b))");
    assert_eq!(parser.current_token_kind(), TokenKind::Semicolon);
}

#[test]
fn test_statement_span() {
    let stmt = parse("  let x = 1 + 2;  ".to_string(), None).unwrap();

    assert_eq!(stmt.span.start.0, 2);
    assert_eq!(stmt.span.end.0, 16);
    assert_eq!(stmt.value.get_span().start.0, 10);
    assert_eq!(stmt.value.get_span().end.0, 15);
}
