use crate::{
    ast::{expressions::SymbolExpr, statements::AssignmentStmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
    Span,
};

use super::parser::Parser;

/// statement := "let" Identifier "=" expression ";"
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let start = parser.expect(TokenKind::Let)?.span.start;

    let identifier = parser.expect(TokenKind::Identifier)?;
    let target = SymbolExpr {
        value: identifier.value,
        span: identifier.span,
    };

    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(AssignmentStmt {
        target,
        value,
        span: Span { start, end },
    })
}
