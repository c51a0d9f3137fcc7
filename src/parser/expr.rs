use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression := term ( "+" term )*
///
/// Each new term is folded onto the tree built so far, so `a + b + c`
/// becomes `(a + b) + c`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while parser.current_token_kind() == TokenKind::Plus {
        let operator = parser.expect(TokenKind::Plus)?;
        let right = parse_term(parser)?;

        left = Expr::Binary(BinaryExpr::new(left, operator, right));
    }

    Ok(left)
}

/// term := Number | Identifier
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parser.current_token().value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )
            })?;

            Ok(Expr::Number(NumberExpr {
                value,
                span: parser.advance().span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();

            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        found => Err(Error::new(
            ErrorImpl::UnexpectedTerm {
                found,
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}
