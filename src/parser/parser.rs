//! Parser state and entry points.
//!
//! The parser pulls tokens from the lexer on demand and keeps exactly one
//! of them, the current token, as lookahead. The grammar rules live in
//! `stmt.rs` and `expr.rs` as plain recursive functions over this state.

use tracing::debug;

use crate::{
    ast::statements::AssignmentStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_assignment_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, pulled one token at a time
    lexer: Lexer,
    /// The single lookahead token
    current: Token,
}

impl Parser {
    /// Creates a parser and pulls the first token from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token and returns the one it replaces.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise an
    /// `UnexpectedToken` error naming both the expected and the found kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                    token: token.value.clone(),
                },
                self.get_position(),
            ));
        }

        Ok(self.advance())
    }

    /// Whether every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current.is_end()
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses one `let` statement.
    ///
    /// Anything after the closing `;` is left unconsumed; use
    /// [`Parser::is_at_end`] to detect it.
    pub fn parse(&mut self) -> Result<AssignmentStmt, Error> {
        debug!(file = %self.lexer.file(), "parsing statement");

        let result = parse_assignment_stmt(self);
        match &result {
            Ok(stmt) => debug!(tree = %stmt, "parsed statement"),
            Err(error) => debug!(%error, position = error.get_position().0, "syntax error"),
        }

        result
    }
}

/// Scans and parses `source` in one step.
///
/// # Arguments
///
/// * `source` - The complete source text
/// * `file` - Name used in spans and error reports, `shell` when `None`
pub fn parse(source: String, file: Option<String>) -> Result<AssignmentStmt, Error> {
    Parser::new(Lexer::new(source, file)).parse()
}
