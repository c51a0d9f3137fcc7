//! Parser module for building the syntax tree.
//!
//! A recursive-descent parser over the grammar
//!
//! ```text
//! statement   := "let" Identifier "=" expression ";"
//! expression  := term ( "+" term )*
//! term        := Number | Identifier
//! ```
//!
//! Tokens are pulled from the lexer one at a time with a single token of
//! lookahead. The first mismatch aborts the parse with a syntax error.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
