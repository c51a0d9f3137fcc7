//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a lazy
//! sequence of classified tokens. It handles:
//!
//! - Recognition of the `let` keyword, identifiers and integer literals
//! - The `=`, `+` and `;` symbols
//! - Whitespace skipping and silent dropping of unrecognised characters
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
