//! Error types for the scanner and tree builder.
//!
//! There is a single failure mode, the syntax error. It carries:
//!
//! - The specific reason (token mismatch, malformed term, oversized number)
//! - The source position the error was found at
//! - A human readable tip for reports

pub mod errors;
