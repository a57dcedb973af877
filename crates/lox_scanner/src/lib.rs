//! lox_scanner: Lexer for Lox source code.
//!
//! Converts a source buffer into an ordered token stream terminated by an
//! end-of-input token, plus the list of lexical errors found along the way.
//! The scanner works on bytes and only understands ASCII letters, digits
//! and punctuation.

mod char_codes;
mod scanner;
mod token;
mod token_type;

pub use scanner::{scan, ScanResult, Scanner};
pub use token::{Literal, Token};
pub use token_type::TokenType;
