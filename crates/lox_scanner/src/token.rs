//! Tokens produced by the scanner.

use crate::token_type::TokenType;
use lox_core::{LineNumber, TextSpan};
use serde::{Serialize, Serializer};
use std::fmt;

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Literal {
    /// Bytes between the quotes of a string literal, unprocessed.
    String(#[serde(serialize_with = "serialize_lossy")] Box<[u8]>),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Literal::Number(value) => write!(f, "{}", value),
        }
    }
}

/// A scanned token. Owns its lexeme and literal, so it outlives the source buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenType,
    /// The exact source bytes the token was scanned from.
    #[serde(serialize_with = "serialize_lossy")]
    pub lexeme: Box<[u8]>,
    /// Present for strings and numbers only.
    pub literal: Option<Literal>,
    /// The line the token ended on.
    pub line: LineNumber,
    /// Byte range of the lexeme in the source buffer.
    pub span: TextSpan,
}

impl Token {
    pub fn new(
        kind: TokenType,
        lexeme: &[u8],
        literal: Option<Literal>,
        line: LineNumber,
        span: TextSpan,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input sentinel, with an empty lexeme.
    pub fn eof(line: LineNumber, pos: u32) -> Self {
        Self::new(TokenType::Eof, b"", None, line, TextSpan::empty(pos))
    }

    /// The lexeme as text, replacing any invalid UTF-8.
    pub fn lexeme_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    /// The numeric value of a number token.
    pub fn number(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Number(value)) => Some(value),
            _ => None,
        }
    }

    /// The unquoted bytes of a string token.
    pub fn string(&self) -> Option<&[u8]> {
        match self.literal {
            Some(Literal::String(ref bytes)) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme_text())?;
        match self.literal {
            Some(ref literal) => write!(f, "{}", literal),
            None => write!(f, "null"),
        }
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
