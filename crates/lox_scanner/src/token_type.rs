//! TokenType enum - every lexical category of the Lox language.

use serde::Serialize;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Look up a keyword from identifier text. Matching is exact and case-sensitive.
    pub fn from_keyword(text: &[u8]) -> Option<TokenType> {
        match text {
            b"and" => Some(TokenType::And),
            b"class" => Some(TokenType::Class),
            b"else" => Some(TokenType::Else),
            b"false" => Some(TokenType::False),
            b"fun" => Some(TokenType::Fun),
            b"for" => Some(TokenType::For),
            b"if" => Some(TokenType::If),
            b"nil" => Some(TokenType::Nil),
            b"or" => Some(TokenType::Or),
            b"print" => Some(TokenType::Print),
            b"return" => Some(TokenType::Return),
            b"super" => Some(TokenType::Super),
            b"this" => Some(TokenType::This),
            b"true" => Some(TokenType::True),
            b"var" => Some(TokenType::Var),
            b"while" => Some(TokenType::While),
            _ => None,
        }
    }

    /// Map a single punctuation byte to its token kind.
    ///
    /// `/` is included even though the scanner checks it for a comment first.
    pub fn from_punctuation(byte: u8) -> Option<TokenType> {
        match byte {
            b'(' => Some(TokenType::LeftParen),
            b')' => Some(TokenType::RightParen),
            b'{' => Some(TokenType::LeftBrace),
            b'}' => Some(TokenType::RightBrace),
            b',' => Some(TokenType::Comma),
            b'.' => Some(TokenType::Dot),
            b'-' => Some(TokenType::Minus),
            b'+' => Some(TokenType::Plus),
            b';' => Some(TokenType::Semicolon),
            b'/' => Some(TokenType::Slash),
            b'*' => Some(TokenType::Star),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
