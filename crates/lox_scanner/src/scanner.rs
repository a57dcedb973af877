//! The Lox scanner.
//!
//! A single pass over the source bytes. The scanner owns all of its state
//! (cursor, line counter, output token list and diagnostics) and every
//! sub-scan mutates that one instance. Lexical problems are pushed onto the
//! diagnostic list and scanning resumes with the next byte, so a scan always
//! reaches the end of the buffer.

use crate::char_codes::*;
use crate::token::{Literal, Token};
use crate::token_type::TokenType;
use lox_core::{to_text_pos, LineNumber, TextSpan};
use lox_diagnostics::{messages, DiagnosticCollection, ScanError};

/// The output of a complete scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Tokens in source order. The last one is always [`TokenType::Eof`].
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were found.
    pub diagnostics: DiagnosticCollection,
}

impl ScanResult {
    /// Whether any lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, DiagnosticCollection) {
        (self.tokens, self.diagnostics)
    }
}

/// Scan a complete source buffer.
pub fn scan(source: &[u8]) -> ScanResult {
    Scanner::new(source).scan_tokens()
}

/// The scanner converts Lox source bytes into tokens.
pub struct Scanner<'src> {
    /// The source being scanned. Never modified.
    source: &'src [u8],
    /// Start of the lexeme being scanned.
    start: usize,
    /// Current position in the source.
    current: usize,
    /// Current 1-based line.
    line: LineNumber,
    tokens: Vec<Token>,
    diagnostics: DiagnosticCollection,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the whole buffer, consuming the scanner.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_eof() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
            .push(Token::eof(self.line, to_text_pos(self.current)));
        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Whether we've reached the end of the source.
    #[inline]
    fn is_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Look at the byte at the current position without advancing.
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.get(self.current).copied()
    }

    /// Look one byte past the current position.
    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.source.get(self.current + 1).copied()
    }

    /// Consume the current byte. Callers check `is_eof` first.
    #[inline]
    fn advance(&mut self) -> u8 {
        let byte = self.source[self.current];
        self.current += 1;
        byte
    }

    /// Consume the current byte only if it is `expected`.
    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn scan_token(&mut self) {
        let byte = self.advance();
        match byte {
            b'!' => self.scan_operator(TokenType::Bang, TokenType::BangEqual),
            b'=' => self.scan_operator(TokenType::Equal, TokenType::EqualEqual),
            b'<' => self.scan_operator(TokenType::Less, TokenType::LessEqual),
            b'>' => self.scan_operator(TokenType::Greater, TokenType::GreaterEqual),
            SLASH => {
                if self.match_byte(SLASH) {
                    self.scan_comment();
                } else {
                    self.add_token(TokenType::Slash, None);
                }
            }
            b if is_blank(b) => {}
            LINE_FEED => self.line = self.line.saturating_add(1),
            DOUBLE_QUOTE => self.scan_string(),
            b if is_digit(b) => self.scan_number(),
            b if is_identifier_start(b) => self.scan_identifier(),
            b => match TokenType::from_punctuation(b) {
                Some(kind) => self.add_token(kind, None),
                None => self.add_error(ScanError::new(
                    self.line,
                    &messages::UNEXPECTED_CHARACTER,
                    &[describe_byte(b).as_str()],
                )),
            },
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Emit the two-byte form if the next byte is `=`, the one-byte form otherwise.
    fn scan_operator(&mut self, single: TokenType, with_equals: TokenType) {
        let kind = if self.match_byte(EQUALS) {
            with_equals
        } else {
            single
        };
        self.add_token(kind, None);
    }

    /// Skip to the end of the line. The newline itself is left for `scan_token`.
    fn scan_comment(&mut self) {
        let rest = &self.source[self.current..];
        self.current += memchr::memchr(LINE_FEED, rest).unwrap_or(rest.len());
    }

    fn scan_string(&mut self) {
        let start_line = self.line;
        let rest = &self.source[self.current..];

        let Some(close) = memchr::memchr(DOUBLE_QUOTE, rest) else {
            // Strings may span lines, so the lines are still counted.
            self.line = self.line.saturating_add(count_lines(rest));
            self.current = self.source.len();
            self.add_error(
                ScanError::new(start_line, &messages::UNTERMINATED_STRING, &[])
                    .with_span(self.lexeme_span()),
            );
            return;
        };

        self.line = self.line.saturating_add(count_lines(&rest[..close]));
        self.current += close + 1;

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token(TokenType::String, Some(Literal::String(value.into())));
    }

    fn scan_number(&mut self) {
        self.skip_digits();

        // A fractional part needs at least one digit after the dot.
        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.current += 1;
            self.skip_digits();
        }

        // Literals too large for an f64 parse to infinity and are rejected.
        let text = &self.source[self.start..self.current];
        let value = std::str::from_utf8(text)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .filter(|value| value.is_finite());
        match value {
            Some(value) => self.add_token(TokenType::Number, Some(Literal::Number(value))),
            None => {
                let text = String::from_utf8_lossy(text).into_owned();
                self.add_error(
                    ScanError::new(self.line, &messages::INVALID_NUMBER, &[text.as_str()])
                        .with_span(self.lexeme_span()),
                );
            }
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().map_or(false, is_identifier_part) {
            self.current += 1;
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenType::from_keyword(text).unwrap_or(TokenType::Identifier);
        self.add_token(kind, None);
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn lexeme_span(&self) -> TextSpan {
        TextSpan::from_bounds(to_text_pos(self.start), to_text_pos(self.current))
    }

    fn add_token(&mut self, kind: TokenType, literal: Option<Literal>) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.line, self.lexeme_span()));
    }

    fn add_error(&mut self, error: ScanError) {
        let error = match error.span {
            Some(_) => error,
            None => error.with_span(self.lexeme_span()),
        };
        self.diagnostics.add(error);
    }
}

fn count_lines(bytes: &[u8]) -> LineNumber {
    to_text_pos(memchr::memchr_iter(LINE_FEED, bytes).count())
}
