//! lox_diagnostics: Lexical diagnostics and their message catalogue.
//!
//! Every problem the scanner finds is recorded as a [`ScanError`] in a
//! [`DiagnosticCollection`] and scanning carries on. There is no severity:
//! all scan errors are recoverable, and the caller decides whether a token
//! stream with errors may be handed to a parser.

use lox_core::{LineNumber, TextSpan};
use serde::Serialize;
use std::fmt;

/// A diagnostic message template with a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code, rendered as `LX{code}`.
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A recoverable lexical diagnostic tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanError {
    /// The 1-based line the problem was detected on.
    pub line: LineNumber,
    /// The resolved message text.
    pub message: String,
    /// The diagnostic code.
    pub code: u32,
    /// The offending bytes, when the scanner knows them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TextSpan>,
    /// The file the source came from, attached by the driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ScanError {
    /// Create a new diagnostic at `line` from a message template.
    pub fn new(line: LineNumber, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line,
            message: format_message(message.message, args),
            code: message.code,
            span: None,
            file: None,
        }
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}: ", file)?;
        }
        write!(
            f,
            "[line {}] error LX{}: {}",
            self.line, self.code, self.message
        )
    }
}

impl std::error::Error for ScanError {}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// An ordered collection of diagnostics, in the order they were detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<ScanError>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: ScanError) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[ScanError] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScanError> {
        self.diagnostics.iter()
    }

    /// Attach a file name to every diagnostic in the collection.
    pub fn set_file(&mut self, file: &str) {
        for diagnostic in &mut self.diagnostics {
            diagnostic.file = Some(file.to_string());
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a ScanError;
    type IntoIter = std::slice::Iter<'a, ScanError>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::DiagnosticMessage;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // Scanner errors (1000-1099)
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, "Unexpected character '{0}'.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, "Unterminated string.");
    pub const INVALID_NUMBER: DiagnosticMessage = diag!(1003, "Could not parse number '{0}'.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' and '{1}'", &["a", "b"]), "'a' and 'b'");
        assert_eq!(format_message("no placeholders", &["unused"]), "no placeholders");
    }

    #[test]
    fn test_scan_error_display() {
        let error = ScanError::new(3, &messages::UNEXPECTED_CHARACTER, &["@"]);
        assert_eq!(error.code, 1001);
        assert_eq!(
            error.to_string(),
            "[line 3] error LX1001: Unexpected character '@'."
        );

        let mut collection = DiagnosticCollection::new();
        collection.add(error);
        collection.set_file("main.lox");
        assert_eq!(
            collection.diagnostics()[0].to_string(),
            "main.lox: [line 3] error LX1001: Unexpected character '@'."
        );
    }

    #[test]
    fn test_scan_error_span() {
        let error = ScanError::new(1, &messages::UNTERMINATED_STRING, &[])
            .with_span(TextSpan::from_bounds(0, 4));
        assert_eq!(error.span, Some(TextSpan::new(0, 4)));
        assert!(error.file.is_none());
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);

        collection.add(ScanError::new(1, &messages::UNTERMINATED_STRING, &[]));
        collection.add(ScanError::new(2, &messages::INVALID_NUMBER, &["1.2.3"]));
        assert_eq!(collection.len(), 2);

        let lines: Vec<_> = collection.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_diagnostic_collection_set_file() {
        let mut collection = DiagnosticCollection::new();
        collection.add(ScanError::new(1, &messages::UNTERMINATED_STRING, &[]));
        collection.add(ScanError::new(4, &messages::UNEXPECTED_CHARACTER, &["#"]));

        collection.set_file("a.lox");
        assert!(collection
            .iter()
            .all(|d| d.file.as_deref() == Some("a.lox")));
    }
}
