//! Text and JSON rendering of scan output.

use crate::error::Result;
use lox_core::LineMap;
use lox_diagnostics::{DiagnosticCollection, ScanError};
use lox_scanner::{ScanResult, Token};
use serde::Serialize;

/// How token streams are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `kind lexeme literal` line per token.
    #[default]
    Text,
    /// A pretty-printed JSON array of tokens.
    Json,
}

/// Render a token stream, newline-terminated.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Text => tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)?,
    };
    out.push('\n');
    Ok(out)
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    tokens: &'a [Token],
    diagnostics: &'a [ScanError],
}

/// Render a whole scan, tokens first and then diagnostics.
///
/// JSON output is a single `{"tokens": [...], "diagnostics": [...]}`
/// object so that the stream stays machine-readable when errors occur.
pub fn render_scan(result: &ScanResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            Ok(render_tokens(&result.tokens, format)? + &render_diagnostics(&result.diagnostics))
        }
        OutputFormat::Json => {
            let output = ScanOutput {
                tokens: &result.tokens,
                diagnostics: result.diagnostics.diagnostics(),
            };
            let mut out = serde_json::to_string_pretty(&output)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Render diagnostics, one per line.
pub fn render_diagnostics(diagnostics: &DiagnosticCollection) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}\n", d))
        .collect()
}

/// `file:line:column` for a diagnostic that carries a span.
pub fn location(diagnostic: &ScanError, line_map: &LineMap) -> Option<String> {
    let span = diagnostic.span?;
    let file = diagnostic.file.as_deref().unwrap_or("<input>");
    Some(format!(
        "{}:{}:{}",
        file,
        line_map.line_of(span.start),
        line_map.column_of(span.start)
    ))
}
