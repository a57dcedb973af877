//! Fatal driver errors.
//!
//! These are environment failures. Lexical problems never show up here; they
//! are collected as diagnostics by the scanner.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InterpreterError {
    #[error("could not read source file {}", .path.display())]
    #[diagnostic(
        code(lox::read_source),
        help("check that the file exists and is readable")
    )]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read interactive input")]
    #[diagnostic(code(lox::prompt))]
    Prompt(#[source] std::io::Error),

    #[error("interactive input closed")]
    #[diagnostic(code(lox::input_closed), help("the prompt reads until end of input"))]
    InputClosed,

    #[error("failed to render tokens as JSON")]
    #[diagnostic(code(lox::render))]
    Render(#[from] serde_json::Error),
}

pub type Result<T, E = InterpreterError> = std::result::Result<T, E>;
