//! lox_interpreter: The driver around the Lox front end.
//!
//! Loads source text from files or an interactive prompt, runs the scanner
//! over it and renders the resulting tokens and diagnostics. Parsing and
//! evaluation stages will hang off [`Lox::run`] once they exist.

mod error;
mod render;
mod session;
mod source;

pub use error::{InterpreterError, Result};
pub use render::{location, render_diagnostics, render_scan, render_tokens, OutputFormat};
pub use session::{Lox, SourceScan};
pub use source::read_source;
