//! lox_core: Core source-position types shared by the Lox front end.
//!
//! Provides byte spans and line bookkeeping used by tokens and diagnostics.

pub mod text;

pub use text::{to_text_pos, LineMap, LineNumber, TextPos, TextSpan};
