//! The Lox session: runs source text through the front end.

use crate::error::{InterpreterError, Result};
use crate::render::{render_scan, OutputFormat};
use crate::source::read_source;
use lox_core::LineMap;
use lox_scanner::ScanResult;
use rayon::prelude::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// A scanned source file together with the bytes it was scanned from.
#[derive(Debug, Clone)]
pub struct SourceScan {
    pub path: PathBuf,
    pub source: Vec<u8>,
    pub result: ScanResult,
}

impl SourceScan {
    fn new(path: PathBuf, source: Vec<u8>) -> Self {
        let mut result = lox_scanner::scan(&source);
        result.diagnostics.set_file(&path.display().to_string());
        Self {
            path,
            source,
            result,
        }
    }

    /// Line/column lookup over this file's source.
    pub fn line_map(&self) -> LineMap {
        LineMap::new(&self.source)
    }
}

/// An interpreter session.
///
/// Remembers whether any run reported a lexical error, so the caller can
/// decide not to go on to later stages.
#[derive(Debug, Default)]
pub struct Lox {
    had_error: bool,
}

impl Lox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any run since the last reset reported an error.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset_error(&mut self) {
        self.had_error = false;
    }

    /// Scan one source buffer.
    pub fn run(&mut self, source: &[u8]) -> ScanResult {
        debug!(source = %String::from_utf8_lossy(source), "running source");
        let result = lox_scanner::scan(source);
        self.record(&result);
        result
    }

    /// Read and scan a single file.
    pub fn run_file(&mut self, path: &Path) -> Result<SourceScan> {
        let source = read_source(path)?;
        debug!(path = %path.display(), bytes = source.len(), "running file");
        let scan = SourceScan::new(path.to_path_buf(), source);
        self.record(&scan.result);
        Ok(scan)
    }

    /// Read every file, then scan them in parallel.
    ///
    /// Any unreadable file aborts the whole run before scanning starts.
    /// Results come back in the order of `paths`.
    pub fn run_files(&mut self, paths: &[PathBuf]) -> Result<Vec<SourceScan>> {
        let sources = paths
            .iter()
            .map(|path| read_source(path).map(|source| (path.clone(), source)))
            .collect::<Result<Vec<_>>>()?;

        let scans: Vec<SourceScan> = sources
            .into_par_iter()
            .map(|(path, source)| SourceScan::new(path, source))
            .collect();

        for scan in &scans {
            debug!(path = %scan.path.display(), "scanned file");
            self.record(&scan.result);
        }
        Ok(scans)
    }

    /// Read lines from `input` until it is exhausted, echoing the token
    /// stream and diagnostics of each line to `output`.
    ///
    /// Reaching the end of input is reported as [`InterpreterError::InputClosed`].
    pub fn run_prompt<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        format: OutputFormat,
    ) -> Result<()> {
        info!("starting interactive prompt");
        let mut line = Vec::new();
        loop {
            write!(output, "> ").map_err(InterpreterError::Prompt)?;
            output.flush().map_err(InterpreterError::Prompt)?;

            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(InterpreterError::Prompt)?;
            if read == 0 {
                return Err(InterpreterError::InputClosed);
            }

            let result = self.run(&line);
            let rendered = render_scan(&result, format)?;
            output
                .write_all(rendered.as_bytes())
                .map_err(InterpreterError::Prompt)?;

            // Each prompt line stands alone.
            self.reset_error();
        }
    }

    fn record(&mut self, result: &ScanResult) {
        for token in &result.tokens {
            trace!(%token, line = token.line, "token");
        }
        for diagnostic in &result.diagnostics {
            warn!(line = diagnostic.line, code = diagnostic.code, "{}", diagnostic.message);
        }
        debug!(
            tokens = result.tokens.len(),
            errors = result.diagnostics.len(),
            "scan finished"
        );
        if result.has_errors() {
            self.had_error = true;
        }
    }
}
