//! lox: Command-line driver for the Lox front end.
//!
//! Usage:
//!   lox [options] [FILE...]
//!
//! With files, each one is scanned and its diagnostics reported. Without
//! files, an interactive prompt scans one line at a time.

use clap::{Parser as ClapParser, ValueEnum};
use lox_interpreter::{location, InterpreterError, Lox, OutputFormat, SourceScan};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(ClapParser, Debug)]
#[command(name = "lox", version, about = "Scanner front end for the Lox scripting language")]
struct Cli {
    /// Lox source files to scan.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Lox source file to scan (may be repeated).
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Vec<PathBuf>,

    /// Print the token stream of each file.
    #[arg(long)]
    tokens: bool,

    /// Token output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Colour diagnostics when stderr is a terminal.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pretty: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let files: Vec<PathBuf> = cli.files.iter().chain(&cli.file).cloned().collect();
    let result = if files.is_empty() {
        run_prompt(&cli)
    } else {
        run_files(&cli, &files)
    };

    match result {
        Ok(0) => tracing::info!("exited without issue"),
        Ok(code) => process::exit(code),
        Err(err) => {
            tracing::error!(%err, "fatal error");
            eprintln!("{:?}", miette::Report::new(err));
            process::exit(1);
        }
    }
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// The driver's own start/exit messages stay visible at the default level.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,lox_cli=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run_prompt(cli: &Cli) -> Result<i32, InterpreterError> {
    let mut lox = Lox::new();
    let stdin = io::stdin();
    lox.run_prompt(stdin.lock(), io::stdout(), cli.format.into())?;
    Ok(0)
}

fn run_files(cli: &Cli, files: &[PathBuf]) -> Result<i32, InterpreterError> {
    let mut lox = Lox::new();
    let scans = lox.run_files(files)?;

    if cli.tokens {
        for scan in &scans {
            if scans.len() > 1 {
                println!("== {}", scan.path.display());
            }
            print!(
                "{}",
                lox_interpreter::render_tokens(&scan.result.tokens, cli.format.into())?
            );
        }
    }

    let use_color = cli.pretty && atty_is_terminal();
    let mut count = 0;
    for scan in &scans {
        count += print_diagnostics(scan, use_color);
    }

    if lox.had_error() {
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                count,
                if count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        return Ok(2);
    }

    Ok(0)
}

/// Print every diagnostic of one file and return how many there were.
fn print_diagnostics(scan: &SourceScan, use_color: bool) -> usize {
    let diagnostics = &scan.result.diagnostics;
    if diagnostics.is_empty() {
        return 0;
    }

    let line_map = scan.line_map();
    for diag in diagnostics {
        if use_color {
            eprintln!(
                "{}{}error{} {}LX{}{}: {}",
                BOLD, RED, RESET, CYAN, diag.code, RESET, diag.message
            );
        } else {
            eprintln!("error LX{}: {}", diag.code, diag.message);
        }
        let at = location(diag, &line_map).unwrap_or_else(|| {
            format!("{}:{}", scan.path.display(), diag.line)
        });
        if use_color {
            eprintln!("  {}-->{} {}", GRAY, RESET, at);
        } else {
            eprintln!("  --> {}", at);
        }
    }
    diagnostics.len()
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
