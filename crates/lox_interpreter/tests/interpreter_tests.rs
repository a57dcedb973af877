//! Driver integration tests.
//!
//! End-to-end runs over real files and an in-memory prompt.

use lox_interpreter::{location, InterpreterError, Lox, OutputFormat};
use lox_scanner::TokenType;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: write `files` into a fresh directory and return their paths.
fn write_files(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let paths = files
        .iter()
        .map(|(name, contents)| {
            let path = dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        })
        .collect();
    (dir, paths)
}

#[test]
fn test_run_file() {
    let (_dir, paths) = write_files(&[("main.lox", "var greeting = \"hi\";\nprint greeting;\n")]);
    let mut lox = Lox::new();
    let scan = lox.run_file(&paths[0]).unwrap();

    let kinds: Vec<_> = scan.result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Var,
            TokenType::Identifier,
            TokenType::Equal,
            TokenType::String,
            TokenType::Semicolon,
            TokenType::Print,
            TokenType::Identifier,
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );
    assert_eq!(scan.result.tokens.last().map(|t| t.line), Some(3));
    assert!(!lox.had_error());
}

#[test]
fn test_run_file_tags_diagnostics_with_path() {
    let (_dir, paths) = write_files(&[("bad.lox", "print 1;\nprint \"oops;\n")]);
    let mut lox = Lox::new();
    let scan = lox.run_file(&paths[0]).unwrap();

    assert!(lox.had_error());
    let diagnostics = scan.result.diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 2);

    let file = paths[0].display().to_string();
    assert_eq!(diagnostics[0].file.as_deref(), Some(file.as_str()));
    assert_eq!(
        location(&diagnostics[0], &scan.line_map()),
        Some(format!("{}:2:7", file))
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut lox = Lox::new();
    let err = lox.run_file(&dir.path().join("nope.lox")).unwrap_err();
    assert!(matches!(err, InterpreterError::ReadSource { .. }));
    assert!(err.to_string().contains("nope.lox"));
}

#[test]
fn test_run_files_keeps_input_order() {
    let (_dir, paths) = write_files(&[
        ("a.lox", "1"),
        ("b.lox", "\"two\""),
        ("c.lox", "three"),
        ("d.lox", "#"),
    ]);
    let mut lox = Lox::new();
    let scans = lox.run_files(&paths).unwrap();

    let first_kinds: Vec<_> = scans.iter().map(|s| s.result.tokens[0].kind).collect();
    assert_eq!(
        first_kinds,
        vec![
            TokenType::Number,
            TokenType::String,
            TokenType::Identifier,
            TokenType::Eof,
        ]
    );
    let scanned_paths: Vec<_> = scans.iter().map(|s| s.path.clone()).collect();
    assert_eq!(scanned_paths, paths);
    assert!(scans[3].result.has_errors());
    assert!(lox.had_error());
}

#[test]
fn test_run_files_fails_before_scanning() {
    let (dir, mut paths) = write_files(&[("ok.lox", "@")]);
    paths.push(dir.path().join("missing.lox"));

    let mut lox = Lox::new();
    let err = lox.run_files(&paths).unwrap_err();
    assert!(matches!(err, InterpreterError::ReadSource { .. }));
    // Nothing was scanned, so the error in ok.lox was never seen.
    assert!(!lox.had_error());
}

#[test]
fn test_prompt_reports_each_line() {
    let input = b"var a = 1;\n\"open\n";
    let mut output = Vec::new();
    let mut lox = Lox::new();
    let err = lox
        .run_prompt(&input[..], &mut output, OutputFormat::Text)
        .unwrap_err();
    assert!(matches!(err, InterpreterError::InputClosed));

    let output = String::from_utf8(output).unwrap();
    let expected = "\
> Var var null
Identifier a null
Equal = null
Number 1 1
Semicolon ; null
Eof  null
> Eof  null
[line 1] error LX1002: Unterminated string.
> ";
    assert_eq!(output, expected);
}

#[test]
fn test_prompt_json_output() {
    let mut output = Vec::new();
    let mut lox = Lox::new();
    let _ = lox.run_prompt(&b"nil\n"[..], &mut output, OutputFormat::Json);

    let output = String::from_utf8(output).unwrap();
    let body = output
        .strip_prefix("> ")
        .and_then(|rest| rest.strip_suffix("> "))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    let tokens = &value["tokens"];
    assert_eq!(tokens[0]["kind"], "Nil");
    assert_eq!(tokens[1]["kind"], "Eof");
    assert_eq!(tokens[1]["line"], 2);
    assert_eq!(value["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_prompt_json_output_with_errors_stays_json() {
    let mut output = Vec::new();
    let mut lox = Lox::new();
    let _ = lox.run_prompt(&b"\"open\n"[..], &mut output, OutputFormat::Json);

    let output = String::from_utf8(output).unwrap();
    let body = output
        .strip_prefix("> ")
        .and_then(|rest| rest.strip_suffix("> "))
        .unwrap();
    assert!(!body.contains("[line"));
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["tokens"][0]["kind"], "Eof");
    assert_eq!(value["tokens"][0]["line"], 2);
    assert_eq!(value["diagnostics"][0]["message"], "Unterminated string.");
    assert_eq!(value["diagnostics"][0]["line"], 1);
}
