//! Tests for the line-delimited JSON transport.

use std::io::Cursor;

use serde_json::Value;
use uast_core::config::UastConfig;
use uast_go::{serve, Driver, ServeStats};

fn run(input: &str) -> (ServeStats, Vec<Value>) {
    run_bytes(input.as_bytes())
}

fn run_bytes(input: &[u8]) -> (ServeStats, Vec<Value>) {
    let driver = Driver::new(&UastConfig::default());
    let mut out = Vec::new();
    let stats = serve(&driver, Cursor::new(input), &mut out).unwrap();
    let responses = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (stats, responses)
}

#[test]
fn test_one_response_per_request() {
    let input = concat!(
        r#"{"content": "package main"}"#,
        "\n",
        r#"{"content": "", "encoding": "UTF8"}"#,
        "\n",
    );
    let (stats, responses) = run(input);
    assert_eq!(stats, ServeStats { handled: 2, skipped: 0 });
    assert_eq!(responses[0]["status"], "ok");
    assert_eq!(responses[1]["status"], "fatal");
    assert_eq!(responses[1]["errors"][0], "1:1: expected 'package', found 'EOF'");
}

/// Malformed lines are skipped and serving continues.
#[test]
fn test_malformed_lines_are_skipped() {
    let input = "not json\n\n{\"language\": \"go\"}\n{\"content\": \"package p\"}\n";
    let (stats, responses) = run(input);
    assert_eq!(stats, ServeStats { handled: 1, skipped: 2 });
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["ast"]["Children"][0]["Properties"]["Name"], "p");
}

/// A line that is not valid UTF-8 is skipped like any other malformed request.
#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"content\":\"package a\"}\n");
    input.extend_from_slice(b"{\"content\":\"\xff\xfe\"}\n");
    input.extend_from_slice(b"{\"content\":\"package b\"}\n");
    let (stats, responses) = run_bytes(&input);
    assert_eq!(stats, ServeStats { handled: 2, skipped: 1 });
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["ast"]["Children"][0]["Properties"]["Name"], "a");
    assert_eq!(responses[1]["ast"]["Children"][0]["Properties"]["Name"], "b");
}

#[test]
fn test_crlf_line_endings() {
    let (stats, responses) = run("{\"content\": \"package c\"}\r\n");
    assert_eq!(stats, ServeStats { handled: 1, skipped: 0 });
    assert_eq!(responses[0]["ast"]["Children"][0]["Properties"]["Name"], "c");
}

#[test]
fn test_encoding_aliases() {
    let input = r#"{"content": "cGFja2FnZSBtYWlu", "encoding": "base64"}"#;
    let (_, responses) = run(input);
    assert_eq!(responses[0]["status"], "ok");
    assert_eq!(responses[0]["ast"]["EndOffset"], 12);
}
