#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code: panics provide clear failure messages"
)]

//! End-to-end tests for the command-line front end.
//!
//! These drive the library half of the `strtok` crate the same way
//! `main.rs` does, writing into a buffer instead of stdout.
//!
//! # Running
//!
//! ```bash
//! cargo test -p strtok --test cli
//! ```

use std::io::Write;

use clap::Parser;
use pretty_assertions::assert_eq;
use strtok::{read_input, tokenize, Cli, CliError, OutputFormat, TokenizeOptions};
use strtok_core::DelimiterSet;

const DEMO: &str = "ABCD\tEFG\u{C}HIJKLM PQR";

fn run(source: &str, options: &TokenizeOptions) -> (usize, String) {
    let mut out = Vec::new();
    let count = tokenize(source, options, &mut out).unwrap();
    (count, String::from_utf8(out).unwrap())
}

// === Output ===

#[test]
fn demo_prints_one_token_per_line() {
    let (count, output) = run(DEMO, &TokenizeOptions::default());
    assert_eq!(count, 4);
    assert_eq!(output, "ABCD\nEFG\nHIJKLM\nPQR\n");
}

#[test]
fn returned_delimiters_in_debug_format() {
    let options = TokenizeOptions {
        return_delimiters: true,
        format: OutputFormat::Debug,
        ..TokenizeOptions::default()
    }
    .with_escaped_delimiters(r"\f\t\s")
    .unwrap();

    let (count, output) = run(DEMO, &options);
    assert_eq!(count, 7);
    assert_eq!(
        output,
        concat!(
            "[0..4) \"ABCD\"\n",
            "[4..5) \"\\t\"\n",
            "[5..8) \"EFG\"\n",
            "[8..9) \"\\u{c}\"\n",
            "[9..15) \"HIJKLM\"\n",
            "[15..16) \" \"\n",
            "[16..19) \"PQR\"\n",
        )
    );
}

#[test]
fn json_output_carries_utf16_spans() {
    let options = TokenizeOptions {
        format: OutputFormat::Json,
        ..TokenizeOptions::default()
    };
    let (count, output) = run("\u{1F600} ok", &options);
    assert_eq!(count, 2);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "text": "\u{1F600}", "start": 0, "end": 2 },
            { "text": "ok", "start": 3, "end": 5 },
        ])
    );
}

#[test]
fn astral_delimiter_from_escape() {
    let options = TokenizeOptions::default()
        .with_escaped_delimiters(r"\u{1F600}")
        .unwrap();
    let (count, output) = run("a b\u{1F600}c", &options);
    assert_eq!(count, 2);
    assert_eq!(output, "a b\nc\n");
}

// === Counting ===

#[test]
fn count_only_prints_number() {
    let options = TokenizeOptions {
        count_only: true,
        ..TokenizeOptions::default()
    };
    let (count, output) = run(DEMO, &options);
    assert_eq!(count, 4);
    assert_eq!(output, "4\n");
}

#[test]
fn count_only_on_delimiters() {
    let options = TokenizeOptions {
        count_only: true,
        return_delimiters: true,
        delimiters: DelimiterSet::new(" "),
        ..TokenizeOptions::default()
    };
    assert_eq!(run("   ", &options), (3, "3\n".to_string()));
}

#[test]
fn empty_input_prints_nothing() {
    assert_eq!(run("", &TokenizeOptions::default()), (0, String::new()));
}

// === Input selection ===

#[test]
fn literal_text_wins() {
    let input = read_input(Some("abc".into()), None).unwrap();
    assert_eq!(input, "abc");
}

#[test]
fn file_input_is_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{DEMO}").unwrap();

    let input = read_input(None, Some(file.path())).unwrap();
    assert_eq!(input, DEMO);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = read_input(None, Some(&path)).unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("cannot find file '{}'", path.display())
    );
}

#[test]
fn invalid_utf8_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x61, 0xFF, 0x62]).unwrap();

    let err = read_input(None, Some(file.path())).unwrap_err();
    assert!(matches!(err, CliError::InvalidUtf8 { .. }));
}

#[test]
fn bad_escape_message() {
    let err = TokenizeOptions::default()
        .with_escaped_delimiters(r"\q")
        .unwrap_err();
    assert_eq!(err.to_string(), r"invalid escape '\q' in delimiters");
}

// === Flags ===

#[test]
fn flags_build_options() {
    let cli = Cli::try_parse_from([
        "strtok", "-r", "--count", "--format", "json", "-d", r"\t,", "a\tb",
    ])
    .unwrap();
    assert_eq!(cli.text.as_deref(), Some("a\tb"));

    let options = cli.options().unwrap();
    assert_eq!(
        options,
        TokenizeOptions {
            delimiters: DelimiterSet::new("\t,"),
            return_delimiters: true,
            count_only: true,
            format: OutputFormat::Json,
        }
    );
}

#[test]
fn no_flags_give_default_options() {
    let cli = Cli::try_parse_from(["strtok"]).unwrap();
    assert_eq!(cli.text, None);
    assert_eq!(cli.file, None);
    assert_eq!(cli.options().unwrap(), TokenizeOptions::default());
}

#[test]
fn file_conflicts_with_text() {
    let err = Cli::try_parse_from(["strtok", "--file", "in.txt", "abc"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn unknown_format_is_rejected() {
    let err = Cli::try_parse_from(["strtok", "--format", "xml"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn bad_delimiter_escape_surfaces_from_options() {
    let cli = Cli::try_parse_from(["strtok", "-d", r"\q", "abc"]).unwrap();
    assert!(matches!(cli.options(), Err(CliError::InvalidEscape('q'))));
}
