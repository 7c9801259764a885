//! # Trace Loading Tests
//!
//! Covers line parsing (`<R|W> <hex address> [<hex data>]`), whole-trace
//! loading from readers and files, and the all-or-nothing error behavior.

use std::io::{Cursor, Write};

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;
use tlbsim_core::common::{AccessType, MemoryRequest, ParseError, ParseErrorKind, SimError};
use tlbsim_core::sim::loader::{load_requests, load_trace_file, parse_line};

fn create_temp_trace(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[rstest]
#[case::read("R 1000", MemoryRequest::read(0x1000))]
#[case::write_with_data("W 1000 ff", MemoryRequest::write(0x1000, 0xFF))]
#[case::write_without_data("W 2000", MemoryRequest::write(0x2000, 0))]
#[case::prefixed("R 0x1F 0XAB", MemoryRequest { data: 0xAB, ..MemoryRequest::read(0x1F) })]
#[case::upper_hex("R DEADBEEF", MemoryRequest::read(0xDEAD_BEEF))]
#[case::other_type_is_read("X 10", MemoryRequest::read(0x10))]
#[case::lowercase_w_is_read("w 10 1", MemoryRequest { data: 1, ..MemoryRequest::read(0x10) })]
#[case::bad_data_defaults_zero("W 10 zz", MemoryRequest::write(0x10, 0))]
#[case::extra_whitespace("  W\t40   7  \r", MemoryRequest::write(0x40, 7))]
fn parses_valid_lines(#[case] line: &str, #[case] expected: MemoryRequest) {
    assert_eq!(parse_line(line, 1).unwrap(), expected);
}

#[rstest]
#[case::empty("", ParseErrorKind::TooFewTokens(0))]
#[case::type_only("R", ParseErrorKind::TooFewTokens(1))]
#[case::bad_address("R xyz", ParseErrorKind::BadAddress("xyz".into()))]
#[case::overflow("R 100000000", ParseErrorKind::BadAddress("100000000".into()))]
fn rejects_malformed_lines(#[case] line: &str, #[case] kind: ParseErrorKind) {
    assert_eq!(parse_line(line, 7), Err(ParseError { line: 7, kind }));
}

#[test]
fn access_type_flag_matches_letter() {
    assert!(parse_line("W 0", 1).unwrap().is_write());
    assert_eq!(parse_line("R 0", 1).unwrap().access, AccessType::Read);
}

#[test]
fn load_requests_preserves_order() {
    let reqs = load_requests(Cursor::new("R 10\nW 20 5\nR 30\n")).unwrap();
    assert_eq!(
        reqs,
        vec![
            MemoryRequest::read(0x10),
            MemoryRequest::write(0x20, 5),
            MemoryRequest::read(0x30),
        ]
    );
}

#[test]
fn load_requests_reports_first_bad_line() {
    let err = load_requests(Cursor::new("R 10\nR\nR zz\n")).unwrap_err();
    match err {
        SimError::Parse(e) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.kind, ParseErrorKind::TooFewTokens(1));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn blank_line_is_fatal() {
    let err = load_requests(Cursor::new("R 10\n\nR 20\n")).unwrap_err();
    assert!(matches!(err, SimError::Parse(ParseError { line: 2, .. })));
}

#[test]
fn load_trace_file_success() {
    let file = create_temp_trace("R 1000\nR 1000\n");
    let reqs = load_trace_file(file.path()).unwrap();
    assert_eq!(reqs.len(), 2);
    assert!(reqs.iter().all(|r| r.addr.val() == 0x1000));
}

#[test]
fn load_trace_file_empty() {
    let file = create_temp_trace("");
    assert!(load_trace_file(file.path()).unwrap().is_empty());
}

#[test]
fn load_trace_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    match load_trace_file(&path).unwrap_err() {
        SimError::Input { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn load_trace_file_parse_error_message() {
    let file = create_temp_trace("R 10\nbogus\n");
    let err = load_trace_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");
}
