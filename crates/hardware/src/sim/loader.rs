//! Trace Loader.
//!
//! Turns an input trace into the ordered request list a run consumes. It performs:
//! 1. **Line parsing:** `<R|W> <hex address> [<hex data>]` into a [`MemoryRequest`].
//! 2. **Whole-trace loading:** From any buffered reader or from a file on disk.
//!
//! Loading is all-or-nothing: the first malformed line aborts with a
//! [`ParseError`] and no requests are returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::common::{AccessType, MemoryRequest, ParseError, ParseErrorKind, SimError, VirtAddr};

/// Parses a hex number with an optional `0x`/`0X` prefix.
fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

/// Parses one trace line.
///
/// The first token selects the access type: `W` is a write, anything else a
/// read. The second token is the hex address. The optional third token is
/// the hex data word; when it is missing or not valid hex the data is 0.
///
/// # Arguments
///
/// * `line` - The raw text of the line.
/// * `line_no` - 1-based line number, used in the error.
///
/// # Errors
///
/// [`ParseErrorKind::TooFewTokens`] if the line has fewer than two tokens,
/// [`ParseErrorKind::BadAddress`] if the address is not a 32-bit hex number.
pub fn parse_line(line: &str, line_no: usize) -> Result<MemoryRequest, ParseError> {
    let err = |kind| ParseError {
        line: line_no,
        kind,
    };
    let mut tokens = line.split_whitespace();

    let (Some(kind), Some(addr)) = (tokens.next(), tokens.next()) else {
        return Err(err(ParseErrorKind::TooFewTokens(
            line.split_whitespace().count(),
        )));
    };

    let addr = parse_hex(addr).ok_or_else(|| err(ParseErrorKind::BadAddress(addr.to_owned())))?;
    let data = tokens.next().and_then(parse_hex).unwrap_or(0);
    let access = if kind == "W" {
        AccessType::Write
    } else {
        AccessType::Read
    };

    Ok(MemoryRequest {
        addr: VirtAddr(addr),
        data,
        access,
    })
}

/// Reads every line of `reader` into a request list.
///
/// # Errors
///
/// Returns [`SimError::Parse`] for the first malformed line, or
/// [`SimError::Input`] (with an empty path) if reading fails.
pub fn load_requests<R: BufRead>(reader: R) -> Result<Vec<MemoryRequest>, SimError> {
    let mut requests = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SimError::Input {
            path: PathBuf::new(),
            source,
        })?;
        requests.push(parse_line(&line, i + 1)?);
    }
    Ok(requests)
}

/// Loads a trace file from disk.
///
/// # Errors
///
/// Returns [`SimError::Input`] if the file cannot be opened or read, and
/// [`SimError::Parse`] for the first malformed line.
pub fn load_trace_file(path: impl AsRef<Path>) -> Result<Vec<MemoryRequest>, SimError> {
    let path = path.as_ref();
    let input_err = |source| SimError::Input {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(input_err)?;

    let requests = load_requests(BufReader::new(file)).map_err(|e| match e {
        SimError::Input { source, .. } => input_err(source),
        other => other,
    })?;

    tracing::debug!(path = %path.display(), count = requests.len(), "loaded trace");
    Ok(requests)
}
