//! Series loader: one numeric column out of CSV or plain text.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::series::Series;

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseSeriesError {
    /// 1-based; 0 when the failure is not tied to a line
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    MissingColumn { column: usize, found: usize },
    BadFloat(String),
    NonFinite(String),
    NoData,
}

impl Display for ParseSeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::MissingColumn { column, found } => write!(
                f,
                "line {}: column {} requested but only {} present",
                self.line, column, found
            ),
            ParseErrorKind::BadFloat(text) => {
                write!(f, "line {}: invalid value '{}'", self.line, text)
            }
            ParseErrorKind::NonFinite(text) => {
                write!(f, "line {}: value '{}' is not finite", self.line, text)
            }
            ParseErrorKind::NoData => f.write_str("no numeric data found"),
        }
    }
}
impl Error for ParseSeriesError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Replace U+2212 MINUS SIGN (`E2 88 92`) with ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with(&[0xE2, 0x88, 0x92]) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseSeriesError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseSeriesError {
        line,
        kind: ParseErrorKind::BadFloat(text()),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseSeriesError {
            line,
            kind: ParseErrorKind::NonFinite(text()),
        })
    }
}

/// Read column `column` (0-based) of every data line.
///
/// Blank lines and lines starting with `#` are skipped, as is a header: a
/// first data line whose selected field contains no digits.  A first field
/// with digits that still fails to parse is an error, not a header.
pub fn read_series<R: Read>(src: R, column: usize) -> Result<Series, ParseSeriesError> {
    let mut rdr = BufReader::new(src);
    let mut buf = Vec::<u8>::with_capacity(128);
    let mut values = Vec::<f64>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseSeriesError {
            line: line_no + 1,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        let fields: Vec<&[u8]> = line.split(|&b| b == b',').map(trim).collect();
        let Some(field) = fields.get(column) else {
            return Err(ParseSeriesError {
                line: line_no,
                kind: ParseErrorKind::MissingColumn {
                    column,
                    found: fields.len(),
                },
            });
        };

        if !saw_first {
            saw_first = true;
            let has_digit = field.iter().any(u8::is_ascii_digit);
            if !has_digit && lexical_core::parse::<f64>(field).is_err() {
                log::info!(
                    "skipping header line {line_no}: {}",
                    String::from_utf8_lossy(line)
                );
                continue;
            }
        }

        values.push(parse_f64(field, line_no)?);
    }

    log::debug!("loaded {} samples from {line_no} lines", values.len());
    // parse_f64 already rejected non-finite values, so only emptiness can fail
    Series::new(values).map_err(|_| ParseSeriesError {
        line: 0,
        kind: ParseErrorKind::NoData,
    })
}

/// `-` reads stdin.
pub fn read_series_from_path(path: &str, column: usize) -> Result<Series, ParseSeriesError> {
    if path == "-" {
        read_series(std::io::stdin(), column)
    } else {
        use std::fs::File;
        read_series(
            File::open(path).map_err(|e| ParseSeriesError {
                line: 0,
                kind: ParseErrorKind::Io(e),
            })?,
            column,
        )
    }
}
