//! Delimited text: CSV and TSV.
//!
//! Lines are split first and scanned for quotes second, so a quoted field
//! holding a line break is split across two rows. The writer still quotes
//! such cells; reading them back is the one place the two directions
//! disagree.
//!
//! Only `\n` ends a line. A `\r` directly before it is dropped; any other
//! `\r` is cell text.

use std::borrow::Cow;
use tabula::{
    AdapterDecl, ConvertError, ConvertOptions, Format, LineBuilder, Matrix, Reader, Row, Writer,
};

pub const COMMA: char = ',';
pub const TAB: char = '\t';

const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Parse delimited text. Never fails: malformed quoting degrades to literal text.
///
/// Lines that are blank after trimming are dropped.
pub fn parse(text: &str, delimiter: char) -> Matrix {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, delimiter))
        .collect()
}

fn parse_line(line: &str, delimiter: char) -> Row {
    let mut cells = Row::new();
    let mut cell = String::new();
    let mut state = ScanState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            ScanState::Unquoted if c == delimiter => cells.push(std::mem::take(&mut cell)),
            ScanState::Unquoted if c == QUOTE => state = ScanState::Quoted,
            ScanState::Quoted if c == QUOTE => {
                if chars.next_if_eq(&QUOTE).is_some() {
                    cell.push(QUOTE);
                } else {
                    state = ScanState::Unquoted;
                }
            }
            _ => cell.push(c),
        }
    }

    if state == ScanState::Quoted {
        tracing::trace!(line, "unterminated quote at end of line");
    }
    cells.push(cell);
    cells
}

/// Serialize a matrix as delimited text, rows joined by `\n`.
pub fn serialize(matrix: &Matrix, delimiter: char) -> String {
    let separator = delimiter.to_string();
    let mut lines = LineBuilder::lines();
    for row in matrix.rows() {
        let mut cells = LineBuilder::new(separator.as_str());
        cells.extend(row.iter().map(|cell| escape_cell(cell, delimiter)));
        lines.push(cells.build());
    }
    lines.build()
}

/// Quote a cell if it holds the delimiter, a quote, or a line break.
pub fn escape_cell(cell: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = cell
        .chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\r' || c == '\n');
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

fn decl_for(format: Format, direction: &str) -> AdapterDecl {
    let kind = match format {
        Format::Tsv => "tab",
        _ => "comma",
    };
    let verb = if direction == "read" {
        "Parse"
    } else {
        "Serialize"
    };
    AdapterDecl::new(format!("{}.{}", format, direction), format).description(format!(
        "{} {}-separated values",
        verb, kind
    ))
}

fn delimiter_for(format: Format) -> char {
    match format {
        Format::Tsv => TAB,
        _ => COMMA,
    }
}

/// Reader for one delimited format.
pub struct DelimitedReader {
    decl: AdapterDecl,
    delimiter: char,
}

impl DelimitedReader {
    pub fn csv() -> Self {
        Self::new(Format::Csv)
    }

    pub fn tsv() -> Self {
        Self::new(Format::Tsv)
    }

    fn new(format: Format) -> Self {
        Self {
            decl: decl_for(format, "read"),
            delimiter: delimiter_for(format),
        }
    }
}

impl Reader for DelimitedReader {
    fn decl(&self) -> &AdapterDecl {
        &self.decl
    }

    fn read(&self, input: &str) -> Result<Matrix, ConvertError> {
        Ok(parse(input, self.delimiter))
    }
}

/// Writer for one delimited format.
pub struct DelimitedWriter {
    decl: AdapterDecl,
    delimiter: char,
}

impl DelimitedWriter {
    pub fn csv() -> Self {
        Self::new(Format::Csv)
    }

    pub fn tsv() -> Self {
        Self::new(Format::Tsv)
    }

    fn new(format: Format) -> Self {
        Self {
            decl: decl_for(format, "write"),
            delimiter: delimiter_for(format),
        }
    }
}

impl Writer for DelimitedWriter {
    fn decl(&self) -> &AdapterDecl {
        &self.decl
    }

    fn write(&self, matrix: &Matrix, _options: &ConvertOptions) -> Result<String, ConvertError> {
        Ok(serialize(matrix, self.delimiter))
    }
}
