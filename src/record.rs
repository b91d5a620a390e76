//! Line-tagged record parsing and formatting.
//!
//! Every intermediate file exchanged between the operations carries one
//! record per line: a 1-based source line number, the fixed `|||` separator,
//! and the record text. The text portion is everything after the *first*
//! separator, so later `|||` sequences stay inside the text.

use std::fmt;

/// Fixed separator between the line number and the text of a record.
pub const SEPARATOR: &str = "|||";

/// A (source line number, text) pair as serialized in intermediate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the originating script file.
    pub line: usize,
    pub text: String,
}

impl Record {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }

    /// Serialize as `N|||text`, without a trailing newline.
    pub fn format(&self) -> String {
        format!("{}{}{}", self.line, SEPARATOR, self.text)
    }
}

/// Why a line of an intermediate file could not be parsed as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    MissingSeparator,
    InvalidLineNumber,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingSeparator => write!(f, "missing `{}` separator", SEPARATOR),
            RecordError::InvalidLineNumber => write!(f, "line number is not an integer"),
        }
    }
}

/// Split a line at the first separator without validating the prefix.
///
/// Used by `protect`, which preserves whatever precedes the separator
/// verbatim and only rewrites the text portion.
pub fn split(line: &str) -> Option<(&str, &str)> {
    line.split_once(SEPARATOR)
}

/// Parse one line of an intermediate file into a record.
pub fn parse(line: &str) -> Result<Record, RecordError> {
    let (number, text) = split(line).ok_or(RecordError::MissingSeparator)?;
    let line_number = number
        .trim()
        .parse::<usize>()
        .map_err(|_| RecordError::InvalidLineNumber)?;
    Ok(Record::new(line_number, text))
}
