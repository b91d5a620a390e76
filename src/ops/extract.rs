//! Quoted-string extraction from Ren'Py script files.

use std::fs;
use std::path::Path;

use crate::diagnostics::{Diagnostic, col_at};
use crate::error::OpError;
use crate::ops::{ExtractSummary, OpReport, OpSummary};
use crate::patterns::{OLD_STRING_REGEX, QUOTED_STRING_REGEX};
use crate::record::{Record, SEPARATOR};

/// Extract every translatable quoted literal from `script` into a
/// line-tagged file at `output`.
///
/// Lines presenting the previous value of a translation block
/// (`old "..."`) are skipped wholesale, even if they also carry other
/// quoted text. Empty and whitespace-only literals produce no record.
/// Within a line, records preserve left-to-right discovery order; across
/// lines, top-to-bottom file order.
pub fn extract(script: &Path, output: &Path) -> Result<OpReport, OpError> {
    let source = fs::read_to_string(script).map_err(|err| OpError::read(script, err))?;

    let mut records: Vec<Record> = Vec::new();
    let mut diagnostics = Vec::new();
    let mut lines_scanned = 0;
    let mut old_lines_skipped = 0;
    let mut empty_literals_skipped = 0;

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        lines_scanned += 1;

        if OLD_STRING_REGEX.is_match(line) {
            old_lines_skipped += 1;
            continue;
        }

        for captures in QUOTED_STRING_REGEX.captures_iter(line) {
            let literal = captures.get(1).unwrap();
            let text = literal.as_str();
            if text.trim().is_empty() {
                empty_literals_skipped += 1;
                continue;
            }
            if text.contains(SEPARATOR) {
                diagnostics.push(Diagnostic::separator_collision(
                    script,
                    line_number,
                    col_at(line, literal.start()),
                    line,
                ));
                continue;
            }
            records.push(Record::new(line_number, text));
        }
    }

    let mut out = String::new();
    for record in &records {
        out.push_str(&record.format());
        out.push('\n');
    }
    fs::write(output, out).map_err(|err| OpError::write(output, err))?;

    Ok(OpReport::finish(
        OpSummary::Extract(ExtractSummary {
            lines_scanned,
            records_written: records.len(),
            old_lines_skipped,
            empty_literals_skipped,
            output: output.to_path_buf(),
        }),
        diagnostics,
    ))
}
