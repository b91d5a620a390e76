//! Positional re-insertion of translated strings into the original script.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use regex::Captures;

use crate::diagnostics::{Diagnostic, col_at};
use crate::error::OpError;
use crate::ops::{ImportSummary, OpReport, OpSummary};
use crate::patterns::QUOTED_STRING_REGEX;
use crate::record;

/// Replacements per original line number, in translation-file order.
type TranslationMap = BTreeMap<usize, Vec<String>>;

fn parse_translations(
    path: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(TranslationMap, usize), OpError> {
    let data = fs::read_to_string(path).map_err(|err| OpError::read(path, err))?;

    let mut translations = TranslationMap::new();
    let mut parsed = 0;
    for (index, raw) in data.lines().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match record::parse(raw) {
            Ok(rec) => {
                translations.entry(rec.line).or_default().push(rec.text);
                parsed += 1;
            }
            Err(reason) => {
                diagnostics.push(Diagnostic::malformed_record(path, index + 1, reason, raw));
            }
        }
    }
    Ok((translations, parsed))
}

/// Rewrite quoted literals in `script` from the records in `translated`,
/// writing the result to `output`. The original file is never touched.
///
/// Replacements are consumed in left-to-right order of the quoted literals
/// recomputed on each line; the order and count must match what extraction
/// recorded, or the line comes out misaligned. When a line's replacement
/// list runs out, remaining literals are left verbatim. Empty literals DO
/// consume a replacement slot here even though extraction never records
/// them; such lines get an `empty-literal` warning.
pub fn import(script: &Path, translated: &Path, output: &Path) -> Result<OpReport, OpError> {
    let mut diagnostics = Vec::new();
    let (translations, records_parsed) = parse_translations(translated, &mut diagnostics)?;

    if translations.is_empty() {
        return Err(OpError::EmptyTranslation {
            path: translated.to_path_buf(),
        });
    }

    let source = fs::read_to_string(script).map_err(|err| OpError::read(script, err))?;
    let ends_with_newline = source.ends_with('\n');
    let mut lines: Vec<String> = source.lines().map(String::from).collect();

    let mut lines_rewritten = 0;
    let mut replacements_applied = 0;

    for (&line_number, replacements) in &translations {
        let Some(index) = line_number.checked_sub(1) else {
            diagnostics.push(Diagnostic::out_of_range(script, line_number, lines.len()));
            continue;
        };
        if index >= lines.len() {
            diagnostics.push(Diagnostic::out_of_range(script, line_number, lines.len()));
            continue;
        }

        let line = &lines[index];
        if let Some(empty) = QUOTED_STRING_REGEX
            .captures_iter(line)
            .find(|c| c.get(1).unwrap().as_str().is_empty())
        {
            diagnostics.push(Diagnostic::empty_literal(
                script,
                line_number,
                col_at(line, empty.get(0).unwrap().start()),
                line,
            ));
        }

        let mut pending = replacements.iter();
        let mut consumed = 0;
        let rewritten = QUOTED_STRING_REGEX
            .replace_all(line, |caps: &Captures| match pending.next() {
                Some(text) => {
                    consumed += 1;
                    format!("\"{}\"", text)
                }
                None => caps[0].to_string(),
            })
            .into_owned();

        if consumed > 0 {
            lines_rewritten += 1;
            replacements_applied += consumed;
        }
        lines[index] = rewritten;
    }

    let mut out = lines.join("\n");
    if ends_with_newline {
        out.push('\n');
    }
    fs::write(output, out).map_err(|err| OpError::write(output, err))?;

    Ok(OpReport::finish(
        OpSummary::Import(ImportSummary {
            records_parsed,
            lines_rewritten,
            replacements_applied,
            output: output.to_path_buf(),
        }),
        diagnostics,
    ))
}
