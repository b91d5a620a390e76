//! Placeholder protection: substitute opaque numeric markers for
//! formatting tokens before the text goes through a translator.

use std::fs;
use std::path::Path;

use regex::Captures;

use crate::error::OpError;
use crate::mapping::PlaceholderMap;
use crate::ops::{OpReport, OpSummary, ProtectSummary};
use crate::patterns::PLACEHOLDER_REGEX;
use crate::record::{self, SEPARATOR};

/// Shield placeholders in the line-tagged file at `input`, writing the
/// protected text to `output` and the ordered mapping to `mapping_path`.
///
/// Marker indices count up across the whole run, never per line, so every
/// `@@n@@` in the protected file is unique. Lines without the separator
/// (blank or structural lines) pass through verbatim; lines with it keep
/// their prefix untouched, whatever it contains.
pub fn protect(input: &Path, output: &Path, mapping_path: &Path) -> Result<OpReport, OpError> {
    let data = fs::read_to_string(input).map_err(|err| OpError::read(input, err))?;

    let mut mapping = PlaceholderMap::new();
    let mut protected = String::with_capacity(data.len());
    let mut records_processed = 0;
    let mut passthrough_lines = 0;

    for line in data.lines() {
        match record::split(line) {
            None => {
                protected.push_str(line);
                passthrough_lines += 1;
            }
            Some((prefix, text)) => {
                let shielded = PLACEHOLDER_REGEX.replace_all(text, |caps: &Captures| {
                    let index = mapping.push(&caps[0]);
                    format!("@@{}@@", index)
                });
                protected.push_str(prefix);
                protected.push_str(SEPARATOR);
                protected.push_str(&shielded);
                records_processed += 1;
            }
        }
        protected.push('\n');
    }

    fs::write(output, &protected).map_err(|err| OpError::write(output, err))?;
    mapping.save(mapping_path)?;

    Ok(OpReport::finish(
        OpSummary::Protect(ProtectSummary {
            placeholders_protected: mapping.len(),
            records_processed,
            passthrough_lines,
            output: output.to_path_buf(),
            mapping: mapping_path.to_path_buf(),
        }),
        Vec::new(),
    ))
}
