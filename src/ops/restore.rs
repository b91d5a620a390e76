//! Marker restoration: put original placeholders back after translation.

use std::fs;
use std::path::Path;

use regex::Captures;

use crate::error::OpError;
use crate::mapping::PlaceholderMap;
use crate::ops::{OpReport, OpSummary, RestoreSummary};
use crate::patterns::MARKER_REGEX;

/// Replace every in-range `@@n@@` marker in `translated` with the mapping
/// entry for `n`, writing the result to `output`.
///
/// The mapping is loaded before the translated file is touched, so a
/// missing or malformed mapping aborts before any output exists. Markers
/// whose index is out of range (including indices too large to parse) are
/// left in the text unchanged.
pub fn restore(translated: &Path, output: &Path, mapping_path: &Path) -> Result<OpReport, OpError> {
    let mapping = PlaceholderMap::load(mapping_path)?;
    let data = fs::read_to_string(translated).map_err(|err| OpError::read(translated, err))?;

    let mut markers_restored = 0;
    let restored = MARKER_REGEX.replace_all(&data, |caps: &Captures| {
        let index = caps[1].parse::<usize>().ok();
        match index.and_then(|i| mapping.get(i)) {
            Some(original) => {
                markers_restored += 1;
                original.to_string()
            }
            None => caps[0].to_string(),
        }
    });

    fs::write(output, restored.as_bytes()).map_err(|err| OpError::write(output, err))?;

    Ok(OpReport::finish(
        OpSummary::Restore(RestoreSummary {
            markers_restored,
            mapping_len: mapping.len(),
            output: output.to_path_buf(),
        }),
        Vec::new(),
    ))
}
