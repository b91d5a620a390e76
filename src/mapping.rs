//! Placeholder mapping persistence.
//!
//! The mapping is the sole carrier of the information needed to reverse a
//! protection run, so it is written as soon as protection finishes and read
//! back verbatim, in original order, for restoration.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OpError;

/// Default file name for the placeholder mapping.
pub const DEFAULT_MAPPING_FILE: &str = "placeholders_map.json";

/// Ordered record of protected placeholder substrings.
///
/// Index `i` corresponds exactly to the marker `@@i@@` embedded in the
/// protected text. Append-only during protection, read-only during
/// restoration.
///
/// Serializes as a bare JSON array of strings, indented, with full Unicode
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderMap(Vec<String>);

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placeholder and return the marker index assigned to it.
    pub fn push(&mut self, placeholder: &str) -> usize {
        self.0.push(placeholder.to_string());
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<(), OpError> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|err| OpError::write(path, io::Error::other(err)))?;
        json.push('\n');
        fs::write(path, json).map_err(|err| OpError::write(path, err))
    }

    pub fn load(path: &Path) -> Result<Self, OpError> {
        let data = fs::read_to_string(path).map_err(|err| OpError::read(path, err))?;
        serde_json::from_str(&data).map_err(|source| OpError::MalformedMapping {
            path: path.to_path_buf(),
            source,
        })
    }
}
