use std::path::PathBuf;

use crate::diagnostics::Diagnostic;

/// What a completed operation did, for reporting.
#[derive(Debug)]
pub enum OpSummary {
    Extract(ExtractSummary),
    Import(ImportSummary),
    Protect(ProtectSummary),
    Restore(RestoreSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub lines_scanned: usize,
    pub records_written: usize,
    pub old_lines_skipped: usize,
    pub empty_literals_skipped: usize,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub records_parsed: usize,
    pub lines_rewritten: usize,
    pub replacements_applied: usize,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct ProtectSummary {
    pub placeholders_protected: usize,
    pub records_processed: usize,
    pub passthrough_lines: usize,
    pub output: PathBuf,
    pub mapping: PathBuf,
}

#[derive(Debug)]
pub struct RestoreSummary {
    pub markers_restored: usize,
    pub mapping_len: usize,
    pub output: PathBuf,
}

/// Result of one operation run: a summary plus non-fatal diagnostics.
#[derive(Debug)]
pub struct OpReport {
    pub summary: OpSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl OpReport {
    pub fn finish(summary: OpSummary, mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort();
        Self {
            summary,
            diagnostics,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }
}
