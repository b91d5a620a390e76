//! Report formatting and printing utilities.
//!
//! Diagnostics are displayed in cargo-style format with source context;
//! summaries get a one-line verdict per operation. Separate from the core
//! operations so renloc can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::diagnostics::Diagnostic;
use crate::ops::{
    ExtractSummary, ImportSummary, OpReport, OpSummary, ProtectSummary, RestoreSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print an operation report to stdout.
pub fn print(report: &OpReport, verbose: bool) {
    print_to(report, verbose, &mut io::stdout().lock());
}

/// Print an operation report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(report: &OpReport, verbose: bool, writer: &mut W) {
    if !report.diagnostics.is_empty() {
        let max_line_width = calculate_max_line_width(&report.diagnostics);
        for diagnostic in &report.diagnostics {
            print_diagnostic(diagnostic, writer, max_line_width);
        }
        let count = report.warning_count();
        let _ = writeln!(
            writer,
            "{} {} {}",
            FAILURE_MARK.red(),
            count,
            if count == 1 { "warning" } else { "warnings" }.yellow()
        );
    }

    print_summary(&report.summary, verbose, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "warning".bold().yellow(),
        diagnostic.message,
        diagnostic.rule.to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        diagnostic.file_path,
        diagnostic.line
    );

    if let Some(source_line) = &diagnostic.source_line {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            diagnostic.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        if diagnostic.col > 0 {
            let prefix: String = source_line.chars().take(diagnostic.col - 1).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                "^".yellow(),
                width = max_line_width,
                padding = caret_padding
            );
        }
    }

    let _ = writeln!(writer); // Empty line between diagnostics
}

fn print_summary<W: Write>(summary: &OpSummary, verbose: bool, writer: &mut W) {
    match summary {
        OpSummary::Extract(summary) => print_extract(summary, verbose, writer),
        OpSummary::Import(summary) => print_import(summary, verbose, writer),
        OpSummary::Protect(summary) => print_protect(summary, writer),
        OpSummary::Restore(summary) => print_restore(summary, writer),
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {} to {}",
            summary.records_written,
            if summary.records_written == 1 {
                "string"
            } else {
                "strings"
            },
            summary.lines_scanned,
            if summary.lines_scanned == 1 {
                "line"
            } else {
                "lines"
            },
            summary.output.display()
        )
        .green()
    );
    if verbose && (summary.old_lines_skipped > 0 || summary.empty_literals_skipped > 0) {
        let _ = writeln!(
            writer,
            "  - skipped: {} old-string line(s), {} empty literal(s)",
            summary.old_lines_skipped, summary.empty_literals_skipped
        );
    }
}

fn print_import<W: Write>(summary: &ImportSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Applied {} replacement(s) on {} line(s); wrote {}",
            summary.replacements_applied,
            summary.lines_rewritten,
            summary.output.display()
        )
        .green()
    );
    if verbose {
        let _ = writeln!(writer, "  - parsed: {} record(s)", summary.records_parsed);
    }
}

fn print_protect<W: Write>(summary: &ProtectSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Protected {} placeholder(s) in {} record(s)",
            summary.placeholders_protected, summary.records_processed
        )
        .green()
    );
    let _ = writeln!(
        writer,
        "  - file to translate: {}",
        summary.output.display()
    );
    let _ = writeln!(writer, "  - mapping: {}", summary.mapping.display());
}

fn print_restore<W: Write>(summary: &RestoreSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Restored {} marker(s) from a mapping of {}; wrote {}",
            summary.markers_restored,
            summary.mapping_len,
            summary.output.display()
        )
        .green()
    );
}

fn calculate_max_line_width(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================
