//! Shared regular expressions for script scanning and marker handling.

use std::sync::LazyLock;

use regex::Regex;

/// A double-quoted literal. There is no escape handling, so the shortest
/// match wins and a literal quote cannot appear inside the string.
pub static QUOTED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// `old "..."` lines from Ren'Py translation blocks. The quoted value is the
/// pre-translation original and must not be extracted again.
pub static OLD_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bold\s*"[^"]*""#).unwrap());

/// Placeholder shapes shielded from translation: `[var]`, `{tag}`, named
/// format specifiers like `%(name)s`, and the short conversions `%s %d %i %f`.
pub static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|\{[^}]*\}|%\([^)]*\)[A-Za-z]|%[sdif]").unwrap());

/// Numeric marker substituted for a protected placeholder.
pub static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@@(\d+)@@").unwrap());
