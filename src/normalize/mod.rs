// src/normalize/mod.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Normalization rules (Lazy Static) ---
// Thousands-separator commas and zero-width spaces.
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\u{200B}]").expect("Failed to compile SEPARATOR_RE"));

// Literal backslash escapes (`\n`, `\r`, `\t` as two-character sequences)
// left behind by upstream text flattening.
static ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\n|\\r|\\t").expect("Failed to compile ESCAPE_RE"));

// Runs of plain space characters.
static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +").expect("Failed to compile SPACE_RUN_RE"));

// Parenthesis, bracket and hyphen noise around figures.
static BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[()\[\]\-]").expect("Failed to compile BRACKET_RE"));

/// Unit-suffix vocabulary, applied in order after the character-level rules.
///
/// Each token is rewritten to a textual multiplication marker; resolving the
/// marker to a numeric value is an explicit downstream step, not done here.
/// New unit vocabularies are added as rows, not code.
pub const UNIT_RULES: &[(&str, &str)] = &[
    ("백만원", "*1_000_000"), // million won
    ("천원", "*1_000"),       // thousand won
];

/// Normalizes financial text into a machine-consumable form.
///
/// Order-sensitive pipeline: strip separators and zero-width spaces, collapse
/// literal escape sequences to spaces, collapse space runs, strip bracket and
/// hyphen noise, rewrite unit tokens, trim. Pure and total: any input,
/// including empty, yields a string.
pub fn normalize(text: &str) -> String {
    let text = SEPARATOR_RE.replace_all(text, "");
    let text = ESCAPE_RE.replace_all(&text, " ");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let mut text = BRACKET_RE.replace_all(&text, "").into_owned();
    for (token, marker) in UNIT_RULES {
        text = text.replace(token, marker);
    }
    text.trim().to_string()
}
