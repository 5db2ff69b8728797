// src/latex/escape.rs
//! Conversion of free user text into LaTeX-safe text.

/// Escape arbitrary text for direct inclusion in LaTeX source.
///
/// Whitespace runs collapse to single spaces and the result is trimmed.
/// En and em dashes become `--`, the ellipsis character becomes `\ldots{}`,
/// and every reserved character maps to the macro that prints it literally.
/// Returns an empty string when nothing but whitespace was supplied.
pub fn escape_latex(text: &str) -> String {
    let normalized = collapse_whitespace(text);
    let mut out = String::with_capacity(normalized.len() + normalized.len() / 8);

    // Single pass: a replacement is never revisited, so the backslash
    // introduced by one mapping cannot be escaped again by another.
    for c in normalized.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '$' => out.push_str(r"\$"),
            '%' => out.push_str(r"\%"),
            '&' => out.push_str(r"\&"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '\u{2013}' | '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str(r"\ldots{}"),
            other => out.push(other),
        }
    }

    out
}

/// Escape an optional value, mapping `None` to the empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape_latex).unwrap_or_default()
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
