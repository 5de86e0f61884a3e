//! Text normalization: collapse extraction whitespace noise, or re-chunk
//! the document on monetary-amount boundaries.
//!
//! PDF text extraction produces unreliable line breaks: one transaction can
//! wrap across printed lines, and a line can carry a stray header fragment.
//! The line strategy trusts printed lines; the amount-anchored strategy
//! flattens the document and cuts it after every amount token instead.
//! A given segmentation tier applies exactly one strategy, never both.

use anyhow::Result;
use regex::Regex;

/// Monetary-amount shape: digits with optional thousands grouping
/// (space/comma/period groups of three), a two-decimal fraction, and an
/// optional hyphen on either side.
const AMOUNT_TOKEN: &str = r"-?(?:\d{1,3}(?:[ ,.]\d{3})+|\d+)[.,]\d{2}-?";

/// Collapse whitespace runs within each line to single spaces and drop
/// blank lines. Line breaks between surviving lines are preserved.
///
/// Idempotent: re-running on its own output is a no-op.
pub fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(collapse_spaces)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse ALL whitespace (line breaks included) to single spaces, then
/// insert a line break after every monetary-amount token. The result is
/// chunked on amount boundaries: each chunk ends with the amount that
/// closes it, so a transaction wrapped across printed lines lands in one
/// chunk.
///
/// Idempotent: re-running on its own output reproduces it exactly.
pub fn normalize_amount_anchored(text: &str) -> Result<String> {
    let anchor = Regex::new(AMOUNT_TOKEN)?;
    let flat = collapse_spaces(text);

    let mut out = String::with_capacity(flat.len() + 32);
    let mut last = 0;
    for m in anchor.find_iter(&flat) {
        out.push_str(&flat[last..m.end()]);
        out.push('\n');
        last = m.end();
    }
    out.push_str(&flat[last..]);
    Ok(out)
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
