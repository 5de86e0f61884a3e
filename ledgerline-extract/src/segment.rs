//! Candidate-unit segmentation: the line tier and the amount-anchored
//! block tier.

use crate::types::CandidateUnit;

/// Case-insensitive substrings marking non-transaction lines: statement
/// headers, column banners, page footers.
const NOISE_MARKERS: &[&str] = &["statement no", "transaction description", "page"];

fn is_noise(line: &str) -> bool {
    let lower = line.to_lowercase();
    NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Tier A: one normalized line = one candidate unit, noise lines dropped
/// before matching. Lazy; consumed once, in document order.
pub fn line_units(normalized: &str) -> impl Iterator<Item = CandidateUnit<'_>> {
    normalized
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_noise(line))
        .map(CandidateUnit::new)
}

/// Tier B: chunks of amount-anchored text, one unit per chunk. No noise
/// filtering here: a chunk may carry header debris glued in front of a
/// real transaction, and the matcher tolerates a non-matching prefix.
pub fn anchored_units(anchored: &str) -> impl Iterator<Item = CandidateUnit<'_>> {
    anchored
        .lines()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(CandidateUnit::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_units_drop_noise_lines() {
        let text = "29/04/2021 Acb Credit Yoco 5 421,42\n\
                    Page 3 of 10 Statement No 12345\n\
                    Transaction Description Debit Credit\n\
                    01/05/2021 Transfer 83.00";
        let units: Vec<_> = line_units(text).map(|u| u.text).collect();
        assert_eq!(
            units,
            vec![
                "29/04/2021 Acb Credit Yoco 5 421,42",
                "01/05/2021 Transfer 83.00"
            ]
        );
    }

    #[test]
    fn test_line_units_preserve_order_and_skip_blanks() {
        let units: Vec<_> = line_units("first\n\nsecond\n   \nthird").map(|u| u.text).collect();
        assert_eq!(units, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_anchored_units_keep_header_debris() {
        let text = "Statement No 12345 29/04/2021 Yoco 5 421,42\n 01/05/2021 Transfer 83.00\n";
        let units: Vec<_> = anchored_units(text).map(|u| u.text).collect();
        assert_eq!(
            units,
            vec![
                "Statement No 12345 29/04/2021 Yoco 5 421,42",
                "01/05/2021 Transfer 83.00"
            ]
        );
    }
}
