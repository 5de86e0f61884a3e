//! Transient types passed between segmentation, matching, and resolution.

/// A provisional span of normalized text hypothesized to hold exactly one
/// transaction. Borrows from the normalized document text and never
/// outlives segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateUnit<'a> {
    pub text: &'a str,
}

impl<'a> CandidateUnit<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Raw numeric fields captured by a pattern strategy, before sign
/// resolution and numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountFields {
    /// Separate debit/credit columns; either may be absent.
    Columns {
        debit: Option<String>,
        credit: Option<String>,
    },
    /// One combined amount column; sign decided from hyphens and
    /// description keywords.
    Single(String),
}

/// Output of applying one pattern strategy to a candidate unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Leading date token as printed (`DD/MM/YYYY`, possibly unpadded)
    pub date: String,
    /// Text between the date token and the first numeric column, trimmed.
    /// Never empty; strategies reject units with nothing between date and
    /// amount.
    pub description: String,
    /// Second date token captured from line-wrapped entries
    pub wrapped_date: Option<String>,
    pub fields: AmountFields,
}
