//! Pattern strategies for recovering date, description, and raw amount
//! columns from a candidate unit.
//!
//! Strategies are pure functions `CandidateUnit -> Option<MatchResult>`,
//! held in a fixed-precedence chain: the split-column pattern first, the
//! single-column pattern as fallback. Both use search semantics anchored at
//! the end of the unit, so header debris glued in front of a transaction is
//! tolerated; the match itself must start at a date token and run to the
//! end of the unit.

use anyhow::Result;
use regex::Regex;

use crate::types::{AmountFields, CandidateUnit, MatchResult};

/// A single pattern strategy, tried in chain order until one succeeds.
pub trait MatchStrategy {
    fn name(&self) -> &'static str;
    fn try_match(&self, unit: CandidateUnit<'_>) -> Option<MatchResult>;
}

/// `DATE DESCRIPTION [DATE2] [DEBIT] CREDIT`.
///
/// Columns use the vendor's comma-decimal money format: optional space or
/// period thousands groups, a `,NN` fraction, and an optional hyphen on
/// debit figures. The second date shows up when a wrapped entry repeats its
/// posting date mid-line. Period-decimal amounts like `83.00` do not match
/// here and fall through to [`SingleColumnPattern`].
pub struct SplitColumnPattern {
    re: Regex,
}

impl SplitColumnPattern {
    pub fn new() -> Result<Self> {
        let re = Regex::new(concat!(
            r"(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?:(?P<date2>\d{1,2}/\d{1,2}/\d{4})\s+)?",
            r"(?:(?P<debit>-?(?:\d{1,3}(?:[ .]\d{3})+|\d+),\d{2}-?)\s+)?",
            r"(?P<credit>-?(?:\d{1,3}(?:[ .]\d{3})+|\d+),\d{2}-?)\s*$"
        ))?;
        Ok(Self { re })
    }
}

impl MatchStrategy for SplitColumnPattern {
    fn name(&self) -> &'static str {
        "split-column"
    }

    fn try_match(&self, unit: CandidateUnit<'_>) -> Option<MatchResult> {
        let caps = self.re.captures(unit.text)?;
        let description = caps["desc"].trim().to_string();
        if description.is_empty() {
            return None;
        }

        let debit = caps.name("debit").map(|m| m.as_str().to_string());
        let credit = caps.name("credit").map(|m| m.as_str().to_string());
        // The vendor prints a trailing hyphen on debit-column figures. When
        // only the mandatory trailing column matched and it carries a
        // hyphen, it is the debit column, not a credit.
        let (debit, credit) = match (debit, credit) {
            (None, Some(c)) if c.contains('-') => (Some(c), None),
            other => other,
        };

        Some(MatchResult {
            date: caps["date"].to_string(),
            description,
            wrapped_date: caps.name("date2").map(|m| m.as_str().to_string()),
            fields: AmountFields::Columns { debit, credit },
        })
    }
}

/// `DATE DESCRIPTION AMOUNT` with one trailing numeric token composed of
/// digits, spaces, commas, periods, and hyphens.
pub struct SingleColumnPattern {
    re: Regex,
}

impl SingleColumnPattern {
    pub fn new() -> Result<Self> {
        let re = Regex::new(concat!(
            r"(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>-?\d[\d ,.-]*)\s*$"
        ))?;
        Ok(Self { re })
    }
}

impl MatchStrategy for SingleColumnPattern {
    fn name(&self) -> &'static str {
        "single-column"
    }

    fn try_match(&self, unit: CandidateUnit<'_>) -> Option<MatchResult> {
        let caps = self.re.captures(unit.text)?;
        let description = caps["desc"].trim().to_string();
        if description.is_empty() {
            return None;
        }

        Some(MatchResult {
            date: caps["date"].to_string(),
            description,
            wrapped_date: None,
            fields: AmountFields::Single(caps["amount"].trim().to_string()),
        })
    }
}

/// Ordered matcher strategies; the first success per unit wins.
pub struct PatternChain {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl PatternChain {
    /// Split-column first, single-column fallback.
    pub fn new() -> Result<Self> {
        Ok(Self {
            strategies: vec![
                Box::new(SplitColumnPattern::new()?),
                Box::new(SingleColumnPattern::new()?),
            ],
        })
    }

    pub fn try_match(&self, unit: CandidateUnit<'_>) -> Option<MatchResult> {
        for strategy in &self.strategies {
            if let Some(result) = strategy.try_match(unit) {
                tracing::trace!(strategy = strategy.name(), "unit matched");
                return Some(result);
            }
        }
        None
    }
}
