//! End-to-end extraction: tiered segmentation, the pattern chain, amount
//! resolution, and record assembly.

use anyhow::Result;
use ledgerline_core::{Transaction, TransactionBatch, parse_statement_date};

use crate::amount::resolve_amount;
use crate::matcher::PatternChain;
use crate::normalize::{normalize_amount_anchored, normalize_lines};
use crate::segment::{anchored_units, line_units};
use crate::types::{CandidateUnit, MatchResult};

/// Statement extraction engine. Stateless across documents; compile once
/// and reuse, including from parallel callers, since extraction is a pure
/// function of the input text.
pub struct StatementExtractor {
    chain: PatternChain,
}

impl StatementExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            chain: PatternChain::new()?,
        })
    }

    /// Extract all transactions from one document's extracted text, in
    /// document order.
    ///
    /// The line tier runs first. When it recovers nothing (statements
    /// whose entries wrap across printed lines), the amount-anchored tier
    /// re-chunks the document and retries. An empty batch means no pattern
    /// matched anywhere; that outcome is data for the caller, not an error.
    pub fn extract(&self, text: &str) -> Result<TransactionBatch> {
        let lined = normalize_lines(text);
        let batch = self.run_units(line_units(&lined));
        if !batch.is_empty() {
            return Ok(batch);
        }

        tracing::debug!("line tier found no transactions, retrying amount-anchored");
        let anchored = normalize_amount_anchored(text)?;
        Ok(self.run_units(anchored_units(&anchored)))
    }

    fn run_units<'a, I>(&self, units: I) -> TransactionBatch
    where
        I: Iterator<Item = CandidateUnit<'a>>,
    {
        units
            .filter_map(|unit| self.chain.try_match(unit))
            .filter_map(build_transaction)
            .collect()
    }
}

/// Assemble a validated transaction, or drop the unit. Per-unit failure is
/// isolated; the batch never aborts on one bad unit.
fn build_transaction(matched: MatchResult) -> Option<Transaction> {
    let Some(date) = parse_statement_date(&matched.date) else {
        tracing::debug!(date = %matched.date, "dropping unit: date fails calendar parse");
        return None;
    };
    let Some(amount) = resolve_amount(&matched.fields, &matched.description) else {
        tracing::debug!(
            description = %matched.description,
            "dropping unit: no parseable amount field"
        );
        return None;
    };
    Some(Transaction {
        date,
        description: matched.description,
        amount,
    })
}

/// Convenience entry point for one-shot callers.
pub fn extract_transactions(text: &str) -> Result<TransactionBatch> {
    StatementExtractor::new()?.extract(text)
}
