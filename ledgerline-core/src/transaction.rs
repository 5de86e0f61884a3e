//! Normalized transaction records produced by statement extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One extracted statement entry.
///
/// Serde renders `date` as `YYYY-MM-DD`, which is the external contract for
/// CSV and JSON consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (statements carry day granularity only)
    pub date: NaiveDate,
    /// Whitespace-normalized description text
    pub description: String,
    /// Positive = money in, negative = money out
    pub amount: f64,
}

/// Ordered transactions for one source document. No deduplication; callers
/// concatenate batches across documents in document order.
pub type TransactionBatch = Vec<Transaction>;

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Returns true if this is money in (positive amount)
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if this is money out (negative amount)
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_sign_helpers() {
        let date = NaiveDate::from_ymd_opt(2021, 4, 29).unwrap();
        let credit = Transaction::new(date, "Acb Credit Yoco", 5421.42);
        assert!(credit.is_credit());
        assert!(!credit.is_debit());

        let debit = Transaction::new(date, "Admin Charge", -83.0);
        assert!(debit.is_debit());
        assert_eq!(debit.abs_amount(), 83.0);
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let date = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        let txn = Transaction::new(date, "Transfer", 120.5);
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":\"2021-05-01\""), "got {json}");
    }
}
