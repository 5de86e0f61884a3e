//! ledgerline-core: shared transaction types and date utilities for the
//! statement extraction pipeline.

pub mod dates;
pub mod transaction;

pub use dates::{parse_statement_date, to_iso};
pub use transaction::{Transaction, TransactionBatch};
