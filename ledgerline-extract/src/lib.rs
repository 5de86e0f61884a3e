//! ledgerline-extract: statement-text extraction engine.
//!
//! Pipeline: normalize → segment → match → resolve amount → build records.
//! Pure and synchronous; one invocation per document, no state shared
//! between documents.

pub mod amount;
pub mod extractor;
pub mod matcher;
pub mod normalize;
pub mod segment;
pub mod types;

pub use extractor::{StatementExtractor, extract_transactions};
pub use types::{AmountFields, CandidateUnit, MatchResult};
