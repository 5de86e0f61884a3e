//! Statement date parsing: day-first `DD/MM/YYYY`, calendar-validated.

use chrono::NaiveDate;

/// Parse a statement date like `29/04/2021` or `1/5/2021`.
///
/// The first field is always the day. Calendar-invalid dates (day > month
/// length, month > 12) return None so the caller can drop the unit.
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

/// Format a date as zero-padded ISO `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
