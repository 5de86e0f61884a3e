//! Numeric parsing and sign resolution for matched amount fields.
//!
//! Sign evidence is strictly local to one unit: its own columns, hyphens,
//! and description text. Nothing document-wide feeds a per-unit decision.

use crate::types::AmountFields;

/// Case-sensitive description keywords that force a single-column amount
/// negative.
const DEBIT_KEYWORDS: &[&str] = &["Debit Amount", "Charge"];

/// Parse a raw statement amount into an unsigned decimal value.
///
/// Embedded spaces and hyphens are stripped first. The last `,` or `.`
/// followed by one or two digits is the decimal separator; every other
/// separator is thousands grouping and is removed. Non-numeric residue
/// returns None; the unit is dropped rather than raising.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.is_empty()
        || !compact.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return None;
    }

    let canonical = match compact.rfind([',', '.']) {
        Some(idx) if is_decimal_tail(&compact[idx + 1..]) => {
            let mut digits: String = compact[..idx]
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            digits.push('.');
            digits.push_str(&compact[idx + 1..]);
            digits
        }
        _ => compact.chars().filter(|c| c.is_ascii_digit()).collect(),
    };

    canonical.parse::<f64>().ok()
}

/// One or two digits after the final separator mark it as the decimal
/// point; three (`12,345`) mark thousands grouping.
fn is_decimal_tail(tail: &str) -> bool {
    (1..=2).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve matched numeric fields into one signed amount, or reject the
/// unit when no field parses.
pub fn resolve_amount(fields: &AmountFields, description: &str) -> Option<f64> {
    match fields {
        AmountFields::Columns { debit, credit } => {
            if let Some(credit) = non_blank(credit.as_deref()) {
                parse_decimal(credit)
            } else if let Some(debit) = non_blank(debit.as_deref()) {
                parse_decimal(debit).map(|value| -value.abs())
            } else {
                None
            }
        }
        AmountFields::Single(raw) => {
            let value = parse_decimal(raw)?;
            let debit_marked = raw.contains('-')
                || DEBIT_KEYWORDS.iter().any(|keyword| description.contains(keyword));
            Some(if debit_marked { -value.abs() } else { value })
        }
    }
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(debit: Option<&str>, credit: Option<&str>) -> AmountFields {
        AmountFields::Columns {
            debit: debit.map(str::to_string),
            credit: credit.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_space_grouped_comma_decimal() {
        assert_eq!(parse_decimal("1 234,56"), Some(1234.56));
        assert_eq!(parse_decimal("5 421,42"), Some(5421.42));
    }

    #[test]
    fn test_parse_comma_grouped_period_decimal() {
        assert_eq!(parse_decimal("1,234.56"), Some(1234.56));
        assert_eq!(parse_decimal("83.00"), Some(83.0));
    }

    #[test]
    fn test_parse_grouping_only_is_integer() {
        assert_eq!(parse_decimal("12,345"), Some(12345.0));
    }

    #[test]
    fn test_parse_strips_hyphens_to_magnitude() {
        assert_eq!(parse_decimal("1 200,00-"), Some(1200.0));
        assert_eq!(parse_decimal("-45.50"), Some(45.5));
    }

    #[test]
    fn test_parse_rejects_residue() {
        assert!(parse_decimal("").is_none());
        assert!(parse_decimal("   ").is_none());
        assert!(parse_decimal("12a4,00").is_none());
        assert!(parse_decimal(",").is_none());
    }

    #[test]
    fn test_credit_column_is_positive() {
        let amount = resolve_amount(&columns(None, Some("5 421,42")), "Acb Credit Yoco");
        assert_eq!(amount, Some(5421.42));
    }

    #[test]
    fn test_debit_column_is_negative() {
        let amount = resolve_amount(&columns(Some("1 200,00-"), None), "Ibank Payment To");
        assert_eq!(amount, Some(-1200.0));
    }

    #[test]
    fn test_credit_takes_precedence_over_debit() {
        let amount = resolve_amount(&columns(Some("100,00"), Some("200,00")), "Reversal");
        assert_eq!(amount, Some(200.0));
    }

    #[test]
    fn test_blank_credit_falls_through_to_debit() {
        let amount = resolve_amount(&columns(Some("100,00"), Some("  ")), "Fee");
        assert_eq!(amount, Some(-100.0));
    }

    #[test]
    fn test_empty_columns_reject() {
        assert_eq!(resolve_amount(&columns(None, None), "anything"), None);
    }

    #[test]
    fn test_single_unmarked_is_positive() {
        let amount = resolve_amount(&AmountFields::Single("120.50".into()), "Deposit");
        assert_eq!(amount, Some(120.5));
    }

    #[test]
    fn test_single_hyphen_forces_negative() {
        let amount = resolve_amount(&AmountFields::Single("-45.50".into()), "Card Purchase");
        assert_eq!(amount, Some(-45.5));
    }

    #[test]
    fn test_single_debit_keyword_forces_negative() {
        let amount = resolve_amount(
            &AmountFields::Single("83.00".into()),
            "Admin Charge Headoffice See Charge Statement Detail",
        );
        assert_eq!(amount, Some(-83.0));

        let amount = resolve_amount(&AmountFields::Single("19.99".into()), "Debit Amount Banking App");
        assert_eq!(amount, Some(-19.99));
    }

    #[test]
    fn test_debit_keyword_is_case_sensitive() {
        let amount = resolve_amount(&AmountFields::Single("83.00".into()), "admin charge headoffice");
        assert_eq!(amount, Some(83.0));
    }

    #[test]
    fn test_single_unparsable_rejects() {
        assert_eq!(resolve_amount(&AmountFields::Single("..".into()), "Fee"), None);
    }
}
