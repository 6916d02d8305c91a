//! Rupiah currency formatting.
//!
//! Amounts are whole Rupiah (`i64`) everywhere in GRAHA, so formatting
//! never rounds. The one float entry point, [`rupiah_from_f64`], pins
//! its rounding mode explicitly: half away from zero.

use graha_core::{Locale, MetricsError};

/// Format a whole-Rupiah amount with the locale's digit grouping,
/// e.g. `1000000` becomes "Rp 1.000.000".
pub fn format_rupiah(amount: i64, locale: &Locale) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let grouped = group_digits(amount.unsigned_abs(), locale.thousands_separator);
    format!("{}{} {}", sign, locale.currency_symbol, grouped)
}

/// Format an optional amount; `None` renders the locale's placeholder.
pub fn format_rupiah_opt(amount: Option<i64>, locale: &Locale) -> String {
    match amount {
        Some(amount) => format_rupiah(amount, locale),
        None => locale.missing_placeholder.clone(),
    }
}

/// Convert a float amount to whole Rupiah, rounding half away from zero.
pub fn rupiah_from_f64(value: f64) -> Result<i64, MetricsError> {
    if !value.is_finite() {
        return Err(MetricsError::AmountOutOfRange { value });
    }
    let rounded = value.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(MetricsError::AmountOutOfRange { value });
    }
    Ok(rounded as i64)
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> Locale {
        Locale::indonesian()
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_rupiah(0, &locale()), "Rp 0");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_rupiah(1_000, &locale()), "Rp 1.000");
        assert_eq!(format_rupiah(25_500_000, &locale()), "Rp 25.500.000");
        assert_eq!(format_rupiah(1_234_567_890, &locale()), "Rp 1.234.567.890");
    }

    #[test]
    fn test_format_no_grouping_under_thousand() {
        assert_eq!(format_rupiah(999, &locale()), "Rp 999");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_rupiah(-500_000, &locale()), "-Rp 500.000");
    }

    #[test]
    fn test_format_missing_amount() {
        assert_eq!(format_rupiah_opt(None, &locale()), "N/A");
        assert_eq!(format_rupiah_opt(Some(42), &locale()), "Rp 42");
    }

    #[test]
    fn test_locale_separator_is_respected() {
        let mut western = locale();
        western.thousands_separator = ',';
        assert_eq!(format_rupiah(1_000_000, &western), "Rp 1,000,000");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(rupiah_from_f64(2.5).unwrap(), 3);
        assert_eq!(rupiah_from_f64(-2.5).unwrap(), -3);
        assert_eq!(rupiah_from_f64(2.4).unwrap(), 2);
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(rupiah_from_f64(f64::NAN).is_err());
        assert!(rupiah_from_f64(f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Stripping the symbol and separators recovers the digits.
        #[test]
        fn prop_format_round_trips_digits(amount in 0i64..=i64::MAX) {
            let locale = Locale::indonesian();
            let formatted = format_rupiah(amount, &locale);
            let digits: String = formatted
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            prop_assert_eq!(digits, amount.to_string());
        }

        /// Formatting is stable under repeated calls.
        #[test]
        fn prop_format_is_deterministic(amount in any::<i64>()) {
            let locale = Locale::indonesian();
            prop_assert_eq!(
                format_rupiah(amount, &locale),
                format_rupiah(amount, &locale)
            );
        }
    }
}
