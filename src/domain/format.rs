//! Currency formatting and conversion display.
//!
//! Formatting follows en-US conventions: symbol prefix, comma thousands
//! separators, and the currency's minor units (`$1,000.00`, `¥1,235`).

use super::currency::Currency;

// ============================================================================
// Conversion
// ============================================================================

/// Converts a source amount into the destination currency.
#[must_use]
pub fn convert(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Converted amount rounded to two decimals for display.
///
/// Rounding is presentation only; the unrounded value is what callers store.
#[must_use]
pub fn format_converted(amount: f64, rate: f64) -> String {
    format!("{:.2}", convert(amount, rate))
}

// ============================================================================
// Currency Formatting
// ============================================================================

/// Renders an amount as a localized currency string.
///
/// Non-finite amounts are rendered verbatim after the symbol rather than
/// failing, so the view never has to handle a formatting error.
#[must_use]
pub fn format_currency(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return format!("{}{}", currency.symbol(), amount);
    }

    let fixed = format!("{:.*}", currency.minor_units(), amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    // "-0.00" after rounding is shown unsigned
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{sign}{}{}", currency.symbol(), group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case(1000.0, Currency::Usd, "$1,000.00")]
    #[case(900.0, Currency::Usd, "$900.00")]
    #[case(85.0, Currency::Eur, "€85.00")]
    #[case(42.5, Currency::Gbp, "£42.50")]
    #[case(1234.6, Currency::Jpy, "¥1,235")]
    #[case(1_234_567.891, Currency::Aud, "A$1,234,567.89")]
    #[case(0.5, Currency::Cad, "CA$0.50")]
    #[case(-5.0, Currency::Eur, "-€5.00")]
    #[case(-0.001, Currency::Usd, "$0.00")]
    #[case(0.0, Currency::Jpy, "¥0")]
    fn test_format_currency(#[case] amount: f64, #[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(format_currency(amount, currency), expected);
    }

    #[test]
    fn test_format_currency_handles_every_currency() {
        for currency in Currency::ALL {
            let rendered = format_currency(12.0, currency);
            assert!(rendered.starts_with(currency.symbol()), "{rendered}");
        }
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::Usd), "$NaN");
    }

    #[test]
    fn test_convert_is_pure() {
        let first = format_converted(100.0, 0.85);
        let second = format_converted(100.0, 0.85);
        assert_eq!(first, second);
        assert_snapshot!(first, @"85.00");
        assert!((convert(100.0, 0.85) - 85.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(50.0, 0.85, "42.50")]
    #[case(1.0, 1.0, "1.00")]
    fn test_format_converted(#[case] amount: f64, #[case] rate: f64, #[case] expected: &str) {
        assert_eq!(format_converted(amount, rate), expected);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
