//! Currency codes supported by the wallet.
//!
//! The set is fixed: every selector in the transfer form cycles through
//! [`Currency::ALL`] and the formatter handles each member.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownCurrency;

// ============================================================================
// Currency
// ============================================================================

/// ISO-4217 currencies the wallet can send and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
}

impl Currency {
    /// Every supported currency, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Aud,
        Self::Cad,
    ];

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    /// Symbol used as a prefix by the en-US formatter.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "CA$",
        }
    }

    /// Number of fractional digits shown for this currency.
    #[must_use]
    pub const fn minor_units(self) -> usize {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }

    /// Next currency in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Usd => Self::Eur,
            Self::Eur => Self::Gbp,
            Self::Gbp => Self::Jpy,
            Self::Jpy => Self::Aud,
            Self::Aud => Self::Cad,
            Self::Cad => Self::Usd,
        }
    }

    /// Previous currency in selector order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Usd => Self::Cad,
            Self::Eur => Self::Usd,
            Self::Gbp => Self::Eur,
            Self::Jpy => Self::Gbp,
            Self::Aud => Self::Jpy,
            Self::Cad => Self::Aud,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownCurrency(code.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_next_and_prev_cycle_through_all() {
        let mut currency = Currency::Usd;
        for expected in Currency::ALL.iter().cycle().skip(1).take(6) {
            currency = currency.next();
            assert_eq!(currency, *expected);
        }
        assert_eq!(currency, Currency::Usd);

        for c in Currency::ALL {
            assert_eq!(c.next().prev(), c);
        }
    }

    #[rstest]
    #[case("USD", Currency::Usd)]
    #[case("eur", Currency::Eur)]
    #[case(" gbp ", Currency::Gbp)]
    #[case("JPY", Currency::Jpy)]
    fn test_from_str(#[case] input: &str, #[case] expected: Currency) {
        assert_eq!(input.parse::<Currency>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "BTC".parse::<Currency>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown currency code 'BTC'");
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&Currency::Cad).unwrap();
        assert_eq!(json, "\"CAD\"");
        let parsed: Currency = serde_json::from_str("\"AUD\"").unwrap();
        assert_eq!(parsed, Currency::Aud);
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Currency::Jpy.minor_units(), 0);
        assert_eq!(Currency::Usd.minor_units(), 2);
        assert_eq!(Currency::Usd.to_string(), "USD");
    }
}
