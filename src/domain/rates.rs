//! Exchange rates between supported currencies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::error::ConfigError;

/// Rate applied to any pair without an explicit entry.
pub const DEFAULT_EXCHANGE_RATE: f64 = 0.85;

/// A configured rate for one direction of a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

/// Exchange rates keyed by `(from, to)` with a fallback rate.
///
/// Lookup order:
/// 1. An explicit entry for the pair
/// 2. `1.0` when both sides are the same currency
/// 3. The inverse of an explicit entry for the reverse pair
/// 4. The default rate
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    default_rate: f64,
    pairs: HashMap<(Currency, Currency), f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(DEFAULT_EXCHANGE_RATE)
    }
}

impl RateTable {
    #[must_use]
    pub fn new(default_rate: f64) -> Self {
        Self {
            default_rate,
            pairs: HashMap::new(),
        }
    }

    /// Builds a table from configuration, rejecting non-positive rates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRate`] for the first rate that is not a
    /// finite positive number.
    pub fn from_pairs(default_rate: f64, pairs: &[PairRate]) -> Result<Self, ConfigError> {
        if !is_valid_rate(default_rate) {
            return Err(ConfigError::InvalidRate {
                from: "*".to_string(),
                to: "*".to_string(),
                rate: default_rate,
            });
        }

        let mut table = Self::new(default_rate);
        for pair in pairs {
            if !is_valid_rate(pair.rate) {
                return Err(ConfigError::InvalidRate {
                    from: pair.from.to_string(),
                    to: pair.to.to_string(),
                    rate: pair.rate,
                });
            }
            table.set(pair.from, pair.to, pair.rate);
        }
        Ok(table)
    }

    /// Sets the rate for one direction of a pair.
    pub fn set(&mut self, from: Currency, to: Currency, rate: f64) {
        self.pairs.insert((from, to), rate);
    }

    /// Multiplier converting `from` units into `to` units.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        if let Some(rate) = self.pairs.get(&(from, to)) {
            return *rate;
        }
        if from == to {
            return 1.0;
        }
        if let Some(reverse) = self.pairs.get(&(to, from)) {
            return 1.0 / reverse;
        }
        self.default_rate
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

// ============================================================================
// Tests
// ============================================================================
