//! Error types for wallet operations.
//!
//! Every way a transfer can be rejected is a variant here, so the caller
//! can surface it to the user instead of silently ignoring the submit.

use thiserror::Error;

// ============================================================================
// Transfer Errors
// ============================================================================

/// Reasons a transfer draft fails input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The amount field is empty.
    #[error("Enter an amount")]
    MissingAmount,

    /// The amount field does not parse to a finite number.
    #[error("Amount is not a number")]
    UnparseableAmount,

    /// The amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// The recipient field is empty.
    #[error("Enter a recipient")]
    MissingRecipient,
}

/// Error returned when a transfer cannot be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// The draft failed validation before the balance was consulted.
    #[error("{0}")]
    InvalidInput(#[from] InvalidInput),

    /// The amount exceeds the current balance.
    #[error("Insufficient balance")]
    InsufficientFunds {
        /// Amount the user tried to send.
        requested: f64,
        /// Balance at the time of the attempt.
        available: f64,
    },
}

impl TransferError {
    /// Returns `true` if the user can fix this by editing the form.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// ============================================================================
// Other Errors
// ============================================================================

/// A currency code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency code '{0}'")]
pub struct UnknownCurrency(pub String);

/// Configuration values that would break wallet invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Initial balance must be a non-negative number, got {0}")]
    InvalidBalance(f64),

    #[error("Exchange rate {from}->{to} must be a positive number, got {rate}")]
    InvalidRate {
        from: String,
        to: String,
        rate: f64,
    },

    #[error("Notification timeout must be greater than zero")]
    ZeroTimeout,
}

// ============================================================================
// Tests
// ============================================================================
