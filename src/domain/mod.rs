//! Domain types for the LazyWallet terminal wallet.
//!
//! # Module Organization
//!
//! - [`currency`] - Supported currency codes
//! - [`error`] - Transfer and configuration errors
//! - [`format`] - Currency formatting and conversion display
//! - [`rates`] - Exchange rate table
//! - [`transaction`] - Ledger transaction records

// ============================================================================
// Module Declarations
// ============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod rates;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use currency::Currency;
pub use error::{ConfigError, InvalidInput, TransferError};
pub use format::{format_converted, format_currency};
pub use rates::{DEFAULT_EXCHANGE_RATE, PairRate, RateTable};
pub use transaction::{Transaction, TransactionId};
