//! Transaction records kept in the wallet ledger.

use std::fmt;

use chrono::NaiveDate;

use super::currency::Currency;
use super::format::convert;

// ============================================================================
// Identifiers and Enums
// ============================================================================

/// Session-unique transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a transaction. Only outgoing transfers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Send,
}

impl TransactionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
}

impl TransactionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// An immutable record of a completed transfer.
///
/// `rate` and `converted_amount` are captured when the record is created, so
/// the ledger keeps showing what the recipient actually received even if the
/// rate table changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub recipient: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub rate: f64,
    pub converted_amount: f64,
}

impl Transaction {
    /// Creates a completed send, freezing the converted amount at `rate`.
    #[must_use]
    pub fn send(
        id: TransactionId,
        amount: f64,
        from: Currency,
        to: Currency,
        recipient: impl Into<String>,
        date: NaiveDate,
        rate: f64,
    ) -> Self {
        Self {
            id,
            kind: TransactionKind::Send,
            amount,
            from,
            to,
            recipient: recipient.into(),
            date,
            status: TransactionStatus::Completed,
            rate,
            converted_amount: convert(amount, rate),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_freezes_conversion() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let txn = Transaction::send(
            TransactionId(1),
            100.0,
            Currency::Usd,
            Currency::Eur,
            "John Doe",
            date,
            0.85,
        );

        assert_eq!(txn.kind, TransactionKind::Send);
        assert_eq!(txn.status, TransactionStatus::Completed);
        assert!((txn.converted_amount - 85.0).abs() < 1e-9);
        assert_eq!(txn.recipient, "John Doe");
        assert_eq!(txn.id.to_string(), "1");
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(TransactionKind::Send.as_str(), "send");
        assert_eq!(TransactionStatus::Completed.as_str(), "completed");
    }
}
