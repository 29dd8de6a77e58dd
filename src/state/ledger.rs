//! Transaction ledger, newest first.

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::domain::{Currency, Transaction, TransactionId};

/// Ordered list of past transfers.
///
/// Order is by insertion, not by date: [`Ledger::record`] always puts the new
/// entry at the head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: VecDeque<Transaction>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger holding the two fixture transfers a fresh wallet shows.
    #[must_use]
    pub fn seeded(rate: impl Fn(Currency, Currency) -> f64) -> Self {
        let fixtures = [
            (1, 100.0, Currency::Usd, Currency::Eur, "John Doe", (2024, 2, 20)),
            (2, 50.0, Currency::Usd, Currency::Gbp, "Jane Smith", (2024, 2, 19)),
        ];

        let entries = fixtures
            .into_iter()
            .filter_map(|(id, amount, from, to, recipient, (y, m, d))| {
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                Some(Transaction::send(
                    TransactionId(id),
                    amount,
                    from,
                    to,
                    recipient,
                    date,
                    rate(from, to),
                ))
            })
            .collect();

        Self { entries }
    }

    /// Prepends a transaction.
    pub fn record(&mut self, transaction: Transaction) {
        self.entries.push_front(transaction);
    }

    /// Identifier strictly greater than every id in the ledger, preferring `candidate`.
    #[must_use]
    pub fn next_id(&self, candidate: u64) -> TransactionId {
        let max = self.entries.iter().map(|t| t.id.0).max().unwrap_or(0);
        TransactionId(candidate.max(max.saturating_add(1)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
