//! Transfer validation and execution.
//!
//! [`validate_transfer`] is a pure check of the draft against the balance.
//! [`WalletState::submit_transfer_at`] applies the result: on success it
//! debits the balance, records the transaction, resets the draft, closes the
//! form and announces the transfer; on failure it only shows an error.

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::domain::{
    Currency, InvalidInput, RateTable, Transaction, TransferError, format_converted,
};
use crate::state::form::TransferForm;
use crate::state::notification::NotificationKind;
use crate::state::wallet::WalletState;

// ============================================================================
// Validation
// ============================================================================

/// A draft that passed validation, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub amount: f64,
    /// The amount as the user typed it, trimmed.
    pub amount_text: String,
    pub from: Currency,
    pub to: Currency,
    pub recipient: String,
    pub rate: f64,
}

impl TransferRequest {
    /// Message announcing a completed transfer.
    #[must_use]
    pub fn success_message(&self) -> String {
        format!(
            "Successfully sent {} {} ({} {}) to {}",
            self.amount_text,
            self.from,
            format_converted(self.amount, self.rate),
            self.to,
            self.recipient
        )
    }
}

/// Checks a draft in order: amount present, numeric, positive; recipient
/// present; amount covered by the balance.
///
/// # Errors
///
/// Returns the first check that fails.
pub fn validate_transfer(
    draft: &TransferForm,
    balance: f64,
    rates: &RateTable,
) -> Result<TransferRequest, TransferError> {
    let amount_text = draft.amount.trim();
    if amount_text.is_empty() {
        return Err(InvalidInput::MissingAmount.into());
    }
    let amount = draft
        .parsed_amount()
        .ok_or(InvalidInput::UnparseableAmount)?;
    if amount <= 0.0 {
        return Err(InvalidInput::NonPositiveAmount.into());
    }

    let recipient = draft.recipient.trim();
    if recipient.is_empty() {
        return Err(InvalidInput::MissingRecipient.into());
    }

    if amount > balance {
        return Err(TransferError::InsufficientFunds {
            requested: amount,
            available: balance,
        });
    }

    Ok(TransferRequest {
        amount,
        amount_text: amount_text.to_string(),
        from: draft.from,
        to: draft.to,
        recipient: recipient.to_string(),
        rate: rates.rate(draft.from, draft.to),
    })
}

// ============================================================================
// Execution
// ============================================================================

impl WalletState {
    /// Submits the current draft as of `now` (wall clock, local time) and
    /// `instant` (monotonic clock, for the notification deadline).
    ///
    /// # Errors
    ///
    /// Returns the validation or funds error. Balance, ledger and draft are
    /// left untouched and the error is shown as a notification.
    pub fn submit_transfer_at(
        &mut self,
        now: NaiveDateTime,
        instant: Instant,
    ) -> Result<Transaction, TransferError> {
        let request = match validate_transfer(&self.form, self.balance, &self.rates) {
            Ok(request) => request,
            Err(err) => {
                if err.is_input_error() {
                    tracing::debug!(error = %err, "Transfer draft incomplete");
                } else {
                    tracing::info!(error = %err, "Transfer rejected");
                }
                self.notifications
                    .show(err.to_string(), NotificationKind::Error, instant);
                return Err(err);
            }
        };

        let candidate_id = u64::try_from(now.and_utc().timestamp_millis()).unwrap_or_default();
        let transaction = Transaction::send(
            self.ledger.next_id(candidate_id),
            request.amount,
            request.from,
            request.to,
            request.recipient.clone(),
            now.date(),
            request.rate,
        );

        self.balance -= request.amount;
        self.ledger.record(transaction.clone());
        self.form.clear_inputs();
        self.close_transfer();
        self.notifications.show(
            request.success_message(),
            NotificationKind::Success,
            instant,
        );

        tracing::info!(
            id = %transaction.id,
            amount = request.amount,
            from = %request.from,
            to = %request.to,
            rate = transaction.rate,
            balance = self.balance,
            "Transfer completed"
        );

        Ok(transaction)
    }
}

// ============================================================================
// Tests
// ============================================================================
