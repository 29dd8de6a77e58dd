//! Transfer form draft state.
//!
//! The form holds raw input only. The amount stays as typed text and is parsed
//! when the transfer is submitted, so invalid numbers are allowed transiently.

use crate::domain::{Currency, RateTable, format_converted};

// ============================================================================
// Form Fields
// ============================================================================

/// Fields available in the transfer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferField {
    Recipient,
    Amount,
    FromCurrency,
    ToCurrency,
}

impl TransferField {
    #[must_use]
    const fn next(self) -> Self {
        match self {
            Self::Recipient => Self::Amount,
            Self::Amount => Self::FromCurrency,
            Self::FromCurrency => Self::ToCurrency,
            Self::ToCurrency => Self::Recipient,
        }
    }

    #[must_use]
    const fn prev(self) -> Self {
        match self {
            Self::Recipient => Self::ToCurrency,
            Self::Amount => Self::Recipient,
            Self::FromCurrency => Self::Amount,
            Self::ToCurrency => Self::FromCurrency,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recipient => "Recipient",
            Self::Amount => "Amount",
            Self::FromCurrency => "From",
            Self::ToCurrency => "To",
        }
    }

    /// Returns `true` for fields that accept typed characters.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Recipient | Self::Amount)
    }
}

// ============================================================================
// Transfer Form
// ============================================================================

/// Draft of a transfer being composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
    pub active_field: TransferField,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self::new(Currency::Usd, Currency::Eur)
    }
}

impl TransferForm {
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self {
            recipient: String::new(),
            amount: String::new(),
            from,
            to,
            active_field: TransferField::Recipient,
        }
    }

    fn current_value_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            TransferField::Recipient => Some(&mut self.recipient),
            TransferField::Amount => Some(&mut self.amount),
            TransferField::FromCurrency | TransferField::ToCurrency => None,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Types a character into the active text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(value) = self.current_value_mut() {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.current_value_mut() {
            value.pop();
        }
    }

    /// Cycles the currency of the active currency field.
    pub fn cycle_currency(&mut self, forward: bool) {
        let slot = match self.active_field {
            TransferField::FromCurrency => &mut self.from,
            TransferField::ToCurrency => &mut self.to,
            TransferField::Recipient | TransferField::Amount => return,
        };
        *slot = if forward { slot.next() } else { slot.prev() };
    }

    /// The amount parsed as a finite number, if it is one.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    /// Destination amount preview, empty while the amount is blank or not a number.
    #[must_use]
    pub fn converted_preview(&self, rates: &RateTable) -> String {
        self.parsed_amount()
            .map(|amount| format_converted(amount, rates.rate(self.from, self.to)))
            .unwrap_or_default()
    }

    /// Clears recipient and amount, keeping the currency selection.
    pub fn clear_inputs(&mut self) {
        self.recipient.clear();
        self.amount.clear();
        self.active_field = TransferField::Recipient;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation() {
        let mut form = TransferForm::default();
        assert_eq!(form.active_field, TransferField::Recipient);

        form.next_field();
        assert_eq!(form.active_field, TransferField::Amount);
        form.next_field();
        assert_eq!(form.active_field, TransferField::FromCurrency);
        form.next_field();
        assert_eq!(form.active_field, TransferField::ToCurrency);
        form.next_field();
        assert_eq!(form.active_field, TransferField::Recipient);

        form.prev_field();
        assert_eq!(form.active_field, TransferField::ToCurrency);
    }

    #[test]
    fn test_typing_only_affects_text_fields() {
        let mut form = TransferForm::default();
        for c in "Alice".chars() {
            form.push_char(c);
        }
        form.next_field();
        for c in "1x".chars() {
            form.push_char(c);
        }
        form.backspace();
        form.next_field();
        form.push_char('9');
        form.backspace();

        assert_eq!(form.recipient, "Alice");
        assert_eq!(form.amount, "1");
        assert_eq!(form.from, Currency::Usd);
    }

    #[test]
    fn test_cycle_currency() {
        let mut form = TransferForm::default();
        form.cycle_currency(true);
        assert_eq!(form.from, Currency::Usd, "text field ignores cycling");

        form.active_field = TransferField::FromCurrency;
        form.cycle_currency(true);
        assert_eq!(form.from, Currency::Eur);

        form.active_field = TransferField::ToCurrency;
        form.cycle_currency(false);
        assert_eq!(form.to, Currency::Usd);
    }

    #[test]
    fn test_converted_preview() {
        let rates = RateTable::default();
        let mut form = TransferForm::default();
        assert_eq!(form.converted_preview(&rates), "");

        form.amount = "abc".to_string();
        assert_eq!(form.converted_preview(&rates), "");

        form.amount = "100".to_string();
        assert_eq!(form.converted_preview(&rates), "85.00");

        form.amount = "inf".to_string();
        assert_eq!(form.parsed_amount(), None);
    }

    #[test]
    fn test_clear_inputs_keeps_currencies() {
        let mut form = TransferForm::new(Currency::Gbp, Currency::Jpy);
        form.recipient = "Bob".to_string();
        form.amount = "10".to_string();
        form.active_field = TransferField::ToCurrency;

        form.clear_inputs();
        assert!(form.recipient.is_empty());
        assert!(form.amount.is_empty());
        assert_eq!(form.from, Currency::Gbp);
        assert_eq!(form.to, Currency::Jpy);
        assert_eq!(form.active_field, TransferField::Recipient);
    }
}
