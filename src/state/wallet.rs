//! The wallet view's state aggregate.

use color_eyre::Result;

use crate::domain::{Currency, RateTable};
use crate::state::config::{AppConfig, DEFAULT_BALANCE};
use crate::state::form::TransferForm;
use crate::state::ledger::Ledger;
use crate::state::notification::Notifications;

/// All state behind the wallet view.
///
/// Balance and ledger change only through
/// [`WalletState::submit_transfer_at`], which keeps
/// `balance >= 0` by checking funds before decrementing.
#[derive(Debug, Clone)]
pub struct WalletState {
    pub(crate) balance: f64,
    pub reference_currency: Currency,
    pub rates: RateTable,
    pub(crate) ledger: Ledger,
    pub notifications: Notifications,
    pub form: TransferForm,
    /// Whether the transfer form panel is open.
    pub transfer_open: bool,
}

impl Default for WalletState {
    fn default() -> Self {
        let rates = RateTable::default();
        Self {
            balance: DEFAULT_BALANCE,
            reference_currency: Currency::Usd,
            ledger: Ledger::seeded(|from, to| rates.rate(from, to)),
            rates,
            notifications: Notifications::default(),
            form: TransferForm::default(),
            transfer_open: false,
        }
    }
}

impl WalletState {
    /// Creates the wallet a freshly mounted view starts with.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let rates = config.rate_table()?;
        let ledger = if config.seed_transactions {
            Ledger::seeded(|from, to| rates.rate(from, to))
        } else {
            Ledger::new()
        };

        Ok(Self {
            balance: config.initial_balance,
            reference_currency: config.reference_currency,
            rates,
            ledger,
            notifications: Notifications::new(config.notification_timeout()),
            form: TransferForm::new(config.default_from, config.default_to),
            transfer_open: false,
        })
    }

    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Rate for the currency pair currently selected in the form.
    #[must_use]
    pub fn current_rate(&self) -> f64 {
        self.rates.rate(self.form.from, self.form.to)
    }

    /// Destination amount for the form's draft, as shown next to the amount field.
    #[must_use]
    pub fn converted_preview(&self) -> String {
        self.form.converted_preview(&self.rates)
    }

    /// Opens or closes the transfer form. The draft survives closing.
    pub fn toggle_transfer(&mut self) {
        self.transfer_open = !self.transfer_open;
    }

    pub fn close_transfer(&mut self) {
        self.transfer_open = false;
    }
}
