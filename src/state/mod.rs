//! State management module for the LazyWallet TUI application.
//!
//! - [`WalletState`] - Balance, ledger, transfer draft and notifications
//! - [`UiState`] - Presentation-only concerns (ledger selection, help popup)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├───────────────────────────┬──────────────────┤
//! │        WalletState        │     UiState      │
//! │  - balance / rates        │  - selection     │
//! │  - ledger                 │  - help popup    │
//! │  - transfer form          │                  │
//! │  - notifications          │                  │
//! └───────────────────────────┴──────────────────┘
//! ```

use color_eyre::Result;

use crate::commands::InputContext;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;
mod command_handler;

pub mod config;
pub mod form;
pub mod ledger;
pub mod notification;
pub mod transfer;
pub mod wallet;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use form::TransferField;
pub use notification::{Notification, NotificationKind};
pub use wallet::WalletState;

// ============================================================================
// UI State
// ============================================================================

/// Presentation state that does not belong to the wallet itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the highlighted ledger row.
    pub selected: usize,
    /// Whether the help popup is visible.
    pub show_help: bool,
}

impl UiState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Wallet state driven by transfers.
    pub wallet: WalletState,

    /// UI state - selection, popups.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    /// Creates the app with a freshly seeded wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            wallet: WalletState::from_config(config)?,
            ui: UiState::default(),
            exit: false,
        })
    }

    /// The context key input is interpreted in.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.ui.show_help {
            InputContext::Help
        } else if self.wallet.transfer_open {
            InputContext::TransferForm
        } else {
            InputContext::Main
        }
    }
}
