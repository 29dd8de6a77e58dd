//! Shared test fixtures.

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::state::{App, AppConfig, WalletState};

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Wallet with the default fixture balance and seed transactions.
#[fixture]
pub fn wallet() -> WalletState {
    WalletState::from_config(&AppConfig::default()).expect("default config is valid")
}

#[fixture]
pub fn app() -> App {
    App::new(&AppConfig::default()).expect("default config is valid")
}

/// A fixed local wall-clock time: 2024-03-01 12:00:00.
#[fixture]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixture date")
}

#[fixture]
pub fn start() -> Instant {
    Instant::now()
}

// ============================================================================
// Helpers
// ============================================================================

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Fills the transfer draft directly.
pub fn fill_draft(wallet: &mut WalletState, amount: &str, recipient: &str) {
    wallet.form.amount = amount.to_string();
    wallet.form.recipient = recipient.to_string();
}

/// Flattens a buffer into one string, row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
