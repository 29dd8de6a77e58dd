//! Application constants for the LazyWallet TUI.

use std::time::Duration;

/// Interval between ticks of the main loop.
///
/// Each tick expires the notification if due and redraws, so this bounds how
/// late a notification can disappear.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Name shown by `lazywallet version`.
pub const APP_NAME: &str = "LazyWallet";
