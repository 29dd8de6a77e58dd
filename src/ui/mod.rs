//! UI rendering module for the LazyWallet TUI.
//!
//! # Module Structure
//!
//! - `panels` - Balance card and transaction ledger
//! - `popups` - Send Money form and help
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::App;

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the whole view: main layout, then popups, then the toast on top.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = AppLayout::new(size);

    header::render(frame, layout.header, app);
    panels::balance::render(frame, layout.balance, &app.wallet);
    panels::ledger::render(frame, layout.ledger, &app.wallet, app.ui.selected);
    footer::render(frame, layout.footer, app);

    if app.wallet.transfer_open {
        popups::transfer::render(frame, size, &app.wallet);
    }
    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    if let Some(notification) = app.wallet.notifications.current() {
        components::render_toast(frame, size, notification);
    }
}
