//! Theme and styling constants for the LazyWallet TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Magenta;

/// Secondary accent color - balance figure and converted amounts.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected ledger row.
pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for the large balance figure.
pub const BALANCE_STYLE: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD);
