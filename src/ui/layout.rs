//! Layout calculations for the LazyWallet TUI.

use ratatui::layout::{Constraint, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the balance card.
pub const BALANCE_HEIGHT: u16 = 5;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub balance: Rect,
    pub ledger: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Splits the screen top to bottom.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [header, balance, ledger, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(BALANCE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        Self {
            header,
            balance,
            ledger,
            footer,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Centers a popup of at most `width` x `height` inside `parent`, leaving a margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.balance.height, BALANCE_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.ledger.height, 24 - 3 - 5 - 1);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_popup_area(parent, 50, 20);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));

        // Clamped to the parent with a margin
        let small = centered_popup_area(Rect::new(0, 0, 30, 10), 50, 20);
        assert_eq!(small.width, 26);
        assert_eq!(small.height, 6);
    }
}
