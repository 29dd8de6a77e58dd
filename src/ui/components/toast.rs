//! Toast notification component.
//!
//! Renders the active notification as a non-blocking overlay in the
//! bottom-right corner, colored by its kind.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationKind};
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Rows taken by the top and bottom border.
const TOAST_BORDER_ROWS: u16 = 2;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Extra padding added to message length for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let toast_area = calculate_toast_position(area, &notification.message);

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(text_color(notification.kind)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Position and size for a toast showing `message`.
///
/// Width follows the message length, capped at two thirds of the area. The
/// toast grows upwards by one row per wrapped line so the whole message stays
/// visible, up to the height of the area.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width * 2 / 3)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let inner_width = toast_width.saturating_sub(2);
    let toast_height = wrapped_line_count(message, inner_width)
        .saturating_add(TOAST_BORDER_ROWS)
        .min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

/// Number of rows `message` takes when word-wrapped to `width` columns.
///
/// Words longer than a row are split across rows.
#[must_use]
fn wrapped_line_count(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1_usize;
    let mut current = 0_usize;

    for word in message.split_whitespace() {
        let len = word.chars().count();
        if current > 0 && current + 1 + len <= width {
            current += 1 + len;
            continue;
        }
        if current > 0 {
            lines += 1;
        }
        let extra_rows = (len - 1) / width;
        lines += extra_rows;
        current = len - extra_rows * width;
    }

    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

#[must_use]
const fn text_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => SUCCESS_COLOR,
        NotificationKind::Error => ERROR_COLOR,
        NotificationKind::Info => Color::White,
    }
}

// ============================================================================
// Tests
// ============================================================================
