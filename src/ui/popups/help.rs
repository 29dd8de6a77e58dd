//! Help popup showing keybindings organized by context.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::PRIMARY_COLOR;
use crate::ui::helpers::popup_block;
use crate::ui::layout::centered_popup_area;

/// Keybinding sections with descriptions.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Wallet",
        &[
            ("s", "Open / close Send Money"),
            ("↑ / k", "Select newer transaction"),
            ("↓ / j", "Select older transaction"),
            ("Esc", "Dismiss notification"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Send Money",
        &[
            ("Tab / ↓", "Next field"),
            ("S-Tab / ↑", "Previous field"),
            ("← / →", "Change currency"),
            ("Backspace", "Delete character"),
            ("Enter", "Send"),
            ("Esc", "Close form"),
        ],
    ),
];

/// Renders the help popup.
pub fn render(frame: &mut Frame, area: Rect) {
    let height = HELP_SECTIONS
        .iter()
        .map(|(_, bindings)| bindings.len() as u16 + 3)
        .sum::<u16>()
        + 2;
    let popup_area = centered_popup_area(area, 50, height);

    frame.render_widget(Clear, popup_area);

    let block = popup_block("Help (? to close)", PRIMARY_COLOR);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = Vec::new();
    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(
            "─".repeat(inner.width.saturating_sub(2) as usize),
        ));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(PRIMARY_COLOR)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
