//! Block builders shared by the wallet panels and overlays.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::Block,
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR};

/// Bordered panel for the main view.
///
/// The panel that currently owns the view gets a thick accent border and a
/// `◆` marker. An empty title draws a bare frame.
#[must_use]
pub fn panel_block(title: &str, active: bool) -> Block<'static> {
    let (border_set, border_style) = if active {
        (border::THICK, FOCUSED_BORDER_STYLE)
    } else {
        (border::ROUNDED, BORDER_STYLE)
    };
    let block = Block::bordered()
        .border_set(border_set)
        .border_style(border_style);

    if title.is_empty() {
        return block;
    }

    let label = if active {
        Span::styled(format!("◆ {title}"), FOCUSED_TITLE_STYLE)
    } else {
        Span::styled(
            title.to_string(),
            Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD),
        )
    };
    block.title(Line::from(vec![Span::raw(" "), label, Span::raw(" ")]))
}

/// Overlay frame with a centered title, tinted with `accent`.
#[must_use]
pub fn popup_block(title: &str, accent: Color) -> Block<'static> {
    Block::bordered()
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(accent))
        .title(
            Line::styled(
                format!(" {title} "),
                Style::new().fg(accent).add_modifier(Modifier::BOLD),
            )
            .centered(),
        )
}
