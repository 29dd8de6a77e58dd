//! Header rendering for the LazyWallet TUI.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::helpers::panel_block;

/// Render the application header: title on the left, reference currency on the right.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = panel_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(PRIMARY_COLOR)),
        Span::styled(
            "Digital Wallet",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), inner);

    let currency = format!("{} ", app.wallet.reference_currency);
    frame.render_widget(
        Paragraph::new(currency)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Right),
        inner,
    );
}
