//! Balance card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::domain::format_currency;
use crate::state::WalletState;
use crate::theme::{BALANCE_STYLE, MUTED_COLOR};
use crate::ui::helpers::panel_block;

/// Renders the available balance in the reference currency.
pub fn render(frame: &mut Frame, area: Rect, wallet: &WalletState) {
    let block = panel_block("Balance", !wallet.transfer_open);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label_area, amount_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("Available Balance")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(format_currency(wallet.balance(), wallet.reference_currency))
            .style(BALANCE_STYLE)
            .alignment(Alignment::Center),
        amount_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, wallet};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_renders_formatted_balance(wallet: WalletState) {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &wallet))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Available Balance"));
        assert!(text.contains("$1,000.00"), "{text}");
    }
}
