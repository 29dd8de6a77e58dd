//! Recent transactions panel.
//!
//! Entries are drawn in ledger order (newest first). The destination amount
//! shown is the one frozen on the transaction when it was created.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::domain::{Transaction, format_currency};
use crate::state::WalletState;
use crate::theme::{MUTED_COLOR, SECONDARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::panel_block;

/// Renders the ledger with `selected` highlighted.
pub fn render(frame: &mut Frame, area: Rect, wallet: &WalletState, selected: usize) {
    let block = panel_block("Recent Transactions", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if wallet.ledger().is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions yet").style(Style::default().fg(MUTED_COLOR)),
            inner,
        );
        return;
    }

    let width = usize::from(inner.width);
    let items: Vec<ListItem> = wallet
        .ledger()
        .iter()
        .map(|txn| transaction_item(txn, width))
        .collect();

    let list = List::new(items).highlight_style(SELECTED_STYLE);
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn transaction_item(txn: &Transaction, width: usize) -> ListItem<'static> {
    let amount = format_currency(txn.amount, txn.from);
    let converted = format_currency(txn.converted_amount, txn.to);

    ListItem::new(vec![
        spread(
            Span::styled(
                txn.recipient.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(amount, Style::default().add_modifier(Modifier::BOLD)),
            width,
        ),
        spread(
            Span::styled(txn.date.to_string(), Style::default().fg(MUTED_COLOR)),
            Span::styled(converted, Style::default().fg(SECONDARY_COLOR)),
            width,
        ),
        Line::from(Span::styled(
            format!("[{} · {}]", txn.kind.as_str(), txn.status.as_str()),
            Style::default().fg(SUCCESS_COLOR),
        )),
    ])
}

/// Places `left` and `right` at opposite ends of a line `width` cells wide.
fn spread(left: Span<'static>, right: Span<'static>, width: usize) -> Line<'static> {
    let used = left.content.chars().count() + right.content.chars().count();
    let gap = width.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}
