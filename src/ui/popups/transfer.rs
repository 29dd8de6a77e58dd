//! Transfer form popup.
//!
//! Recipient, amount with its source currency, the live converted amount with
//! its destination currency, and the rate for the selected pair.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{TransferField, WalletState};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR};
use crate::ui::helpers::popup_block;
use crate::ui::layout::centered_popup_area;

const CURRENCY_WIDTH: u16 = 11;

/// Render the transfer form.
pub fn render(frame: &mut Frame, area: Rect, wallet: &WalletState) {
    // 3 field rows × 3 lines + rate + help + popup border
    let popup_area = centered_popup_area(area, 60, 13);
    let block = popup_block("Send Money", PRIMARY_COLOR);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let [recipient_row, amount_row, converted_row, rate_row, help_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let form = &wallet.form;
    let active = form.active_field;

    render_field(
        frame,
        recipient_row,
        TransferField::Recipient,
        &form.recipient,
        active,
    );

    let [amount_area, from_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(CURRENCY_WIDTH)])
            .areas(amount_row);
    render_field(frame, amount_area, TransferField::Amount, &form.amount, active);
    render_field(
        frame,
        from_area,
        TransferField::FromCurrency,
        form.from.code(),
        active,
    );

    let [converted_area, to_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(CURRENCY_WIDTH)])
            .areas(converted_row);
    let converted = Paragraph::new(format!("→ {}", wallet.converted_preview()))
        .style(Style::default().fg(SECONDARY_COLOR))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED_COLOR))
                .title("Recipient gets"),
        );
    frame.render_widget(converted, converted_area);
    render_field(
        frame,
        to_area,
        TransferField::ToCurrency,
        form.to.code(),
        active,
    );

    let rate = Paragraph::new(format!(
        "Exchange Rate: 1 {} = {} {}",
        form.from,
        wallet.current_rate(),
        form.to
    ))
    .style(Style::default().fg(MUTED_COLOR))
    .alignment(Alignment::Center);
    frame.render_widget(rate, rate_row);

    let help = Paragraph::new("Enter: Send  Tab: Next  ←/→: Currency  Esc: Close")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_row);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: TransferField,
    value: &str,
    active: TransferField,
) {
    let is_active = field == active;
    let border_style = if is_active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let display = if value.is_empty() {
        match field {
            TransferField::Recipient => "Recipient name or email",
            TransferField::Amount => "Amount",
            TransferField::FromCurrency | TransferField::ToCurrency => "",
        }
    } else {
        value
    };

    let content = match (is_active, field.is_text()) {
        (true, true) => format!("{display}_"),
        (true, false) => format!("◀ {display} ▶"),
        (false, _) => display.to_string(),
    };

    let paragraph = Paragraph::new(content)
        .style(if value.is_empty() {
            Style::default().fg(MUTED_COLOR)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal_80x24, wallet};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    #[rstest]
    fn renders_empty_form(mut test_terminal_80x24: Terminal<TestBackend>, wallet: WalletState) {
        test_terminal_80x24
            .draw(|f| render(f, f.area(), &wallet))
            .unwrap();

        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains("Send Money"));
        assert!(text.contains("Recipient name or email_"));
        assert!(text.contains("USD"));
        assert!(text.contains("EUR"));
        assert!(text.contains("Exchange Rate: 1 USD = 0.85 EUR"), "{text}");
    }

    #[rstest]
    fn renders_typed_amount_and_conversion(
        mut test_terminal_80x24: Terminal<TestBackend>,
        mut wallet: WalletState,
    ) {
        for c in "Alice".chars() {
            wallet.form.push_char(c);
        }
        wallet.form.next_field();
        for c in "100".chars() {
            wallet.form.push_char(c);
        }

        test_terminal_80x24
            .draw(|f| render(f, f.area(), &wallet))
            .unwrap();

        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains("Alice"));
        assert!(text.contains("100_"));
        assert!(text.contains("→ 85.00"), "{text}");
    }

    #[rstest]
    fn renders_active_currency_selector(
        mut test_terminal_80x24: Terminal<TestBackend>,
        mut wallet: WalletState,
    ) {
        wallet.form.active_field = TransferField::ToCurrency;
        wallet.form.cycle_currency(true);

        test_terminal_80x24
            .draw(|f| render(f, f.area(), &wallet))
            .unwrap();

        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains("◀ GBP ▶"), "{text}");
    }
}
