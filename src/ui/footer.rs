//! Footer bar with keyboard shortcuts for the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

/// Shortcut hints shown for `context`.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => "q:Quit  s:Send Money  ↑↓:Select  Esc:Dismiss  ?:Help",
        InputContext::TransferForm => "Enter:Send  Tab:Next  ←→:Currency  Esc:Close",
        InputContext::Help => "Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{app, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_footer_follows_context(mut app: App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_text(terminal.backend().buffer());
        for shortcut in ["q:Quit", "s:Send Money", "?:Help"] {
            assert!(content.contains(shortcut), "missing {shortcut}: {content}");
        }

        app.wallet.toggle_transfer();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Enter:Send"), "{content}");
    }
}
