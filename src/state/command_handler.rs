//! Applies [`AppCommand`]s to the app state.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::commands::AppCommand;

use super::App;

impl App {
    /// Executes a command using the system clocks.
    pub fn handle_command(&mut self, command: AppCommand) {
        self.handle_command_at(command, Local::now().naive_local(), Instant::now());
    }

    /// Executes a command as of the given wall-clock and monotonic times.
    pub fn handle_command_at(&mut self, command: AppCommand, now: NaiveDateTime, instant: Instant) {
        match command {
            AppCommand::Quit => {
                tracing::info!("Quit requested");
                self.exit = true;
            }
            AppCommand::ToggleTransfer => self.wallet.toggle_transfer(),
            AppCommand::ShowHelp => self.ui.show_help = true,
            AppCommand::Dismiss => self.dismiss(),
            AppCommand::MoveUp => self.ui.select_prev(),
            AppCommand::MoveDown => self.ui.select_next(self.wallet.ledger().len()),
            AppCommand::TypeChar(c) => self.wallet.form.push_char(c),
            AppCommand::Backspace => self.wallet.form.backspace(),
            AppCommand::NextField => self.wallet.form.next_field(),
            AppCommand::PrevField => self.wallet.form.prev_field(),
            AppCommand::NextCurrency => self.wallet.form.cycle_currency(true),
            AppCommand::PrevCurrency => self.wallet.form.cycle_currency(false),
            AppCommand::Submit => {
                // Outcome is surfaced through the notification
                if self.wallet.submit_transfer_at(now, instant).is_ok() {
                    self.ui.selected = 0;
                }
            }
            AppCommand::Noop => {}
        }
    }

    /// Closes the topmost overlay: help, then the form, then the notification.
    fn dismiss(&mut self) {
        if self.ui.show_help {
            self.ui.show_help = false;
        } else if self.wallet.transfer_open {
            self.wallet.close_transfer();
        } else if let Some(message) = self.wallet.notifications.message() {
            tracing::debug!(message, "Notification dismissed");
            self.wallet.notifications.clear();
        }
    }

    /// Expires the notification once its deadline passes.
    pub fn tick(&mut self, instant: Instant) {
        self.wallet.notifications.tick(instant);
    }
}
