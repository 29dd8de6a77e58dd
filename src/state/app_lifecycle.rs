//! Application lifecycle management.
//!
//! The main loop is single-threaded: poll for input until the next tick,
//! apply the resulting command, and on every tick expire the notification
//! and redraw.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Instant;

use crate::commands::KeyMapper;
use crate::constants::TICK_RATE;
use crate::state::NotificationKind;
use crate::tui::Tui;
use crate::ui;

use super::App;

impl App {
    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(balance = self.wallet.balance(), "Wallet opened");
        self.wallet.notifications.show(
            "Press s to send money, ? for help",
            NotificationKind::Info,
            Instant::now(),
        );
        terminal.draw(|frame| ui::render(self, frame))?;

        let mut last_tick = Instant::now();

        while !self.exit {
            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick(Instant::now());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!(
            balance = self.wallet.balance(),
            transactions = self.wallet.ledger().len(),
            "Wallet closed"
        );
        Ok(())
    }

    /// Maps a key event in the current context and applies it.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, &self.input_context());
        self.handle_command(command);
    }
}
