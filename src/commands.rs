//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by a pure [`KeyMapper`],
//! keeping keybindings testable apart from the state they drive.
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.handle_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which part of the UI currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Balance card and ledger.
    Main,
    /// The transfer form is open.
    TransferForm,
    /// The help popup is open.
    Help,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Open or close the transfer form.
    ToggleTransfer,
    /// Show the help popup.
    ShowHelp,
    /// Close the current popup, form, or notification.
    Dismiss,

    // === Ledger Navigation ===
    /// Select the newer transaction.
    MoveUp,
    /// Select the older transaction.
    MoveDown,

    // === Transfer Form ===
    /// Type a character into the active field.
    TypeChar(char),
    /// Delete the last character of the active field.
    Backspace,
    /// Move to the next form field.
    NextField,
    /// Move to the previous form field.
    PrevField,
    /// Select the next currency on a currency field.
    NextCurrency,
    /// Select the previous currency on a currency field.
    PrevCurrency,
    /// Submit the transfer.
    Submit,

    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::TransferForm => Self::map_transfer_form_keys(key),
            InputContext::Help => Self::map_help_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('s') => AppCommand::ToggleTransfer,
            KeyCode::Char('?') => AppCommand::ShowHelp,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_transfer_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
            KeyCode::Right => AppCommand::NextCurrency,
            KeyCode::Left => AppCommand::PrevCurrency,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => {
                if c == 'c' && key.modifiers.contains(KeyModifiers::CONTROL) {
                    AppCommand::Dismiss
                } else {
                    AppCommand::TypeChar(c)
                }
            }
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
