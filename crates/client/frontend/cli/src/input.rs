//! Input processing for the calculator.
//!
//! This module owns the keyboard-to-command mapping so the form state can
//! remain agnostic about concrete key bindings or `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Tier slider step for PageUp/PageDown.
const PAGE_STEP: i16 = 5;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Move the focused slider by the given number of steps.
    Step(i16),
    /// Type a character into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Commit pending text in the focused field.
    Commit,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into form commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Left => KeyAction::Step(-1),
            KeyCode::Right => KeyAction::Step(1),
            KeyCode::PageUp => KeyAction::Step(PAGE_STEP),
            KeyCode::PageDown => KeyAction::Step(-PAGE_STEP),
            KeyCode::Enter => KeyAction::Commit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }
}
