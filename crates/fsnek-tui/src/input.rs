//! Key event routing.
//!
//! Normal-mode character keys are resolved through the `Keymap`; the modal
//! modes (rename input, delete confirmation) are hardcoded. Double-tap
//! resolution for `g`/`d`/`y` happens later, in `App`, against the gesture
//! tracker; this layer only names the key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fsnek_core::action::Action;
use fsnek_core::config::keymap::Keymap;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a keymap action in Normal mode.
    Dispatch(Action),
    /// User approved the pending delete.
    ConfirmApproved,
    /// User rejected the pending delete.
    ConfirmRejected,
    /// Append a character at the rename caret.
    RenameChar(char),
    /// Delete the character before the rename caret.
    RenameBackspace,
    /// Move the rename caret one character left.
    RenameCaretLeft,
    /// Move the rename caret one character right.
    RenameCaretRight,
    /// Submit the rename buffer.
    RenameConfirm,
    /// Abandon the rename, keeping the original name.
    RenameCancel,
    /// Quit immediately (Ctrl+C).
    Quit,
    /// No action for this key.
    None,
}

/// Maps a key event to an [`InputAction`] based on the current mode.
pub fn handle_key(key: KeyEvent, mode: &AppMode, keymap: &Keymap) -> InputAction {
    // Ctrl+C always quits, regardless of mode.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match mode {
        AppMode::Normal => handle_normal_key(key, keymap),
        AppMode::Rename { .. } => handle_rename_key(key),
        AppMode::Confirm => handle_confirm_key(key),
    }
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    let key_str = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => return InputAction::None,
    };

    match keymap.action_for_key(&key_str) {
        Some(action) => InputAction::Dispatch(action),
        None => InputAction::None,
    }
}

fn handle_rename_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::RenameCancel,
        KeyCode::Enter => InputAction::RenameConfirm,
        KeyCode::Backspace => InputAction::RenameBackspace,
        KeyCode::Left => InputAction::RenameCaretLeft,
        KeyCode::Right => InputAction::RenameCaretRight,
        KeyCode::Char(c) => InputAction::RenameChar(c),
        _ => InputAction::None,
    }
}

fn handle_confirm_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::ConfirmApproved,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => InputAction::ConfirmRejected,
        _ => InputAction::None,
    }
}
