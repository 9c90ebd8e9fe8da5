//! Event Handling - Keyboard input processing

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::node::NodeType;
use crate::shell::Action;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forwarded to the shell
    Shell(Action),
    ScrollUp,
    ScrollDown,
    Help,
    Quit,
    None,
}

/// Map a key press to an action
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    // Release and repeat events must not dispatch a second action
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    // Global keybindings
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => return KeyAction::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return KeyAction::Quit,
        (KeyModifiers::NONE, KeyCode::F(1)) => return KeyAction::Help,
        (_, KeyCode::Char('?')) => return KeyAction::Help,
        _ => {}
    }

    // Editor keybindings: modified chords (Ctrl/Alt) are ignored
    if !matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
        return KeyAction::None;
    }

    match key.code {
        // Node palette
        KeyCode::Char('1') | KeyCode::Char('a') => KeyAction::Shell(Action::Add(NodeType::Agent)),
        KeyCode::Char('2') | KeyCode::Char('g') => {
            KeyAction::Shell(Action::Add(NodeType::GroupChat))
        }
        KeyCode::Char('3') | KeyCode::Char('s') => {
            KeyAction::Shell(Action::Add(NodeType::Sequential))
        }
        KeyCode::Char('4') | KeyCode::Char('p') => {
            KeyAction::Shell(Action::Add(NodeType::Parallel))
        }

        // Toolbar
        KeyCode::Enter | KeyCode::Char('j') => KeyAction::Shell(Action::Generate),
        KeyCode::Char('c') | KeyCode::Delete => KeyAction::Shell(Action::Clear),

        // Output panel
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,

        _ => KeyAction::None,
    }
}

/// Poll for keyboard events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}
