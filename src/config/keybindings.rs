//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Character keys are looked up without the SHIFT modifier, so `D` matches
/// whether or not the terminal reports shift alongside the uppercase letter.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }
}

/// Strip event kind/state, and SHIFT from character keys.
fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Vim-style movement
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::Down);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::Up);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::Down);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::Up);

        // Paging (reader only)
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Modal navigation
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Confirm);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Back);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);

        // Article actions
        bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::AddArticle);
        bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::MarkRead);
        bind(KeyCode::Char('D'), KeyModifiers::NONE, KeyAction::Delete);
        bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::OpenInBrowser);
        bind(KeyCode::Char('T'), KeyModifiers::NONE, KeyAction::ThemePicker);
        bind(KeyCode::Char('R'), KeyModifiers::NONE, KeyAction::Refresh);
        bind(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyAction::Refresh);

        Self { bindings }
    }
}
