//! Keyboard handlers for the theme picker and the add-article form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::app_state::AppState;
use super::effect::Effect;
use super::mode::{AddStatus, Mode};
use crate::model::{validate_article_url, KeyAction};

/// Handle an action while the theme picker is open.
///
/// # Key Bindings
/// - Up/k, Down/j: Move the cursor (clamps, does NOT wrap)
/// - Enter: Apply and persist the highlighted theme, close
/// - Esc/q: Close without changing the theme
pub fn handle_theme_modal_key(state: &mut AppState, action: KeyAction) -> Vec<Effect> {
    let Mode::Theme(modal) = &mut state.mode else {
        return Vec::new();
    };

    match action {
        KeyAction::Down => {
            modal.next();
            Vec::new()
        }
        KeyAction::Up => {
            modal.prev();
            Vec::new()
        }
        KeyAction::Confirm => {
            let theme = modal.highlighted();
            info!(%theme, "Theme selected");
            state.apply_theme(theme);
            state.mode = Mode::List;
            vec![Effect::PersistTheme(theme)]
        }
        KeyAction::Back | KeyAction::Quit => {
            state.mode = Mode::List;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Handle a raw key while the add-article form is open.
///
/// The form is a text field, so keys are not mapped through the bindings.
///
/// # Key Bindings
/// - Printable characters: append to the input
/// - Backspace: delete the last character
/// - Enter: validate and submit
/// - Esc: close and discard
///
/// While a submission is in flight or the success message is showing, only
/// Esc is honoured.
pub fn handle_add_article_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    let Mode::AddArticle(modal) = &mut state.mode else {
        return Vec::new();
    };

    if key.code == KeyCode::Esc {
        debug!("Add-article form dismissed");
        state.mode = Mode::List;
        return Vec::new();
    }

    if !matches!(modal.status, AddStatus::Editing { .. }) {
        return Vec::new();
    }

    match key.code {
        KeyCode::Enter => match validate_article_url(&modal.input) {
            Ok(url) => {
                let request = state.next_request();
                debug!(request = request.get(), %url, "Submitting article");
                state.set_add_status(AddStatus::Submitting(request));
                vec![Effect::CreateArticle { request, url }]
            }
            Err(e) => {
                modal.status = AddStatus::Editing {
                    error: Some(e.to_string()),
                };
                Vec::new()
            }
        },
        KeyCode::Backspace => {
            modal.input.pop();
            Vec::new()
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            modal.input.push(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "modal_handler_tests.rs"]
mod tests;
