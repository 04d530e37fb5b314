//! Tests for the theme picker and add-article form.

use super::*;
use crate::config::ThemeName;
use crate::model::{ApiError, Article};
use crate::state::effect::{AppEvent, RequestId, ADD_SUCCESS_DELAY};
use crate::state::mode::AddArticleModal;
use crate::state::LoadState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(ThemeName::Default, 100, 40);
    let Some(Effect::FetchArticles { request }) = state.start().pop() else {
        panic!("start should fetch articles");
    };
    state.handle_event(AppEvent::ArticlesLoaded {
        request,
        result: Ok(Vec::new()),
    });
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        state.handle_key(key(KeyCode::Char(c)));
    }
}

fn add_modal(state: &AppState) -> &AddArticleModal {
    match state.mode() {
        Mode::AddArticle(modal) => modal,
        other => panic!("expected add-article form, got {}", other.name()),
    }
}

fn open_form(state: &mut AppState) -> RequestId {
    match state.handle_key(key(KeyCode::Char('a'))).as_slice() {
        [Effect::ReadClipboard { request }] => *request,
        other => panic!("expected ReadClipboard, got {other:?}"),
    }
}

fn submit(state: &mut AppState) -> RequestId {
    match state.handle_key(key(KeyCode::Enter)).as_slice() {
        [Effect::CreateArticle { request, .. }] => *request,
        other => panic!("expected CreateArticle, got {other:?}"),
    }
}

fn stored_article() -> Article {
    serde_json::from_str(r#"{"id":"new","title":"New","url":"https://example.com/new"}"#).unwrap()
}

// ===== Theme picker =====

#[test]
fn theme_picker_moves_and_applies() {
    let mut state = loaded_state();
    state.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
    state.handle_key(key(KeyCode::Char('j')));
    state.handle_key(key(KeyCode::Down));

    let effects = state.handle_key(key(KeyCode::Enter));

    assert_eq!(effects, vec![Effect::PersistTheme(ThemeName::Forest)]);
    assert_eq!(state.theme(), ThemeName::Forest);
    assert!(matches!(state.mode(), Mode::List));
}

#[test]
fn theme_picker_cancel_keeps_theme() {
    for cancel in [KeyCode::Esc, KeyCode::Char('q')] {
        let mut state = loaded_state();
        state.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
        state.handle_key(key(KeyCode::Char('j')));

        assert!(state.handle_key(key(cancel)).is_empty());
        assert_eq!(state.theme(), ThemeName::Default);
        assert!(matches!(state.mode(), Mode::List));
        assert!(!state.should_quit());
    }
}

#[test]
fn theme_cursor_stays_in_range() {
    let mut state = loaded_state();
    state.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
    for _ in 0..30 {
        state.handle_key(key(KeyCode::Char('j')));
    }
    let Mode::Theme(modal) = state.mode() else {
        panic!("theme picker should be open");
    };
    assert_eq!(modal.cursor, ThemeName::ALL.len() - 1);
}

// ===== Add article =====

#[test]
fn invalid_url_shows_error_without_network_effect() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "not a url");

    let effects = state.handle_key(key(KeyCode::Enter));

    assert!(effects.is_empty());
    assert_eq!(
        add_modal(&state).status,
        AddStatus::Editing {
            error: Some("Invalid URL format".to_string())
        }
    );
}

#[test]
fn empty_input_requires_url() {
    let mut state = loaded_state();
    open_form(&mut state);
    state.handle_key(key(KeyCode::Enter));
    assert_eq!(
        add_modal(&state).status,
        AddStatus::Editing {
            error: Some("URL is required".to_string())
        }
    );
}

#[test]
fn typing_q_goes_into_the_input() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "quit");
    assert_eq!(add_modal(&state).input, "quit");
    assert!(!state.should_quit());
}

#[test]
fn backspace_deletes_last_char() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://あ");
    state.handle_key(key(KeyCode::Backspace));
    assert_eq!(add_modal(&state).input, "https://");
}

#[test]
fn control_chords_are_not_typed() {
    let mut state = loaded_state();
    open_form(&mut state);
    state.handle_key(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL));
    assert_eq!(add_modal(&state).input, "");
}

#[test]
fn escape_discards_form() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://example.com");
    state.handle_key(key(KeyCode::Esc));
    assert!(matches!(state.mode(), Mode::List));
}

#[test]
fn valid_url_submits_trimmed() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "  https://example.com/post ");

    let effects = state.handle_key(key(KeyCode::Enter));

    assert!(matches!(
        effects.as_slice(),
        [Effect::CreateArticle { url, .. }] if url == "https://example.com/post"
    ));
    assert!(matches!(add_modal(&state).status, AddStatus::Submitting(_)));
}

#[test]
fn keys_are_ignored_while_submitting() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://example.com");
    submit(&mut state);

    type_text(&mut state, "xyz");
    assert!(state.handle_key(key(KeyCode::Enter)).is_empty());
    assert_eq!(add_modal(&state).input, "https://example.com");
}

#[test]
fn success_shows_then_closes_and_reloads() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://example.com/new");
    let request = submit(&mut state);

    let effects = state.handle_event(AppEvent::ArticleCreated {
        request,
        result: Ok(stored_article()),
    });
    assert_eq!(
        effects,
        vec![Effect::ScheduleAddClose {
            request,
            delay: ADD_SUCCESS_DELAY
        }]
    );
    assert_eq!(add_modal(&state).status, AddStatus::Succeeded(request));

    let effects = state.handle_event(AppEvent::AddSuccessElapsed { request });
    assert!(matches!(effects.as_slice(), [Effect::FetchArticles { .. }]));
    assert!(matches!(state.mode(), Mode::List));
    assert_eq!(state.load_state(), &LoadState::Loading);
}

#[test]
fn api_failure_is_shown_inline_and_editable() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://example.com/new");
    let request = submit(&mut state);

    state.handle_event(AppEvent::ArticleCreated {
        request,
        result: Err(ApiError::Status {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
        }),
    });

    assert_eq!(
        add_modal(&state).status,
        AddStatus::Editing {
            error: Some("API Error: 422 Unprocessable Entity".to_string())
        }
    );
    type_text(&mut state, "x");
    assert_eq!(add_modal(&state).input, "https://example.com/newx");
}

#[test]
fn success_after_dismissal_still_reloads() {
    let mut state = loaded_state();
    open_form(&mut state);
    type_text(&mut state, "https://example.com/new");
    let request = submit(&mut state);
    state.handle_key(key(KeyCode::Esc));

    let effects = state.handle_event(AppEvent::ArticleCreated {
        request,
        result: Ok(stored_article()),
    });
    assert!(matches!(effects.as_slice(), [Effect::FetchArticles { .. }]));
    assert!(matches!(state.mode(), Mode::List));
}

#[test]
fn clipboard_url_seeds_empty_input() {
    let mut state = loaded_state();
    let request = open_form(&mut state);
    state.handle_event(AppEvent::ClipboardRead {
        request,
        text: Some(" https://example.com/clip\n".to_string()),
    });
    assert_eq!(add_modal(&state).input, "https://example.com/clip");
}

#[test]
fn clipboard_non_url_is_ignored() {
    let mut state = loaded_state();
    let request = open_form(&mut state);
    state.handle_event(AppEvent::ClipboardRead {
        request,
        text: Some("just some words".to_string()),
    });
    assert_eq!(add_modal(&state).input, "");
}

#[test]
fn clipboard_does_not_overwrite_typed_input() {
    let mut state = loaded_state();
    let request = open_form(&mut state);
    type_text(&mut state, "h");
    state.handle_event(AppEvent::ClipboardRead {
        request,
        text: Some("https://example.com/clip".to_string()),
    });
    assert_eq!(add_modal(&state).input, "h");
}

#[test]
fn paste_appends_to_input() {
    let mut state = loaded_state();
    open_form(&mut state);
    state.handle_paste("https://example.com/p\n");
    assert_eq!(add_modal(&state).input, "https://example.com/p");
}
