//! Tests for list/reader transitions and event handling.

use super::*;
use crate::model::{ApiError, ReaderContent};
use crossterm::event::KeyEventState;

// ===== Helpers =====

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn article(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {id}"),
        url: format!("https://example.com/{id}"),
        summary: None,
        content: None,
        tags: None,
        reading_time_minutes: Some(5),
        content_type: None,
        priority: None,
        created_at: None,
        updated_at: None,
        is_read: None,
    }
}

fn fetch_request(effects: &[Effect]) -> RequestId {
    match effects {
        [Effect::FetchArticles { request }] => *request,
        other => panic!("expected a single FetchArticles, got {other:?}"),
    }
}

/// State with `n` articles loaded, on a 100×40 terminal.
fn loaded(n: usize) -> AppState {
    let mut state = AppState::new(ThemeName::Default, 100, 40);
    let request = fetch_request(&state.start());
    let articles = (0..n).map(|i| article(&format!("a{i}"))).collect();
    state.handle_event(AppEvent::ArticlesLoaded {
        request,
        result: Ok(articles),
    });
    state
}

fn api_error() -> ApiError {
    ApiError::Status {
        status: 500,
        reason: "Internal Server Error".to_string(),
    }
}

fn open_reader(state: &mut AppState) -> RequestId {
    match state.handle_key(key(KeyCode::Enter)).as_slice() {
        [Effect::FetchReader { request, .. }] => *request,
        other => panic!("expected FetchReader, got {other:?}"),
    }
}

fn numbered_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== Loading =====

#[test]
fn starts_loading_and_requests_articles() {
    let mut state = AppState::new(ThemeName::Default, 80, 24);
    assert_eq!(state.load_state(), &LoadState::Loading);
    fetch_request(&state.start());
}

#[test]
fn loaded_articles_are_shown() {
    let state = loaded(3);
    assert_eq!(state.load_state(), &LoadState::Loaded);
    assert_eq!(state.articles().len(), 3);
    assert_eq!(state.total_reading_minutes(), 15);
}

#[test]
fn failed_load_shows_error_and_r_retries() {
    let mut state = AppState::new(ThemeName::Default, 80, 24);
    let request = fetch_request(&state.start());
    state.handle_event(AppEvent::ArticlesLoaded {
        request,
        result: Err(api_error()),
    });
    assert_eq!(
        state.load_state(),
        &LoadState::Failed("API Error: 500 Internal Server Error".to_string())
    );

    let retry = fetch_request(&state.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)));
    assert_ne!(retry, request);
    assert_eq!(state.load_state(), &LoadState::Loading);
}

#[test]
fn superseded_article_list_is_dropped() {
    let mut state = AppState::new(ThemeName::Default, 80, 24);
    let first = fetch_request(&state.start());
    let second = fetch_request(&state.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)));

    state.handle_event(AppEvent::ArticlesLoaded {
        request: first,
        result: Ok(vec![article("old")]),
    });
    assert_eq!(state.load_state(), &LoadState::Loading);

    state.handle_event(AppEvent::ArticlesLoaded {
        request: second,
        result: Ok(vec![article("new")]),
    });
    assert_eq!(state.articles()[0].id, "new");
}

#[test]
fn list_keys_are_ignored_while_loading() {
    let mut state = AppState::new(ThemeName::Default, 80, 24);
    state.start();
    assert!(state.handle_key(ch('a')).is_empty());
    assert!(matches!(state.mode(), Mode::List));
}

// ===== List navigation =====

#[test]
fn selection_clamps_at_both_ends() {
    let mut state = loaded(3);
    state.handle_key(ch('k'));
    assert_eq!(state.selected(), 0);

    for _ in 0..5 {
        state.handle_key(ch('j'));
    }
    assert_eq!(state.selected(), 2);

    state.handle_key(key(KeyCode::Up));
    assert_eq!(state.selected(), 1);
}

#[test]
fn navigation_on_empty_list_is_safe() {
    let mut state = loaded(0);
    state.handle_key(ch('j'));
    assert_eq!(state.selected(), 0);
    assert!(state.handle_key(key(KeyCode::Enter)).is_empty());
    assert!(state.handle_key(ch('m')).is_empty());
}

#[test]
fn q_quits_from_list() {
    let mut state = loaded(1);
    state.handle_key(ch('q'));
    assert!(state.should_quit());
}

#[test]
fn ctrl_c_quits_from_any_mode() {
    let mut state = loaded(1);
    state.handle_key(ch('a'));
    state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(state.should_quit());
}

#[test]
fn key_release_events_are_ignored() {
    let mut state = loaded(3);
    let release = KeyEvent {
        code: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    state.handle_key(release);
    assert_eq!(state.selected(), 0);
}

#[test]
fn o_opens_selected_url() {
    let mut state = loaded(2);
    state.handle_key(ch('j'));
    assert_eq!(
        state.handle_key(ch('o')),
        vec![Effect::OpenUrl {
            url: "https://example.com/a1".to_string()
        }]
    );
}

// ===== Mark read / delete =====

#[test]
fn mark_read_on_last_remaining_item_leaves_selection_zero() {
    let mut state = loaded(1);
    let effects = state.handle_key(ch('m'));
    assert_eq!(effects, vec![Effect::MarkRead { id: "a0".to_string() }]);
    assert_eq!(state.pending("a0"), Some(PendingAction::MarkRead));

    state.handle_event(AppEvent::MarkReadFinished {
        id: "a0".to_string(),
        result: Ok(()),
    });

    assert!(state.articles().is_empty());
    assert_eq!(state.selected(), 0);
    assert_eq!(state.pending("a0"), None);
}

#[test]
fn mark_read_on_last_row_moves_selection_up() {
    let mut state = loaded(3);
    state.handle_key(ch('j'));
    state.handle_key(ch('j'));
    state.handle_key(ch('m'));
    state.handle_event(AppEvent::MarkReadFinished {
        id: "a2".to_string(),
        result: Ok(()),
    });
    assert_eq!(state.articles().len(), 2);
    assert_eq!(state.selected(), 1);
}

#[test]
fn mark_read_failure_keeps_article() {
    let mut state = loaded(2);
    state.handle_key(ch('m'));
    state.handle_event(AppEvent::MarkReadFinished {
        id: "a0".to_string(),
        result: Err(api_error()),
    });
    assert_eq!(state.articles().len(), 2);
    assert_eq!(state.pending("a0"), None);
    assert_eq!(state.load_state(), &LoadState::Loaded);
}

#[test]
fn repeated_mark_read_is_not_resent() {
    let mut state = loaded(2);
    assert_eq!(state.handle_key(ch('m')).len(), 1);
    assert!(state.handle_key(ch('m')).is_empty());
}

#[test]
fn delete_removes_by_id_even_after_selection_moved() {
    let mut state = loaded(3);
    let effects = state.handle_key(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT));
    assert_eq!(effects, vec![Effect::DeleteArticle { id: "a0".to_string() }]);

    state.handle_key(ch('j'));
    state.handle_key(ch('j'));
    state.handle_event(AppEvent::DeleteFinished {
        id: "a0".to_string(),
        result: Ok(()),
    });

    let ids: Vec<_> = state.articles().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2"]);
    assert_eq!(state.selected(), 1);
}

// ===== Reader =====

#[test]
fn enter_opens_reader_in_loading_state() {
    let mut state = loaded(2);
    let effects = state.handle_key(key(KeyCode::Enter));
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchReader { url, .. }] if url == "https://example.com/a0"
    ));
    assert!(matches!(
        state.mode(),
        Mode::Reader(ReaderModal { status: ReaderStatus::Loading, .. })
    ));
}

#[test]
fn reader_content_uses_layout_viewport() {
    let mut state = loaded(1);
    let request = open_reader(&mut state);
    state.handle_event(AppEvent::ReaderLoaded {
        request,
        content: Some(ReaderContent {
            text_content: numbered_text(100),
            ..Default::default()
        }),
    });

    let Mode::Reader(ReaderModal { status: ReaderStatus::Ready(session), .. }) = state.mode() else {
        panic!("reader should be ready");
    };
    assert_eq!(session.width(), state.layout().content_width());
    assert_eq!(session.viewport_height(), state.layout().content_rows());
    assert_eq!(session.scroll_offset(), 0);
}

#[test]
fn reader_scrolls_with_keys() {
    let mut state = loaded(1);
    let request = open_reader(&mut state);
    state.handle_event(AppEvent::ReaderLoaded {
        request,
        content: Some(ReaderContent {
            text_content: numbered_text(200),
            ..Default::default()
        }),
    });

    state.handle_key(ch('j'));
    state.handle_key(ch(' '));
    state.handle_key(ch('k'));

    let Mode::Reader(ReaderModal { status: ReaderStatus::Ready(session), .. }) = state.mode() else {
        panic!("reader should be ready");
    };
    assert_eq!(session.scroll_offset(), 3 + 15 - 3);
}

#[test]
fn failed_extraction_shows_failure() {
    let mut state = loaded(1);
    let request = open_reader(&mut state);
    state.handle_event(AppEvent::ReaderLoaded { request, content: None });
    assert!(matches!(
        state.mode(),
        Mode::Reader(ReaderModal { status: ReaderStatus::Failed, .. })
    ));
}

#[test]
fn stale_reader_response_is_discarded() {
    let mut state = loaded(2);
    let first = open_reader(&mut state);
    state.handle_key(key(KeyCode::Esc));
    state.handle_key(ch('j'));
    let second = open_reader(&mut state);
    assert_ne!(first, second);

    state.handle_event(AppEvent::ReaderLoaded {
        request: first,
        content: Some(ReaderContent {
            text_content: "old article".into(),
            ..Default::default()
        }),
    });
    assert!(matches!(
        state.mode(),
        Mode::Reader(ReaderModal { status: ReaderStatus::Loading, .. })
    ));
}

#[test]
fn reader_response_after_close_is_discarded() {
    let mut state = loaded(1);
    let request = open_reader(&mut state);
    state.handle_key(ch('q'));
    state.handle_event(AppEvent::ReaderLoaded {
        request,
        content: Some(ReaderContent::default()),
    });
    assert!(matches!(state.mode(), Mode::List));
    assert!(!state.should_quit(), "q in the reader closes it, not the app");
}

#[test]
fn reader_o_opens_article_url() {
    let mut state = loaded(1);
    open_reader(&mut state);
    assert_eq!(
        state.handle_key(ch('o')),
        vec![Effect::OpenUrl {
            url: "https://example.com/a0".to_string()
        }]
    );
}

#[test]
fn resize_rewraps_open_reader() {
    let mut state = loaded(1);
    let request = open_reader(&mut state);
    state.handle_event(AppEvent::ReaderLoaded {
        request,
        content: Some(ReaderContent {
            text_content: "x".repeat(500),
            ..Default::default()
        }),
    });

    state.resize(60, 30);

    let Mode::Reader(ReaderModal { status: ReaderStatus::Ready(session), .. }) = state.mode() else {
        panic!("reader should be ready");
    };
    assert_eq!(session.width(), 58);
    assert_eq!(session.viewport_height(), state.layout().content_rows());
}

// ===== Theme / add entry points =====

#[test]
fn shift_t_opens_theme_picker_on_current_theme() {
    let mut state = AppState::new(ThemeName::Nord, 100, 40);
    let request = fetch_request(&state.start());
    state.handle_event(AppEvent::ArticlesLoaded { request, result: Ok(vec![]) });

    state.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
    assert!(matches!(
        state.mode(),
        Mode::Theme(modal) if modal.highlighted() == ThemeName::Nord
    ));
}

#[test]
fn a_opens_form_and_reads_clipboard() {
    let mut state = loaded(1);
    let effects = state.handle_key(ch('a'));
    assert!(matches!(effects.as_slice(), [Effect::ReadClipboard { .. }]));
    assert!(matches!(state.mode(), Mode::AddArticle(m) if m.input.is_empty()));
}

#[test]
fn spinner_cycles() {
    let mut state = loaded(0);
    let first = state.spinner();
    for _ in 0..SPINNER_FRAMES.len() {
        state.tick();
    }
    assert_eq!(state.spinner(), first);
    state.tick();
    assert_ne!(state.spinner(), first);
}
