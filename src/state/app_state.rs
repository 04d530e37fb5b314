//! Application state and the list/reader transitions.

use super::effect::{AppEvent, Effect, RequestCounter, RequestId, ADD_SUCCESS_DELAY};
use super::modal_handler::{handle_add_article_key, handle_theme_modal_key};
use super::mode::{AddArticleModal, AddStatus, Mode, ReaderModal, ReaderStatus, ThemeModal};
use crate::config::{KeyBindings, ThemeName};
use crate::model::{is_http_url, Article, KeyAction};
use crate::view_state::layout::ScreenLayout;
use crate::view_state::reader::{ReaderScroll, ReaderSession};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Frames of the pending-work spinner.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress of the article list load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Request in flight.
    Loading,
    /// Articles available.
    Loaded,
    /// Request failed; shown full screen with a retry key.
    Failed(String),
}

/// Best-effort action running against one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Mark-read request in flight.
    MarkRead,
    /// Delete request in flight.
    Delete,
}

/// Everything the renderer needs, mutated only through key and event
/// handlers.
#[derive(Debug)]
pub struct AppState {
    articles: Vec<Article>,
    selected: usize,
    load: LoadState,
    articles_request: Option<RequestId>,
    theme: ThemeName,
    pub(super) mode: Mode,
    pending: HashMap<String, PendingAction>,
    requests: RequestCounter,
    spinner_frame: usize,
    layout: ScreenLayout,
    key_bindings: KeyBindings,
    should_quit: bool,
}

impl AppState {
    /// State for a `width × height` terminal using `theme`, before the first
    /// load. Call [`AppState::start`] to get the initial effects.
    pub fn new(theme: ThemeName, width: u16, height: u16) -> Self {
        Self {
            articles: Vec::new(),
            selected: 0,
            load: LoadState::Loading,
            articles_request: None,
            theme,
            mode: Mode::List,
            pending: HashMap::new(),
            requests: RequestCounter::default(),
            spinner_frame: 0,
            layout: ScreenLayout::new(width as usize, height as usize),
            key_bindings: KeyBindings::default(),
            should_quit: false,
        }
    }

    /// Effects to run at startup: the first article load.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![self.begin_reload()]
    }

    // ===== Accessors =====

    /// Loaded articles, in server order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Selected list index; 0 when the list is empty.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selected article, if any.
    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// List load progress.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Active theme.
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Active mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Pending action on article `id`, if any.
    pub fn pending(&self, id: &str) -> Option<PendingAction> {
        self.pending.get(id).copied()
    }

    /// Current spinner glyph.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Row budget for the current terminal size.
    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// True once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sum of known reading times.
    pub fn total_reading_minutes(&self) -> u32 {
        self.articles.iter().map(Article::reading_minutes).sum()
    }

    // ===== Inputs =====

    /// Advance the spinner.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Apply a terminal resize. The reader re-wraps only when its width
    /// changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::new(width as usize, height as usize);
        let (text_width, rows) = (self.layout.content_width(), self.layout.content_rows());
        if let Mode::Reader(ReaderModal {
            status: ReaderStatus::Ready(session),
            ..
        }) = &mut self.mode
        {
            session.set_viewport(text_width, rows);
        }
    }

    /// Route a key to the active mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Quit requested (Ctrl+C)");
            self.should_quit = true;
            return Vec::new();
        }

        if matches!(self.mode, Mode::AddArticle(_)) {
            return handle_add_article_key(self, key);
        }

        let Some(action) = self.key_bindings.get(key) else {
            return Vec::new();
        };

        match self.mode {
            Mode::List => self.handle_list_action(action),
            Mode::Reader(_) => self.handle_reader_action(action),
            Mode::Theme(_) => handle_theme_modal_key(self, action),
            Mode::AddArticle(_) => Vec::new(),
        }
    }

    /// Append pasted text to the add-article input.
    pub fn handle_paste(&mut self, text: &str) {
        if let Mode::AddArticle(AddArticleModal {
            input,
            status: AddStatus::Editing { .. },
            ..
        }) = &mut self.mode
        {
            input.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    /// Apply the outcome of an effect.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::ArticlesLoaded { request, result } => {
                if self.articles_request != Some(request) {
                    debug!(request = request.get(), "Dropping superseded article list");
                    return Vec::new();
                }
                match result {
                    Ok(articles) => {
                        info!(count = articles.len(), "Articles loaded");
                        self.articles = articles;
                        self.clamp_selection();
                        self.load = LoadState::Loaded;
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to load articles");
                        self.load = LoadState::Failed(e.to_string());
                    }
                }
                Vec::new()
            }

            AppEvent::ReaderLoaded { request, content } => {
                let (width, rows) = (self.layout.content_width(), self.layout.content_rows());
                match &mut self.mode {
                    Mode::Reader(modal) if modal.request == request => {
                        modal.status = match content {
                            Some(content) => {
                                ReaderStatus::Ready(ReaderSession::new(content.reader_text(), width, rows))
                            }
                            None => ReaderStatus::Failed,
                        };
                    }
                    _ => debug!(request = request.get(), "Dropping stale reader content"),
                }
                Vec::new()
            }

            AppEvent::MarkReadFinished { id, result } | AppEvent::DeleteFinished { id, result } => {
                let action = self.pending.remove(&id);
                match result {
                    Ok(()) => {
                        debug!(%id, ?action, "Article removed from queue");
                        self.remove_article(&id);
                    }
                    Err(e) => warn!(%id, ?action, error = %e, "Article action failed"),
                }
                Vec::new()
            }

            AppEvent::ArticleCreated { request, result } => {
                let submitting = matches!(
                    &self.mode,
                    Mode::AddArticle(AddArticleModal { status: AddStatus::Submitting(r), .. }) if *r == request
                );
                match (submitting, result) {
                    (true, Ok(article)) => {
                        info!(id = %article.id, "Article added");
                        self.set_add_status(AddStatus::Succeeded(request));
                        vec![Effect::ScheduleAddClose {
                            request,
                            delay: ADD_SUCCESS_DELAY,
                        }]
                    }
                    (true, Err(e)) => {
                        warn!(error = %e, "Failed to add article");
                        self.set_add_status(AddStatus::Editing {
                            error: Some(e.to_string()),
                        });
                        Vec::new()
                    }
                    // Form was dismissed while the request ran; the article
                    // still exists server-side.
                    (false, Ok(_)) => vec![self.begin_reload()],
                    (false, Err(e)) => {
                        warn!(error = %e, "Add-article failed after the form closed");
                        Vec::new()
                    }
                }
            }

            AppEvent::ClipboardRead { request, text } => {
                if let Mode::AddArticle(modal) = &mut self.mode {
                    let fresh = modal.clipboard == request
                        && modal.input.is_empty()
                        && matches!(modal.status, AddStatus::Editing { .. });
                    if let Some(url) = text.map(|t| t.trim().to_string()).filter(|t| fresh && is_http_url(t)) {
                        debug!("Seeding add-article input from clipboard");
                        modal.input = url;
                    }
                }
                Vec::new()
            }

            AppEvent::AddSuccessElapsed { request } => {
                if matches!(
                    &self.mode,
                    Mode::AddArticle(AddArticleModal { status: AddStatus::Succeeded(r), .. }) if *r == request
                ) {
                    self.mode = Mode::List;
                }
                vec![self.begin_reload()]
            }
        }
    }

    // ===== Mode handlers =====

    fn handle_list_action(&mut self, action: KeyAction) -> Vec<Effect> {
        if action == KeyAction::Quit {
            info!("Quit requested");
            self.should_quit = true;
            return Vec::new();
        }
        if action == KeyAction::Refresh {
            return vec![self.begin_reload()];
        }
        if self.load != LoadState::Loaded {
            return Vec::new();
        }

        match action {
            KeyAction::Down => {
                if !self.articles.is_empty() {
                    self.selected = (self.selected + 1).min(self.articles.len() - 1);
                }
                Vec::new()
            }
            KeyAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            KeyAction::Confirm => {
                let Some(url) = self.selected_article().map(|a| a.url.clone()) else {
                    return Vec::new();
                };
                if url.is_empty() {
                    return Vec::new();
                }
                let request = self.requests.next();
                debug!(request = request.get(), %url, "Opening reader");
                self.mode = Mode::Reader(ReaderModal {
                    request,
                    url: url.clone(),
                    status: ReaderStatus::Loading,
                });
                vec![Effect::FetchReader { request, url }]
            }
            KeyAction::AddArticle => {
                let request = self.requests.next();
                self.mode = Mode::AddArticle(AddArticleModal::new(request));
                vec![Effect::ReadClipboard { request }]
            }
            KeyAction::ThemePicker => {
                self.mode = Mode::Theme(ThemeModal::new(self.theme));
                Vec::new()
            }
            KeyAction::MarkRead => self.start_pending(PendingAction::MarkRead),
            KeyAction::Delete => self.start_pending(PendingAction::Delete),
            KeyAction::OpenInBrowser => self.open_selected(),
            _ => Vec::new(),
        }
    }

    fn handle_reader_action(&mut self, action: KeyAction) -> Vec<Effect> {
        let Mode::Reader(modal) = &mut self.mode else {
            return Vec::new();
        };

        let scroll = match action {
            KeyAction::Down => Some(ReaderScroll::LineDown),
            KeyAction::Up => Some(ReaderScroll::LineUp),
            KeyAction::PageDown => Some(ReaderScroll::PageDown),
            KeyAction::PageUp => Some(ReaderScroll::PageUp),
            _ => None,
        };
        if let Some(cmd) = scroll {
            if let ReaderStatus::Ready(session) = &mut modal.status {
                session.scroll(cmd);
            }
            return Vec::new();
        }

        match action {
            KeyAction::OpenInBrowser => vec![Effect::OpenUrl {
                url: modal.url.clone(),
            }],
            KeyAction::Back | KeyAction::Quit => {
                self.mode = Mode::List;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    // ===== Helpers =====

    /// Start a list load, superseding any in flight.
    fn begin_reload(&mut self) -> Effect {
        let request = self.requests.next();
        self.articles_request = Some(request);
        self.load = LoadState::Loading;
        Effect::FetchArticles { request }
    }

    fn start_pending(&mut self, action: PendingAction) -> Vec<Effect> {
        let Some(id) = self.selected_article().map(|a| a.id.clone()) else {
            return Vec::new();
        };
        if self.pending.contains_key(&id) {
            return Vec::new();
        }
        self.pending.insert(id.clone(), action);
        match action {
            PendingAction::MarkRead => vec![Effect::MarkRead { id }],
            PendingAction::Delete => vec![Effect::DeleteArticle { id }],
        }
    }

    fn open_selected(&self) -> Vec<Effect> {
        self.selected_article()
            .filter(|a| !a.url.is_empty())
            .map(|a| vec![Effect::OpenUrl { url: a.url.clone() }])
            .unwrap_or_default()
    }

    fn remove_article(&mut self, id: &str) {
        self.articles.retain(|a| a.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.articles.len().saturating_sub(1));
    }

    pub(super) fn set_add_status(&mut self, status: AddStatus) {
        if let Mode::AddArticle(modal) = &mut self.mode {
            modal.status = status;
        }
    }

    pub(super) fn next_request(&mut self) -> RequestId {
        self.requests.next()
    }

    pub(super) fn apply_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
