//! Acceptance test harness for TUI testing
//!
//! Fakes for every collaborator plus a wrapper around
//! `TuiApp<TestBackend>` with convenient methods for simulating user
//! interactions.

use crate::api::{ContentExtractor, CurationApi};
use crate::config::{Config, ConfigError, ConfigStore, MemoryConfigStore, ThemeName};
use crate::model::{ApiError, Article, ArticleListResponse, DiscoveryItem, ReaderContent};
use crate::state::AppState;
use crate::view::{ColorConfig, Desktop, Services, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long harness helpers wait for a worker thread.
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Empty trailing lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Article fixture.
pub fn article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        reading_time_minutes: Some(3),
        ..Article::default()
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        reason: "Internal Server Error".to_string(),
    }
}

// ===== Fakes =====

/// In-memory [`CurationApi`] that records every call.
#[derive(Debug, Default)]
pub struct FakeApi {
    articles: Mutex<Vec<Article>>,
    discovery: Mutex<Vec<DiscoveryItem>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<bool>,
}

impl FakeApi {
    /// API serving `articles`.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            ..Self::default()
        }
    }

    /// Replace the discovery feed.
    pub fn set_discovery(&self, items: Vec<DiscoveryItem>) {
        *self.discovery.lock().unwrap() = items;
    }

    /// Make every call fail with a 500.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Calls so far, as `name:arg`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if *self.failing.lock().unwrap() {
            Err(server_error())
        } else {
            Ok(())
        }
    }

    fn matching(&self, query: &str) -> Vec<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect()
    }
}

impl CurationApi for FakeApi {
    fn list_articles(&self, page: u32, page_size: u32) -> Result<ArticleListResponse, ApiError> {
        self.record(format!("list:{page}:{page_size}"))?;
        let articles = self.articles.lock().unwrap().clone();
        Ok(ArticleListResponse {
            total: Some(articles.len() as u64),
            articles,
            page: Some(page),
            page_size: Some(page_size),
        })
    }

    fn get_article(&self, id: &str) -> Result<Article, ApiError> {
        self.record(format!("get:{id}"))?;
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                reason: "Not Found".to_string(),
            })
    }

    fn search_articles(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        self.record(format!("search:{query}"))?;
        Ok(self.matching(query))
    }

    fn semantic_search(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        self.record(format!("semantic:{query}"))?;
        Ok(self.matching(query))
    }

    fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("mark:{id}"))?;
        self.articles.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"))?;
        self.articles.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    fn create_article(&self, url: &str) -> Result<Article, ApiError> {
        self.record(format!("create:{url}"))?;
        let mut articles = self.articles.lock().unwrap();
        let created = Article {
            id: format!("new{}", articles.len()),
            title: "Created".to_string(),
            url: url.to_string(),
            ..Article::default()
        };
        articles.push(created.clone());
        Ok(created)
    }

    fn list_discovery(&self) -> Result<Vec<DiscoveryItem>, ApiError> {
        self.record("discovery".to_string())?;
        Ok(self.discovery.lock().unwrap().clone())
    }

    fn dismiss_discovery(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("dismiss:{id}"))?;
        self.discovery.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }
}

/// Extractor returning fixed text for every URL, or `None` when empty.
#[derive(Debug, Default)]
pub struct FakeExtractor {
    text: Option<String>,
}

impl FakeExtractor {
    /// Extractor returning `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ContentExtractor for FakeExtractor {
    fn extract(&self, _url: &str) -> Option<ReaderContent> {
        self.text.as_ref().map(|text| ReaderContent {
            title: "Fixture".to_string(),
            text_content: text.clone(),
            ..ReaderContent::default()
        })
    }
}

/// Desktop with a fixed clipboard that records opened URLs.
#[derive(Debug, Default)]
pub struct FakeDesktop {
    clipboard: Option<String>,
    opened: Mutex<Vec<String>>,
}

impl FakeDesktop {
    /// Desktop whose clipboard holds `text`.
    pub fn with_clipboard(text: impl Into<String>) -> Self {
        Self {
            clipboard: Some(text.into()),
            ..Self::default()
        }
    }

    /// URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Desktop for FakeDesktop {
    fn read_clipboard(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn open_url(&self, url: &str) -> std::io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ===== Harness =====

/// Test harness for acceptance testing
///
/// Wraps `TuiApp<TestBackend>` with fakes behind every collaborator.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    api: Arc<FakeApi>,
    desktop: Arc<FakeDesktop>,
    store: Arc<MemoryConfigStore>,
}

impl AcceptanceTestHarness {
    /// App of `width × height` with the first article load applied.
    pub fn new(
        api: FakeApi,
        extractor: FakeExtractor,
        desktop: FakeDesktop,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let api = Arc::new(api);
        let desktop = Arc::new(desktop);
        let store = Arc::new(MemoryConfigStore::new(Config::default()));
        let services = Services {
            api: api.clone(),
            extractor: Arc::new(extractor),
            desktop: desktop.clone(),
        };
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::with_terminal(
            terminal,
            services,
            Box::new(SharedStore(store.clone())),
            ThemeName::Default,
            ColorConfig::new(false),
        )?;
        let mut harness = Self {
            app,
            api,
            desktop,
            store,
        };
        harness.settle();
        Ok(harness)
    }

    /// App over `articles` on an 100×30 terminal.
    pub fn with_articles(articles: Vec<Article>) -> Result<Self, TuiError> {
        Self::new(
            FakeApi::with_articles(articles),
            FakeExtractor::default(),
            FakeDesktop::default(),
            100,
            30,
        )
    }

    /// Send a key without modifiers.
    pub fn send_key(&mut self, key: KeyCode) {
        self.send_key_with_mods(key, KeyModifiers::NONE);
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) {
        self.app.handle_key(KeyEvent::new(key, mods));
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Wait for exactly one worker result.
    pub fn next_event(&mut self) -> bool {
        self.app.wait_for_event(EVENT_TIMEOUT)
    }

    /// Apply worker results until none arrive for a short while.
    pub fn settle(&mut self) {
        while self.app.wait_for_event(Duration::from_millis(200)) {}
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Draw and return the screen as text.
    pub fn render(&mut self) -> Result<String, TuiError> {
        self.app.draw()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }

    /// The fake API.
    pub fn api(&self) -> &FakeApi {
        &self.api
    }

    /// The fake desktop.
    pub fn desktop(&self) -> &FakeDesktop {
        &self.desktop
    }

    /// Config as last saved.
    pub fn saved_config(&self) -> Config {
        self.store.snapshot()
    }
}

/// Store handle shared between the app and the harness.
struct SharedStore(Arc<MemoryConfigStore>);

impl ConfigStore for SharedStore {
    fn load(&self) -> Result<Config, ConfigError> {
        self.0.load()
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        self.0.save(config)
    }
}
