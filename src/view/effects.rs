//! Runs [`Effect`]s for the event loop.
//!
//! Blocking work goes to a short-lived worker thread that posts its
//! [`AppEvent`] back over the loop's channel. Only theme persistence runs
//! inline: it is a small synchronous file write.

use crate::api::{ContentExtractor, CurationApi, DEFAULT_PAGE_SIZE};
use crate::config::{ConfigStore, ThemeName};
use crate::state::{AppEvent, Effect};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use tracing::{debug, instrument, warn};

/// Platform services outside the API: clipboard and URL opener.
pub trait Desktop: Send + Sync {
    /// Current clipboard text, if any can be read.
    fn read_clipboard(&self) -> Option<String>;

    /// Open `url` with the platform handler.
    ///
    /// # Errors
    ///
    /// Returns error if no handler could be launched.
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}

/// [`Desktop`] backed by `arboard` and `open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDesktop;

impl Desktop for SystemDesktop {
    fn read_clipboard(&self) -> Option<String> {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(error = %e, "Clipboard unavailable");
                None
            }
        }
    }

    fn open_url(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Collaborators the effects run against.
#[derive(Clone)]
pub struct Services {
    /// CuraQ API.
    pub api: Arc<dyn CurationApi>,
    /// Reader-mode extractor.
    pub extractor: Arc<dyn ContentExtractor>,
    /// Clipboard and browser.
    pub desktop: Arc<dyn Desktop>,
}

/// Executes effects, posting results to `events`.
pub struct EffectRunner {
    services: Services,
    store: Box<dyn ConfigStore>,
    events: Sender<AppEvent>,
}

impl EffectRunner {
    /// Runner posting to `events`.
    pub fn new(services: Services, store: Box<dyn ConfigStore>, events: Sender<AppEvent>) -> Self {
        Self {
            services,
            store,
            events,
        }
    }

    /// Run every effect in order.
    pub fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    /// Start one effect. Returns once the work is handed off.
    #[instrument(skip(self), level = "debug")]
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchArticles { request } => self.spawn(move |s| AppEvent::ArticlesLoaded {
                request,
                result: s
                    .api
                    .list_articles(1, DEFAULT_PAGE_SIZE)
                    .map(|page| page.articles),
            }),
            Effect::FetchReader { request, url } => self.spawn(move |s| AppEvent::ReaderLoaded {
                request,
                content: s.extractor.extract(&url),
            }),
            Effect::MarkRead { id } => self.spawn(move |s| {
                let result = s.api.mark_read(&id);
                AppEvent::MarkReadFinished { id, result }
            }),
            Effect::DeleteArticle { id } => self.spawn(move |s| {
                let result = s.api.delete_article(&id);
                AppEvent::DeleteFinished { id, result }
            }),
            Effect::CreateArticle { request, url } => self.spawn(move |s| AppEvent::ArticleCreated {
                request,
                result: s.api.create_article(&url),
            }),
            Effect::ReadClipboard { request } => self.spawn(move |s| AppEvent::ClipboardRead {
                request,
                text: s.desktop.read_clipboard(),
            }),
            Effect::ScheduleAddClose { request, delay } => self.spawn(move |_| {
                thread::sleep(delay);
                AppEvent::AddSuccessElapsed { request }
            }),
            Effect::OpenUrl { url } => {
                let desktop = Arc::clone(&self.services.desktop);
                thread::spawn(move || {
                    if let Err(e) = desktop.open_url(&url) {
                        warn!(%url, error = %e, "Failed to open browser");
                    }
                });
            }
            Effect::PersistTheme(theme) => self.persist_theme(theme),
        }
    }

    fn persist_theme(&self, theme: ThemeName) {
        let saved = self.store.load().and_then(|mut config| {
            config.theme = Some(theme);
            self.store.save(&config)
        });
        match saved {
            Ok(()) => debug!(%theme, "Theme saved"),
            Err(e) => warn!(%theme, error = %e, "Failed to save theme"),
        }
    }

    fn spawn<F>(&self, work: F)
    where
        F: FnOnce(&Services) -> AppEvent + Send + 'static,
    {
        let services = self.services.clone();
        let events = self.events.clone();
        thread::spawn(move || {
            // The loop may already have exited; nothing left to notify.
            let _ = events.send(work(&services));
        });
    }
}

#[cfg(test)]
#[path = "effects_tests.rs"]
mod tests;
