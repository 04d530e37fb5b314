//! Side effects requested by the state machine, and the events that report
//! their outcome.
//!
//! The state machine never performs I/O. Key handling returns [`Effect`]s,
//! the shell runs them (on worker threads where they block) and feeds the
//! results back as [`AppEvent`]s.

use crate::config::ThemeName;
use crate::model::{ApiError, Article, ReaderContent};
use std::time::Duration;

/// How long the add-article success message stays up.
pub const ADD_SUCCESS_DELAY: Duration = Duration::from_secs(1);

/// Token tying an asynchronous result to the request that produced it.
///
/// Results whose token no longer matches the active request are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Wrap a raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Allocates increasing [`RequestId`]s.
#[derive(Debug, Default)]
pub(crate) struct RequestCounter(u64);

impl RequestCounter {
    pub(crate) fn next(&mut self) -> RequestId {
        self.0 += 1;
        RequestId(self.0)
    }
}

/// Work for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the unread article list.
    FetchArticles {
        /// Matches [`AppEvent::ArticlesLoaded`].
        request: RequestId,
    },
    /// Download and extract an article for the reader.
    FetchReader {
        /// Matches [`AppEvent::ReaderLoaded`].
        request: RequestId,
        /// Page to fetch.
        url: String,
    },
    /// Mark an article read.
    MarkRead {
        /// Article id.
        id: String,
    },
    /// Delete an article.
    DeleteArticle {
        /// Article id.
        id: String,
    },
    /// Save a new article.
    CreateArticle {
        /// Matches [`AppEvent::ArticleCreated`].
        request: RequestId,
        /// Validated URL.
        url: String,
    },
    /// Read the system clipboard to seed the add-article form.
    ReadClipboard {
        /// Matches [`AppEvent::ClipboardRead`].
        request: RequestId,
    },
    /// Open a URL with the platform handler.
    OpenUrl {
        /// Target.
        url: String,
    },
    /// Write the chosen theme to the config file.
    PersistTheme(ThemeName),
    /// Post [`AppEvent::AddSuccessElapsed`] after `delay`.
    ScheduleAddClose {
        /// Echoed back in the event.
        request: RequestId,
        /// Wait before posting.
        delay: Duration,
    },
}

/// Outcome of an [`Effect`], posted back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Article list arrived (or failed).
    ArticlesLoaded {
        /// From [`Effect::FetchArticles`].
        request: RequestId,
        /// Articles or the failure.
        result: Result<Vec<Article>, ApiError>,
    },
    /// Reader content arrived; `None` means extraction failed.
    ReaderLoaded {
        /// From [`Effect::FetchReader`].
        request: RequestId,
        /// Extracted content.
        content: Option<ReaderContent>,
    },
    /// Mark-read finished.
    MarkReadFinished {
        /// Article id.
        id: String,
        /// Outcome.
        result: Result<(), ApiError>,
    },
    /// Delete finished.
    DeleteFinished {
        /// Article id.
        id: String,
        /// Outcome.
        result: Result<(), ApiError>,
    },
    /// Add-article submission finished.
    ArticleCreated {
        /// From [`Effect::CreateArticle`].
        request: RequestId,
        /// Stored article or the failure.
        result: Result<Article, ApiError>,
    },
    /// Clipboard contents, if readable.
    ClipboardRead {
        /// From [`Effect::ReadClipboard`].
        request: RequestId,
        /// Clipboard text.
        text: Option<String>,
    },
    /// The add-article success message has been shown long enough.
    AddSuccessElapsed {
        /// From [`Effect::ScheduleAddClose`].
        request: RequestId,
    },
}
