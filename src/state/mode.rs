//! The mutually exclusive screens of the app and their per-screen state.

use super::effect::RequestId;
use crate::config::ThemeName;
use crate::view_state::reader::ReaderSession;

/// Active screen. Exactly one is active at a time.
#[derive(Debug, Clone, Default)]
pub enum Mode {
    /// Article list with the detail header.
    #[default]
    List,
    /// Full-text reader over the selected article.
    Reader(ReaderModal),
    /// Theme picker.
    Theme(ThemeModal),
    /// Add-article form.
    AddArticle(AddArticleModal),
}

impl Mode {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::List => "list",
            Mode::Reader(_) => "reader",
            Mode::Theme(_) => "theme",
            Mode::AddArticle(_) => "add-article",
        }
    }
}

/// Reader modal.
#[derive(Debug, Clone)]
pub struct ReaderModal {
    /// Request whose result this modal is waiting for.
    pub request: RequestId,
    /// Article URL.
    pub url: String,
    /// Loading progress.
    pub status: ReaderStatus,
}

/// Reader loading progress.
#[derive(Debug, Clone)]
pub enum ReaderStatus {
    /// Fetch in flight.
    Loading,
    /// Fetch or extraction failed.
    Failed,
    /// Content ready to page through.
    Ready(ReaderSession),
}

/// Theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeModal {
    /// Highlighted row, always within `0..ThemeName::ALL.len()`.
    pub cursor: usize,
}

impl ThemeModal {
    /// Picker opened on `current`.
    pub fn new(current: ThemeName) -> Self {
        Self {
            cursor: current.index(),
        }
    }

    /// Move down, stopping at the last theme.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1).min(ThemeName::ALL.len() - 1);
    }

    /// Move up, stopping at the first theme.
    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Theme under the cursor.
    pub fn highlighted(&self) -> ThemeName {
        ThemeName::ALL
            .get(self.cursor)
            .copied()
            .unwrap_or_default()
    }
}

/// Add-article form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArticleModal {
    /// Text typed so far.
    pub input: String,
    /// Form progress.
    pub status: AddStatus,
    /// Clipboard read that may seed `input`.
    pub clipboard: RequestId,
}

impl AddArticleModal {
    /// Empty form waiting on clipboard read `clipboard`.
    pub fn new(clipboard: RequestId) -> Self {
        Self {
            input: String::new(),
            status: AddStatus::Editing { error: None },
            clipboard,
        }
    }
}

/// Add-article form progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStatus {
    /// Accepting input; `error` is the last validation or API failure.
    Editing {
        /// Message shown under the input.
        error: Option<String>,
    },
    /// Submission in flight.
    Submitting(RequestId),
    /// Saved; closes when the success delay elapses.
    Succeeded(RequestId),
}
