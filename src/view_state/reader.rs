//! Scrollable, pre-wrapped view over article text.

use super::text::process_text_content;

/// Lines moved by a single scroll step.
pub const LINE_STEP: usize = 3;
/// Lines moved by a page step.
pub const PAGE_STEP: usize = 15;

/// Scroll commands understood by [`ReaderSession::scroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderScroll {
    /// Back by [`LINE_STEP`].
    LineUp,
    /// Forward by [`LINE_STEP`].
    LineDown,
    /// Back by [`PAGE_STEP`].
    PageUp,
    /// Forward by [`PAGE_STEP`].
    PageDown,
}

/// Wrapped lines memoized for one `(text, width)` pair.
#[derive(Debug, Clone)]
struct LineCache {
    width: usize,
    lines: Vec<String>,
}

/// Reader pagination state.
///
/// `processed_lines` are derived from the source text once per width and
/// reused across keystrokes. The scroll offset always stays within
/// `0..=max_scroll()`.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    source_text: String,
    cache: LineCache,
    scroll_offset: usize,
    viewport_height: usize,
}

impl ReaderSession {
    /// Open a session at the top of `text`.
    pub fn new(text: impl Into<String>, width: usize, viewport_height: usize) -> Self {
        let source_text = text.into();
        let lines = process_text_content(&source_text, width);
        Self {
            source_text,
            cache: LineCache { width, lines },
            scroll_offset: 0,
            viewport_height,
        }
    }

    /// Update the viewport.
    ///
    /// A width change re-wraps the text; any change re-clamps the offset.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        if width != self.cache.width {
            self.cache = LineCache {
                width,
                lines: process_text_content(&self.source_text, width),
            };
        }
        self.viewport_height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Source text the session was opened with.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// All wrapped, padded lines.
    pub fn processed_lines(&self) -> &[String] {
        &self.cache.lines
    }

    /// Number of wrapped lines.
    pub fn total_lines(&self) -> usize {
        self.cache.lines.len()
    }

    /// Width the lines were wrapped to.
    pub fn width(&self) -> usize {
        self.cache.width
    }

    /// Rows visible at once.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Largest valid offset, from the real wrapped line count.
    pub fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.viewport_height)
    }

    /// Apply a scroll command, clamped to `0..=max_scroll()`.
    pub fn scroll(&mut self, cmd: ReaderScroll) {
        let max = self.max_scroll();
        self.scroll_offset = match cmd {
            ReaderScroll::LineUp => self.scroll_offset.saturating_sub(LINE_STEP),
            ReaderScroll::LineDown => (self.scroll_offset + LINE_STEP).min(max),
            ReaderScroll::PageUp => self.scroll_offset.saturating_sub(PAGE_STEP),
            ReaderScroll::PageDown => (self.scroll_offset + PAGE_STEP).min(max),
        };
    }

    /// Exactly `viewport_height` rows, blank-filled past the end of the text.
    pub fn visible_lines(&self) -> Vec<String> {
        let end = (self.scroll_offset + self.viewport_height).min(self.total_lines());
        let mut rows: Vec<String> = self.cache.lines[self.scroll_offset.min(end)..end].to_vec();
        let blank = " ".repeat(self.cache.width);
        rows.resize(self.viewport_height, blank);
        rows
    }

    /// `[start-end/total]`, 1-indexed and inclusive, when the text overflows
    /// the viewport; empty otherwise.
    pub fn position_label(&self) -> String {
        let total = self.total_lines();
        if total <= self.viewport_height {
            return String::new();
        }
        let start = self.scroll_offset + 1;
        let end = (self.scroll_offset + self.viewport_height).min(total);
        format!("[{start}-{end}/{total}]")
    }
}
