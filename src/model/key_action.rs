//! Keyboard actions, independent of the keys bound to them.

/// What the user asked for.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings). The add-article modal reads
/// raw keys instead, since it is a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Next row, or scroll down a step. Default: j/↓
    Down,
    /// Previous row, or scroll up a step. Default: k/↑
    Up,
    /// Scroll down a page in the reader. Default: Space/Page Down
    PageDown,
    /// Scroll up a page in the reader. Default: Page Up
    PageUp,
    /// Open the selection or apply the highlighted choice. Default: Enter
    Confirm,
    /// Leave the current modal. Default: Esc
    Back,
    /// Quit from the list, close from a modal. Default: q
    Quit,
    /// Open the add-article form. Default: a
    AddArticle,
    /// Mark the selected article read. Default: m
    MarkRead,
    /// Delete the selected article. Default: D
    Delete,
    /// Open the article URL in the browser. Default: o
    OpenInBrowser,
    /// Open the theme picker. Default: T
    ThemePicker,
    /// Reload the article list. Default: R/Ctrl+r
    Refresh,
}
