//! Rounded box panels built from plain strings.

use super::text::fit_to_width;
use super::width::display_width;

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
/// Vertical border glyph, exposed so renderers can style it separately.
pub const VERTICAL: char = '│';

/// A rendered box: a labelled top rule, content rows, and a bottom rule.
///
/// Content rows hold only the inner text (exactly `width - 2` columns); the
/// vertical bars are added by [`Panel::lines`] or by a renderer that wants to
/// colour borders and content differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// `╭─ label ───╮`
    pub top: String,
    /// `╰──────────╯`
    pub bottom: String,
    /// Inner rows, each exactly `width - 2` columns wide.
    pub content: Vec<String>,
    /// Total width including both borders.
    pub width: usize,
}

impl Panel {
    /// Build a panel `width` columns wide.
    ///
    /// Each content line is prefixed with `padding` spaces, then truncated and
    /// padded to the inner width. A label too long for the top rule simply
    /// drops the trailing dashes.
    pub fn new<S: AsRef<str>>(label: &str, lines: &[S], width: usize, padding: usize) -> Self {
        let inner = width.saturating_sub(2);
        let pad = " ".repeat(padding);
        let content = lines
            .iter()
            .map(|line| fit_to_width(&format!("{pad}{}", line.as_ref()), inner))
            .collect();

        Self {
            top: top_rule(label, inner),
            bottom: bottom_rule(inner),
            content,
            width,
        }
    }

    /// Inner width (between the vertical bars).
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    /// Total rows including both rules.
    pub fn height(&self) -> usize {
        self.content.len() + 2
    }

    /// Append blank rows until there are `rows` content rows.
    pub fn pad_rows(mut self, rows: usize) -> Self {
        let blank = " ".repeat(self.inner_width());
        while self.content.len() < rows {
            self.content.push(blank.clone());
        }
        self
    }

    /// Every row as a complete string, borders included.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.height());
        out.push(self.top.clone());
        out.extend(
            self.content
                .iter()
                .map(|row| format!("{VERTICAL}{row}{VERTICAL}")),
        );
        out.push(self.bottom.clone());
        out
    }
}

/// `╭─ {label} ` followed by dashes up to `inner`, closed with `╮`.
pub fn top_rule(label: &str, inner: usize) -> String {
    let dashes = inner.saturating_sub(display_width(label) + 3);
    let mut out = String::new();
    out.push(TOP_LEFT);
    out.push(HORIZONTAL);
    out.push(' ');
    out.push_str(label);
    out.push(' ');
    out.extend(std::iter::repeat_n(HORIZONTAL, dashes));
    out.push(TOP_RIGHT);
    out
}

/// `╰` + `inner` dashes + `╯`.
pub fn bottom_rule(inner: usize) -> String {
    let mut out = String::new();
    out.push(BOTTOM_LEFT);
    out.extend(std::iter::repeat_n(HORIZONTAL, inner));
    out.push(BOTTOM_RIGHT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_has_panel_width() {
        let panel = Panel::new("Detail", &["hello", "あいう"], 20, 1);
        for line in panel.lines() {
            assert_eq!(display_width(&line), 20, "line {line:?}");
        }
    }

    #[test]
    fn top_rule_embeds_label() {
        let panel = Panel::new("Theme", &[] as &[&str], 12, 0);
        assert_eq!(panel.top, "╭─ Theme ──╮");
        assert_eq!(panel.bottom, "╰──────────╯");
    }

    #[test]
    fn content_rows_are_padded_and_prefixed() {
        let panel = Panel::new("X", &["ab"], 8, 2);
        assert_eq!(panel.content, vec!["  ab  ".to_string()]);
        assert_eq!(panel.lines()[1], "│  ab  │");
    }

    #[test]
    fn long_content_is_cut_to_inner_width() {
        let panel = Panel::new("X", &["abcdefghij"], 6, 0);
        assert_eq!(panel.content, vec!["abcd".to_string()]);
    }

    #[test]
    fn oversized_label_clamps_dashes_to_zero() {
        let top = top_rule("A very long label", 5);
        assert_eq!(top, "╭─ A very long label ╮");
    }

    #[test]
    fn pad_rows_fills_with_blank_rows() {
        let panel = Panel::new("X", &["a"], 5, 0).pad_rows(3);
        assert_eq!(panel.content.len(), 3);
        assert_eq!(panel.content[2], "   ");
        assert_eq!(panel.height(), 5);
    }

    #[test]
    fn zero_width_panel_does_not_panic() {
        let panel = Panel::new("X", &["abc"], 0, 1);
        assert_eq!(panel.inner_width(), 0);
        assert_eq!(panel.content, vec![String::new()]);
    }
}
