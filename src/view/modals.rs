//! Reader, theme picker and add-article panels.

use super::boxes::{framed, glyph_row, styled_panel};
use super::styles::Palette;
use crate::config::ThemeName;
use crate::state::{AddArticleModal, AddStatus, ThemeModal};
use crate::view_state::panel::Panel;
use crate::view_state::reader::ReaderSession;
use crate::view_state::text::{fit_to_width, pad_to_width};
use crate::view_state::width::{char_width, display_width};
use ratatui::text::{Line, Span};

/// Theme picker width including borders.
pub const THEME_MODAL_WIDTH: usize = 40;
/// Add-article form width including borders.
pub const ADD_MODAL_WIDTH: usize = 52;
/// Shown in an empty URL field.
pub const URL_PLACEHOLDER: &str = "https://...";

const SWATCH: &str = "████";

/// Reader panel over the session's visible rows.
///
/// The label carries `[start-end/total]` once the text overflows.
pub fn reader_lines(session: &ReaderSession, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let position = session.position_label();
    let label = if position.is_empty() {
        "Reader".to_string()
    } else {
        format!("Reader {position}")
    };
    let panel = Panel::new(&label, &session.visible_lines(), width, 0);
    styled_panel(&panel, palette.border(), |_| palette.text())
}

/// Theme list with a colour preview under the highlighted entry.
pub fn theme_lines(modal: &ThemeModal, current: ThemeName, palette: &Palette) -> Vec<Line<'static>> {
    let inner = THEME_MODAL_WIDTH - 2;
    let mut rows = Vec::with_capacity(ThemeName::ALL.len() + 1);

    for (idx, name) in ThemeName::ALL.iter().enumerate() {
        let selected = idx == modal.cursor;
        let marker = if selected { '>' } else { ' ' };
        let suffix = if *name == current { " (current)" } else { "" };
        let label = fit_to_width(&format!("{marker} {name}{suffix}"), inner);
        let style = if selected {
            palette.highlight()
        } else {
            palette.dim()
        };
        rows.push(vec![Span::styled(label, style)]);

        if selected {
            rows.push(swatch_row(*name, inner, palette));
        }
    }

    let panel = Panel::new::<&str>("Theme", &[], THEME_MODAL_WIDTH, 0);
    framed(&panel, rows, palette.border())
}

fn swatch_row(theme: ThemeName, inner: usize, palette: &Palette) -> Vec<Span<'static>> {
    let colors = theme.colors();
    let mut spans = vec![Span::raw("  ")];
    for (i, color) in [colors.primary, colors.secondary, colors.accent, colors.text_dim]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(SWATCH, palette.swatch(color)));
    }
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
    spans
}

/// Longest suffix of `s` that fits in `max_width` columns.
///
/// Keeps the end of a long URL visible while it is being typed.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices().rev() {
        width += char_width(ch);
        if width > max_width {
            return &s[idx + ch.len_utf8()..];
        }
    }
    s
}

/// Add-article form in its current state.
pub fn add_article_lines(modal: &AddArticleModal, spinner: &str, palette: &Palette) -> Vec<Line<'static>> {
    let inner = ADD_MODAL_WIDTH - 2;
    let row = |text: String, style| vec![Span::styled(fit_to_width(&text, inner), style)];
    let blank = || vec![Span::raw(" ".repeat(inner))];

    let mut rows = vec![blank()];
    match &modal.status {
        AddStatus::Submitting(_) => {
            rows.push(row(format!(" {spinner} Adding article..."), palette.spinner()));
        }
        AddStatus::Succeeded(_) => {
            rows.push(glyph_row(" ", '✓', " Article added successfully!", inner, palette.success()));
        }
        AddStatus::Editing { error } => {
            rows.push(row(" Enter article URL:".to_string(), palette.text()));
            rows.push(input_row(&modal.input, inner, palette));
            if let Some(error) = error {
                rows.push(row(format!(" {error}"), palette.error()));
            }
        }
    }
    rows.push(blank());

    let panel = Panel::new::<&str>("Add Article", &[], ADD_MODAL_WIDTH, 0);
    framed(&panel, rows, palette.border())
}

/// ` {input}█`, or the placeholder when empty.
fn input_row(input: &str, inner: usize, palette: &Palette) -> Vec<Span<'static>> {
    if input.is_empty() {
        return vec![
            Span::raw(" "),
            Span::styled("█", palette.text()),
            Span::styled(
                pad_to_width(URL_PLACEHOLDER, inner.saturating_sub(2)),
                palette.dim(),
            ),
        ];
    }
    let visible = tail_to_width(input, inner.saturating_sub(2));
    vec![
        Span::raw(" "),
        Span::styled(visible.to_string(), palette.text()),
        Span::styled("█", palette.text()),
        Span::raw(" ".repeat(inner.saturating_sub(display_width(visible) + 2))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestId;
    use crate::view::boxes::line_text;
    use crate::view::styles::ColorConfig;

    fn palette() -> Palette {
        Palette::new(ThemeName::Default, ColorConfig::new(false))
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn assert_width(lines: &[Line<'_>], width: usize) {
        for line in lines {
            assert_eq!(display_width(&line_text(line)), width, "line {:?}", line_text(line));
        }
    }

    #[test]
    fn reader_label_shows_position_when_overflowing() {
        let text = (1..=25).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let session = ReaderSession::new(text, 30, 10);
        let lines = reader_lines(&session, 32, &palette());
        assert!(line_text(&lines[0]).starts_with("╭─ Reader [1-10/25] "));
        assert_eq!(lines.len(), 12);
        assert_width(&lines, 32);
    }

    #[test]
    fn reader_label_is_plain_when_text_fits() {
        let session = ReaderSession::new("short", 30, 10);
        let lines = reader_lines(&session, 32, &palette());
        assert!(line_text(&lines[0]).starts_with("╭─ Reader ─"));
    }

    #[test]
    fn theme_picker_lists_all_themes_and_preview() {
        let modal = ThemeModal::new(ThemeName::Nord);
        let lines = theme_lines(&modal, ThemeName::Nord, &palette());
        // rules + every theme + one swatch row
        assert_eq!(lines.len(), ThemeName::ALL.len() + 3);
        assert_width(&lines, THEME_MODAL_WIDTH);

        let all = texts(&lines);
        assert!(all.iter().any(|l| l.starts_with("│> nord (current)")));
        assert!(all.iter().any(|l| l.contains("████ ████ ████ ████")));
    }

    #[test]
    fn theme_picker_marks_current_separately_from_cursor() {
        let mut modal = ThemeModal::new(ThemeName::Default);
        modal.next();
        let all = texts(&theme_lines(&modal, ThemeName::Default, &palette()));
        assert!(all.iter().any(|l| l.starts_with("│  default (current)")));
        assert!(all.iter().any(|l| l.starts_with("│> ocean")));
    }

    #[test]
    fn add_form_shows_prompt_input_and_error() {
        let mut modal = AddArticleModal::new(RequestId::new(1));
        modal.input = "not a url".into();
        modal.status = AddStatus::Editing {
            error: Some("Invalid URL format".into()),
        };
        let lines = add_article_lines(&modal, "⠋", &palette());
        assert_width(&lines, ADD_MODAL_WIDTH);
        let all = texts(&lines);
        assert!(all[0].starts_with("╭─ Add Article "));
        assert!(all[2].contains("Enter article URL:"));
        assert!(all[3].contains("not a url█"));
        assert!(all[4].contains("Invalid URL format"));
    }

    #[test]
    fn add_form_placeholder_when_empty() {
        let modal = AddArticleModal::new(RequestId::new(1));
        let lines = add_article_lines(&modal, "⠋", &palette());
        assert_width(&lines, ADD_MODAL_WIDTH);
        assert!(line_text(&lines[3]).contains(URL_PLACEHOLDER));
    }

    #[test]
    fn add_form_progress_states() {
        let mut modal = AddArticleModal::new(RequestId::new(1));
        modal.status = AddStatus::Submitting(RequestId::new(2));
        let all = texts(&add_article_lines(&modal, "⠹", &palette()));
        assert!(all[2].contains("⠹ Adding article..."));

        modal.status = AddStatus::Succeeded(RequestId::new(2));
        let all = texts(&add_article_lines(&modal, "⠹", &palette()));
        assert!(all[2].contains("✓ Article added successfully!"));
    }

    #[test]
    fn long_input_keeps_its_tail() {
        let mut modal = AddArticleModal::new(RequestId::new(1));
        modal.input = format!("https://example.com/{}end", "x".repeat(80));
        let lines = add_article_lines(&modal, "⠋", &palette());
        assert_width(&lines, ADD_MODAL_WIDTH);
        assert!(line_text(&lines[3]).contains("xend█"));
    }

    #[test]
    fn tail_to_width_respects_wide_chars() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("aあい", 4), "あい");
        assert_eq!(tail_to_width("aあい", 3), "い");
        assert_eq!(tail_to_width("ab", 5), "ab");
    }
}
