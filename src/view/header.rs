//! Logo, detail panel and stats strip shown above every screen.

use super::boxes::{side_by_side, styled_panel};
use super::styles::Palette;
use crate::model::Article;
use crate::state::AppState;
use crate::view_state::layout::{
    HeaderStyle, LOGO_PADDING_X, LOGO_PADDING_Y, LOGO_PANEL_HEIGHT, LOGO_PANEL_WIDTH,
};
use crate::view_state::panel::Panel;
use crate::view_state::text::{truncate_with_ellipsis, wrap_to_width};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Label on the logo panel.
pub const LOGO_LABEL: &str = concat!("CuraQ-TUI v", env!("CARGO_PKG_VERSION"));

/// ASCII logo art, each row [`LOGO_WIDTH`](crate::view_state::layout::LOGO_WIDTH) columns wide.
pub const LOGO_ART: [&str; 6] = [
    " ██████╗██╗   ██╗██████╗  █████╗  ██████╗ ",
    "██╔════╝██║   ██║██╔══██╗██╔══██╗██╔═══██╗",
    "██║     ██║   ██║██████╔╝███████║██║   ██║",
    "╚██████╗╚██████╔╝██║  ██║██║  ██║╚██████╔╝",
    " ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝ ╚══▀▀═╝ ",
    "            CuraQ TUI Client              ",
];

/// Tags shown in the detail panel.
const DETAIL_TAG_LIMIT: usize = 5;

/// Bordered logo: label, vertical padding, art, vertical padding.
pub fn logo_panel() -> Panel {
    let blank = [""; LOGO_PADDING_Y];
    let rows: Vec<&str> = blank
        .iter()
        .chain(LOGO_ART.iter())
        .chain(blank.iter())
        .copied()
        .collect();
    Panel::new(LOGO_LABEL, &rows, LOGO_PANEL_WIDTH, LOGO_PADDING_X)
}

/// Styled logo panel.
pub fn logo_lines(palette: &Palette) -> Vec<Line<'static>> {
    styled_panel(&logo_panel(), palette.logo(), |_| palette.logo())
}

/// One detail-panel row and how to colour it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Row text, before fitting to the panel.
    pub text: String,
    /// Colour role.
    pub role: DetailRole,
}

/// Colour roles used in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRole {
    /// Article title.
    Title,
    /// Article URL.
    Url,
    /// Tag line.
    Tags,
    /// Metadata and placeholders.
    Dim,
    /// Summary text.
    Text,
}

/// Rows describing `article`, wrapped for an inner width of `inner`.
///
/// Every row starts with one space of padding. Rows past what the panel can
/// hold are kept; the caller clips.
pub fn detail_rows(article: Option<&Article>, inner: usize) -> Vec<DetailRow> {
    let row = |text: String, role| DetailRow { text, role };
    let Some(article) = article else {
        return vec![row(" No article selected".to_string(), DetailRole::Dim)];
    };

    let budget = inner.saturating_sub(2);
    let mut rows = vec![row(
        format!(" {}", truncate_with_ellipsis(article.display_title(), budget)),
        DetailRole::Title,
    )];

    if !article.url.is_empty() {
        rows.push(row(
            format!(" {}", truncate_with_ellipsis(&article.url, budget)),
            DetailRole::Url,
        ));
    }
    if let Some(tags) = article.hashtags(DETAIL_TAG_LIMIT) {
        rows.push(row(
            format!(" {}", truncate_with_ellipsis(&tags, budget)),
            DetailRole::Tags,
        ));
    }
    if article.reading_minutes() > 0 {
        rows.push(row(
            format!(" {} min read", article.reading_minutes()),
            DetailRole::Dim,
        ));
    }
    if let Some(date) = article.added_on() {
        rows.push(row(format!(" Added {date}"), DetailRole::Dim));
    }
    if let Some(summary) = article.summary.as_deref().filter(|s| !s.is_empty()) {
        rows.push(row(String::new(), DetailRole::Dim));
        for paragraph in summary.split('\n') {
            for wrapped in wrap_to_width(paragraph, budget) {
                rows.push(row(format!(" {wrapped}"), DetailRole::Text));
            }
        }
    }
    rows
}

/// Detail panel `width` columns wide, exactly as tall as the logo panel.
pub fn detail_lines(article: Option<&Article>, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let content_rows = LOGO_PANEL_HEIGHT - 2;
    let mut rows = detail_rows(article, width.saturating_sub(2));
    rows.truncate(content_rows);

    let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
    let panel = Panel::new("Detail", &texts, width, 0).pad_rows(content_rows);
    styled_panel(&panel, palette.border(), |i| {
        rows.get(i)
            .map(|r| role_style(r.role, palette))
            .unwrap_or_else(|| palette.dim())
    })
}

fn role_style(role: DetailRole, palette: &Palette) -> Style {
    match role {
        DetailRole::Title => palette.title(),
        DetailRole::Url => palette.url(),
        DetailRole::Tags => palette.tags(),
        DetailRole::Dim => palette.dim(),
        DetailRole::Text => palette.text(),
    }
}

/// ` ● N unread  |  ~M min total reading time`
pub fn stats_line(state: &AppState, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ● ", palette.accent()),
        Span::styled(format!("{} unread", state.articles().len()), palette.accent()),
        Span::styled("  |  ", palette.dim()),
        Span::styled(format!("~{} min", state.total_reading_minutes()), palette.accent()),
        Span::styled(" total reading time", palette.dim()),
    ])
}

/// Header rows for the current layout: logo and detail side by side when
/// there is room, then the stats strip and a blank row.
pub fn header_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let layout = state.layout();
    let mut lines = match layout.header {
        HeaderStyle::Full => side_by_side(
            logo_lines(palette),
            detail_lines(state.selected_article(), layout.detail_width(), palette),
            1,
        ),
        HeaderStyle::Compact => Vec::new(),
    };
    lines.push(stats_line(state, palette));
    lines.push(Line::default());
    lines
}

/// Logo followed by a blank row; used by the loading and error screens.
pub fn splash_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = logo_lines(palette);
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::boxes::line_text;
    use crate::view::styles::ColorConfig;
    use crate::config::ThemeName;
    use crate::view_state::layout::LOGO_WIDTH;
    use crate::view_state::width::display_width;

    fn article() -> Article {
        Article {
            id: "a1".into(),
            title: "Rust ownership explained".into(),
            url: "https://example.com/rust".into(),
            summary: Some("First line\nSecond line".into()),
            tags: Some(vec!["rust".into(), "memory".into()]),
            reading_time_minutes: Some(7),
            created_at: Some("2024-03-05T10:00:00Z".into()),
            ..Article::default()
        }
    }

    fn palette() -> Palette {
        Palette::new(ThemeName::Default, ColorConfig::new(false))
    }

    #[test]
    fn logo_art_rows_are_logo_width() {
        for row in LOGO_ART {
            assert_eq!(display_width(row), LOGO_WIDTH, "row {row:?}");
        }
    }

    #[test]
    fn logo_panel_has_fixed_geometry() {
        let panel = logo_panel();
        assert_eq!(panel.height(), LOGO_PANEL_HEIGHT);
        for line in panel.lines() {
            assert_eq!(display_width(&line), LOGO_PANEL_WIDTH);
        }
        assert!(panel.top.starts_with("╭─ CuraQ-TUI v"));
        assert!(panel.content[LOGO_PADDING_Y].starts_with("   ██████╗"));
    }

    #[test]
    fn detail_rows_describe_article() {
        let rows = detail_rows(Some(&article()), 40);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                " Rust ownership explained",
                " https://example.com/rust",
                " #rust #memory",
                " 7 min read",
                " Added 2024-03-05",
                "",
                " First line",
                " Second line",
            ]
        );
        assert_eq!(rows[0].role, DetailRole::Title);
        assert_eq!(rows[7].role, DetailRole::Text);
    }

    #[test]
    fn detail_rows_without_selection() {
        let rows = detail_rows(None, 40);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, " No article selected");
    }

    #[test]
    fn detail_panel_matches_logo_height_and_width() {
        let mut long = article();
        long.summary = Some("word ".repeat(200));
        let lines = detail_lines(Some(&long), 35, &palette());
        assert_eq!(lines.len(), LOGO_PANEL_HEIGHT);
        for line in &lines {
            assert_eq!(display_width(&line_text(line)), 35);
        }
    }

    #[test]
    fn long_title_is_ellipsized() {
        let mut a = article();
        a.title = "x".repeat(100);
        let rows = detail_rows(Some(&a), 20);
        assert_eq!(rows[0].text, format!(" {}...", "x".repeat(15)));
    }
}
