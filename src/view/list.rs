//! Article list panel.

use super::boxes::{framed, glyph_row};
use super::styles::Palette;
use crate::model::Article;
use crate::state::{AppState, PendingAction};
use crate::view_state::list_viewport::visible_range;
use crate::view_state::panel::Panel;
use crate::view_state::text::{fit_to_width, truncate_with_ellipsis};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Columns before the title on a normal row: ` > `.
const MARKER_WIDTH: usize = 3;
/// Columns taken by the spinner and status text on a pending row.
const PENDING_PREFIX_WIDTH: usize = 18;

/// Mark shown before the status text of a row with a request in flight.
pub fn pending_glyph(action: PendingAction) -> char {
    match action {
        PendingAction::MarkRead => '✓',
        PendingAction::Delete => '✗',
    }
}

/// Status text shown after [`pending_glyph`].
pub fn pending_label(action: PendingAction) -> &'static str {
    match action {
        PendingAction::MarkRead => "Marking done...",
        PendingAction::Delete => "Deleting...",
    }
}

/// Text of a row without a request in flight, before fitting to the panel.
pub fn row_text(article: &Article, selected: bool, inner: usize) -> String {
    let marker = if selected { '>' } else { ' ' };
    let title = truncate_with_ellipsis(article.display_title(), inner.saturating_sub(MARKER_WIDTH));
    format!(" {marker} {title}")
}

/// ` {spinner} {glyph} {label} {title}`, exactly `inner` columns wide.
pub fn pending_row(
    article: &Article,
    action: PendingAction,
    spinner: &str,
    inner: usize,
    style: Style,
) -> Vec<Span<'static>> {
    let title = truncate_with_ellipsis(
        article.display_title(),
        inner.saturating_sub(PENDING_PREFIX_WIDTH),
    );
    glyph_row(
        &format!(" {spinner} "),
        pending_glyph(action),
        &format!(" {} {title}", pending_label(action)),
        inner,
        style,
    )
}

/// The `Articles` panel, filling the body rows of the current layout.
pub fn list_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let layout = state.layout();
    let width = layout.panel_width();
    let inner = width.saturating_sub(2);
    let rows = layout.content_rows();
    let articles = state.articles();

    let plain = |text: &str, style: Style| vec![Span::styled(fit_to_width(text, inner), style)];
    let mut body: Vec<Vec<Span<'static>>> = Vec::with_capacity(rows);

    if articles.is_empty() {
        body.push(plain(" No articles", palette.dim()));
    } else {
        for idx in visible_range(state.selected(), articles.len(), rows) {
            let article = &articles[idx];
            let selected = idx == state.selected();
            body.push(match state.pending(&article.id) {
                Some(action) => {
                    pending_row(article, action, state.spinner(), inner, palette.pending_row())
                }
                None if selected => plain(&row_text(article, true, inner), palette.list_item_selected()),
                None => plain(&row_text(article, false, inner), palette.list_item()),
            });
        }
    }
    while body.len() < rows {
        body.push(plain("", palette.dim()));
    }

    let panel = Panel::new::<&str>("Articles", &[], width, 0);
    framed(&panel, body, palette.border())
}
