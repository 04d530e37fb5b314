//! Turning plain [`Panel`]s into styled ratatui lines.

use crate::view_state::panel::{Panel, VERTICAL};
use crate::view_state::text::{fit_to_width, pad_to_width, truncate_to_width};
use crate::view_state::width::display_width;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Wrap pre-styled inner rows in the panel's rules and bars.
///
/// Each row must already be exactly the panel's inner width.
pub fn framed(panel: &Panel, rows: Vec<Vec<Span<'static>>>, border: Style) -> Vec<Line<'static>> {
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(Line::from(Span::styled(panel.top.clone(), border)));
    for spans in rows {
        let mut row = Vec::with_capacity(spans.len() + 2);
        row.push(Span::styled(VERTICAL.to_string(), border));
        row.extend(spans);
        row.push(Span::styled(VERTICAL.to_string(), border));
        out.push(Line::from(row));
    }
    out.push(Line::from(Span::styled(panel.bottom.clone(), border)));
    out
}

/// Style each content row of `panel` with `style_for(index)`.
pub fn styled_panel(
    panel: &Panel,
    border: Style,
    style_for: impl Fn(usize) -> Style,
) -> Vec<Line<'static>> {
    let rows = panel
        .content
        .iter()
        .enumerate()
        .map(|(i, row)| vec![Span::styled(row.clone(), style_for(i))])
        .collect();
    framed(panel, rows, border)
}

/// A row of exactly `inner` terminal columns: `lead`, then `glyph`, then
/// `rest`, all in `style`.
///
/// Status marks like `✓` and `✗` sit in the width table's double-width
/// dingbat block but every terminal draws them in one column, so the glyph
/// is kept out of the measured text and counted as one column here.
pub fn glyph_row(lead: &str, glyph: char, rest: &str, inner: usize, style: Style) -> Vec<Span<'static>> {
    let lead = truncate_to_width(lead, inner);
    let used = display_width(&lead);
    if used >= inner {
        return vec![Span::styled(pad_to_width(&lead, inner), style)];
    }
    vec![
        Span::styled(lead, style),
        Span::styled(glyph.to_string(), style),
        Span::styled(fit_to_width(rest, inner - used - 1), style),
    ]
}

/// Place two blocks of lines side by side separated by `gap` spaces.
///
/// The shorter block is padded with blank lines.
pub fn side_by_side(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    gap: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let mut spans = left.next().map(|l| l.spans).unwrap_or_default();
            spans.push(Span::raw(" ".repeat(gap)));
            spans.extend(right.next().map(|l| l.spans).unwrap_or_default());
            Line::from(spans)
        })
        .collect()
}

/// Concatenated text of a line, for tests and width checks.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
