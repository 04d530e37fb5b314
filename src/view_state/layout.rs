//! Vertical screen budget.
//!
//! Splits the terminal into header, body and footer rows. The body height is
//! what both the article list and the reader use as their viewport.

/// Rows taken by the bordered logo (2 rules + 2×2 padding + 6 logo rows).
pub const LOGO_PANEL_HEIGHT: usize = 12;
/// Width of the logo art.
pub const LOGO_WIDTH: usize = 42;
/// Horizontal padding inside the logo panel.
pub const LOGO_PADDING_X: usize = 2;
/// Blank rows above and below the logo art.
pub const LOGO_PADDING_Y: usize = 2;
/// Logo panel width including borders.
pub const LOGO_PANEL_WIDTH: usize = LOGO_WIDTH + LOGO_PADDING_X * 2 + 2;
/// Narrowest detail panel shown beside the logo.
pub const DETAIL_MIN_WIDTH: usize = 30;
/// Stats strip plus the blank row under it.
const STATS_ROWS: usize = 2;
/// Blank row plus help line.
pub const FOOTER_ROWS: usize = 2;
/// Smallest number of list/reader rows worth keeping the logo for.
pub const MIN_CONTENT_ROWS: usize = 5;

/// Which header variant fits the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Logo and detail panels, then the stats strip.
    Full,
    /// Stats strip only.
    Compact,
}

/// Row budget for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Terminal columns.
    pub width: usize,
    /// Terminal rows.
    pub height: usize,
    /// Header variant.
    pub header: HeaderStyle,
}

impl ScreenLayout {
    /// Choose a layout for a `width × height` terminal.
    pub fn new(width: usize, height: usize) -> Self {
        let full_rows = LOGO_PANEL_HEIGHT + STATS_ROWS + FOOTER_ROWS + MIN_CONTENT_ROWS + 2;
        let wide_enough = width >= LOGO_PANEL_WIDTH + 1 + DETAIL_MIN_WIDTH;
        let header = if height >= full_rows && wide_enough {
            HeaderStyle::Full
        } else {
            HeaderStyle::Compact
        };
        Self {
            width,
            height,
            header,
        }
    }

    /// Rows used by the header.
    pub fn header_rows(&self) -> usize {
        match self.header {
            HeaderStyle::Full => LOGO_PANEL_HEIGHT + STATS_ROWS,
            HeaderStyle::Compact => STATS_ROWS,
        }
    }

    /// Rows between header and footer, borders included.
    pub fn body_rows(&self) -> usize {
        self.height
            .saturating_sub(self.header_rows() + FOOTER_ROWS)
            .max(MIN_CONTENT_ROWS + 2)
    }

    /// Rows inside the body panel's borders.
    pub fn content_rows(&self) -> usize {
        self.body_rows().saturating_sub(2)
    }

    /// Width of full-width panels (list, reader).
    pub fn panel_width(&self) -> usize {
        self.width
    }

    /// Width available to reader text, inside the borders.
    pub fn content_width(&self) -> usize {
        self.panel_width().saturating_sub(2)
    }

    /// Width of the detail panel beside the logo.
    pub fn detail_width(&self) -> usize {
        self.width
            .saturating_sub(LOGO_PANEL_WIDTH + 1)
            .max(DETAIL_MIN_WIDTH)
    }
}
