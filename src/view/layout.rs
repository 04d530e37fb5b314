//! Whole-screen composition.
//!
//! Pure layout logic: picks the screen for the current mode, stacks the
//! header, body panel and footer, and renders them as one paragraph.

use super::header::{header_lines, splash_lines};
use super::list::list_lines;
use super::modals::{add_article_lines, reader_lines, theme_lines};
use super::styles::{ColorConfig, Palette};
use crate::state::{AppState, LoadState, Mode, ReaderStatus};
use crate::view_state::layout::FOOTER_ROWS;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Footer hints on the article list.
pub const LIST_HINTS: &str =
    "j/k:Navigate  Enter:Read  a:Add  m:Done  o:Open  T:Theme  ^R:Refresh  q:Quit";
/// Footer hints in the reader.
pub const READER_HINTS: &str = "j/k:Scroll  Space:Page  o:Open  Esc:Back";
/// Footer hints in the theme picker.
pub const THEME_HINTS: &str = "j/k:Select  Enter:Apply  q:Cancel";
/// Footer hints in the add-article form.
pub const ADD_HINTS: &str = "Enter:Submit  Esc:Cancel";
/// Hint under the full-screen load error.
pub const RETRY_HINTS: &str = "^R: Retry  q: Quit";

/// Screen content split into the scrolling part and the pinned footer.
#[derive(Debug, Default)]
pub struct Screen {
    /// Header and body rows from the top of the terminal.
    pub body: Vec<Line<'static>>,
    /// Key hints pinned to the bottom; empty on splash screens.
    pub footer: Option<&'static str>,
}

/// Build the screen for the current state.
///
/// The loading and error splashes replace the article list only. A reload
/// that starts while a modal is open leaves the modal on screen.
pub fn build_screen(state: &AppState, palette: &Palette) -> Screen {
    let on_list = matches!(state.mode(), Mode::List);
    match state.load_state() {
        LoadState::Loading if on_list => {
            let mut body = splash_lines(palette);
            body.push(Line::styled(
                format!("{} Loading...", state.spinner()),
                palette.spinner(),
            ));
            return Screen { body, footer: None };
        }
        LoadState::Failed(message) if on_list => {
            let mut body = splash_lines(palette);
            body.push(Line::styled(format!("Error: {message}"), palette.error()));
            body.push(Line::styled(RETRY_HINTS, palette.help()));
            return Screen { body, footer: None };
        }
        _ => {}
    }

    let layout = state.layout();
    let mut body = header_lines(state, palette);
    let footer = match state.mode() {
        Mode::List => {
            body.extend(list_lines(state, palette));
            Some(LIST_HINTS)
        }
        Mode::Reader(modal) => match &modal.status {
            ReaderStatus::Loading => {
                body.push(Line::styled(
                    format!("{} Loading article...", state.spinner()),
                    palette.spinner(),
                ));
                None
            }
            ReaderStatus::Failed => {
                body.push(Line::styled("Failed to load article", palette.error()));
                body.push(Line::styled("Press Esc to go back", palette.help()));
                None
            }
            ReaderStatus::Ready(session) => {
                body.extend(reader_lines(session, layout.panel_width(), palette));
                Some(READER_HINTS)
            }
        },
        Mode::Theme(modal) => {
            body.extend(theme_lines(modal, state.theme(), palette));
            Some(THEME_HINTS)
        }
        Mode::AddArticle(modal) => {
            body.extend(add_article_lines(modal, state.spinner(), palette));
            Some(ADD_HINTS)
        }
    };
    Screen { body, footer }
}

/// Render the whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig) {
    let palette = Palette::new(state.theme(), colors);
    let screen = build_screen(state, &palette);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                        // Header and body
            Constraint::Length(FOOTER_ROWS as u16),    // Blank row + hints
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(screen.body), chunks[0]);

    if let Some(hints) = screen.footer {
        let footer = vec![Line::default(), Line::styled(hints, palette.help())];
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
