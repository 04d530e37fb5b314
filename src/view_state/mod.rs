//! View-state layer - text layout, panels, pagination and viewports
//!
//! Everything here is pure and measures text in terminal columns, so the
//! renderers can build fixed-width rows without consulting the terminal.
//!
//! # Module Structure
//!
//! - `width`: display width of characters and strings
//! - `text`: truncate, pad, wrap and pre-wrap text to a column budget
//! - `panel`: rounded, labelled boxes built from plain strings
//! - `reader`: ReaderSession - cached wrapped lines with a clamped scroll offset
//! - `list_viewport`: centered window over a selectable list
//! - `layout`: ScreenLayout - header/body/footer row budget

pub mod layout;
pub mod list_viewport;
pub mod panel;
pub mod reader;
pub mod text;
pub mod width;
