//! Theme-driven styles for the renderers.
//!
//! Every colour comes from the active [`ThemeName`]'s palette. When colour is
//! disabled all roles collapse to the terminal default, keeping modifiers
//! such as bold so the selection stays visible.

use crate::config::{ThemeColors, ThemeName};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, for tests.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for one frame, resolved from a theme and a [`ColorConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: &'static ThemeColors,
    enabled: bool,
}

impl Palette {
    /// Palette for `theme`.
    pub fn new(theme: ThemeName, config: ColorConfig) -> Self {
        Self {
            colors: theme.colors(),
            enabled: config.colors_enabled(),
        }
    }

    fn fg(&self, color: Color) -> Style {
        if self.enabled {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Panel borders.
    pub fn border(&self) -> Style {
        self.fg(self.colors.box_border)
    }

    /// Logo art and its frame.
    pub fn logo(&self) -> Style {
        self.fg(self.colors.logo)
    }

    /// Article title in the detail panel.
    pub fn title(&self) -> Style {
        self.fg(self.colors.title)
    }

    /// Article URL.
    pub fn url(&self) -> Style {
        self.fg(self.colors.url)
    }

    /// `#tag` line.
    pub fn tags(&self) -> Style {
        self.fg(self.colors.tags)
    }

    /// Body text.
    pub fn text(&self) -> Style {
        self.fg(self.colors.text)
    }

    /// Secondary text.
    pub fn dim(&self) -> Style {
        self.fg(self.colors.text_dim)
    }

    /// Highlighted figures in the stats strip.
    pub fn accent(&self) -> Style {
        self.fg(self.colors.accent).add_modifier(Modifier::BOLD)
    }

    /// Unselected list row.
    pub fn list_item(&self) -> Style {
        self.fg(self.colors.list_item)
    }

    /// Selected list row.
    pub fn list_item_selected(&self) -> Style {
        self.fg(self.colors.list_item_selected)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted row in a picker.
    pub fn highlight(&self) -> Style {
        self.fg(self.colors.primary).add_modifier(Modifier::BOLD)
    }

    /// Row with a request in flight.
    pub fn pending_row(&self) -> Style {
        if self.enabled {
            Style::default().bg(self.colors.accent).fg(Color::Black)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Footer key hints.
    pub fn help(&self) -> Style {
        self.fg(self.colors.help)
    }

    /// Loading messages.
    pub fn spinner(&self) -> Style {
        self.fg(self.colors.spinner)
    }

    /// Error messages.
    pub fn error(&self) -> Style {
        self.fg(self.colors.error)
    }

    /// Success messages.
    pub fn success(&self) -> Style {
        self.fg(self.colors.success)
    }

    /// Swatch block in an arbitrary colour, used by the theme picker preview.
    pub fn swatch(&self, color: Color) -> Style {
        self.fg(color)
    }
}
