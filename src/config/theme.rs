//! Named colour themes.
//!
//! A theme is picked by name in the config file (`"theme": "nord"`) or from
//! the in-app picker, and resolves to a fixed [`ThemeColors`] palette.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The built-in themes, in picker order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeName {
    /// Cyan and yellow on the terminal's own colours.
    #[default]
    Default,
    /// Blues.
    Ocean,
    /// Greens.
    Forest,
    /// Magenta and red.
    Sunset,
    /// Greyscale.
    Mono,
    /// Pinks.
    Sakura,
    /// Nord palette.
    Nord,
    /// Dracula palette.
    Dracula,
    /// Solarized dark.
    Solarized,
    /// Neon.
    Cyberpunk,
    /// Browns.
    Coffee,
    /// Tokyo Night.
    TokyoMidnight,
    /// Kanagawa.
    Kanagawa,
    /// PC-98 era primaries.
    Pc98,
}

/// Unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl ThemeName {
    /// Every theme, in the order the picker lists them.
    pub const ALL: [ThemeName; 14] = [
        ThemeName::Default,
        ThemeName::Ocean,
        ThemeName::Forest,
        ThemeName::Sunset,
        ThemeName::Mono,
        ThemeName::Sakura,
        ThemeName::Nord,
        ThemeName::Dracula,
        ThemeName::Solarized,
        ThemeName::Cyberpunk,
        ThemeName::Coffee,
        ThemeName::TokyoMidnight,
        ThemeName::Kanagawa,
        ThemeName::Pc98,
    ];

    /// Name as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Ocean => "ocean",
            ThemeName::Forest => "forest",
            ThemeName::Sunset => "sunset",
            ThemeName::Mono => "mono",
            ThemeName::Sakura => "sakura",
            ThemeName::Nord => "nord",
            ThemeName::Dracula => "dracula",
            ThemeName::Solarized => "solarized",
            ThemeName::Cyberpunk => "cyberpunk",
            ThemeName::Coffee => "coffee",
            ThemeName::TokyoMidnight => "tokyoMidnight",
            ThemeName::Kanagawa => "kanagawa",
            ThemeName::Pc98 => "pc98",
        }
    }

    /// Position in [`ThemeName::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The palette for this theme.
    pub fn colors(self) -> &'static ThemeColors {
        match self {
            ThemeName::Default => &DEFAULT,
            ThemeName::Ocean => &OCEAN,
            ThemeName::Forest => &FOREST,
            ThemeName::Sunset => &SUNSET,
            ThemeName::Mono => &MONO,
            ThemeName::Sakura => &SAKURA,
            ThemeName::Nord => &NORD,
            ThemeName::Dracula => &DRACULA,
            ThemeName::Solarized => &SOLARIZED,
            ThemeName::Cyberpunk => &CYBERPUNK,
            ThemeName::Coffee => &COFFEE,
            ThemeName::TokyoMidnight => &TOKYO_MIDNIGHT,
            ThemeName::Kanagawa => &KANAGAWA,
            ThemeName::Pc98 => &PC98,
        }
    }

    /// Comma-separated list of every name, for error messages.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Colour roles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Main accent.
    pub primary: Color,
    /// Second accent.
    pub secondary: Color,
    /// Highlights such as the theme picker cursor.
    pub accent: Color,
    /// Unread counter.
    pub unread: Color,
    /// Read marker.
    pub read: Color,
    /// Generic borders.
    pub border: Color,
    /// Body text.
    pub text: Color,
    /// De-emphasised text.
    pub text_dim: Color,
    /// Logo art.
    pub logo: Color,
    /// Panel rules and bars.
    pub box_border: Color,
    /// Article titles.
    pub title: Color,
    /// URLs.
    pub url: Color,
    /// Tags.
    pub tags: Color,
    /// Unselected list rows.
    pub list_item: Color,
    /// Selected list row.
    pub list_item_selected: Color,
    /// Footer key hints.
    pub help: Color,
    /// Stats strip.
    pub stats: Color,
    /// Spinner frames.
    pub spinner: Color,
    /// Error text.
    pub error: Color,
    /// Success text.
    pub success: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const DEFAULT: ThemeColors = ThemeColors {
    primary: Color::Cyan,
    secondary: Color::Green,
    accent: Color::Yellow,
    unread: Color::Yellow,
    read: Color::Green,
    border: Color::Cyan,
    text: Color::White,
    text_dim: rgb(0x888888),
    logo: Color::Cyan,
    box_border: Color::Cyan,
    title: Color::Cyan,
    url: rgb(0x888888),
    tags: Color::Yellow,
    list_item: rgb(0x888888),
    list_item_selected: Color::Cyan,
    help: rgb(0x888888),
    stats: rgb(0x888888),
    spinner: Color::Cyan,
    error: Color::Red,
    success: Color::Green,
};

const OCEAN: ThemeColors = ThemeColors {
    primary: Color::Blue,
    secondary: Color::Cyan,
    accent: Color::Magenta,
    unread: Color::Cyan,
    read: Color::Blue,
    border: Color::Blue,
    text: Color::White,
    text_dim: rgb(0x888888),
    logo: Color::Blue,
    box_border: Color::Cyan,
    title: Color::Cyan,
    url: rgb(0x6688aa),
    tags: Color::Magenta,
    list_item: rgb(0x888888),
    list_item_selected: Color::Cyan,
    help: rgb(0x6688aa),
    stats: rgb(0x6688aa),
    spinner: Color::Cyan,
    error: Color::Red,
    success: Color::Cyan,
};

const FOREST: ThemeColors = ThemeColors {
    primary: Color::Green,
    secondary: Color::Yellow,
    accent: Color::Cyan,
    unread: Color::Yellow,
    read: Color::Green,
    border: Color::Green,
    text: Color::White,
    text_dim: rgb(0x888888),
    logo: Color::Green,
    box_border: Color::Green,
    title: Color::Green,
    url: rgb(0x669966),
    tags: Color::Yellow,
    list_item: rgb(0x888888),
    list_item_selected: Color::Green,
    help: rgb(0x669966),
    stats: rgb(0x669966),
    spinner: Color::Green,
    error: Color::Red,
    success: Color::Green,
};

const SUNSET: ThemeColors = ThemeColors {
    primary: Color::Magenta,
    secondary: Color::Red,
    accent: Color::Yellow,
    unread: Color::Yellow,
    read: Color::Red,
    border: Color::Magenta,
    text: Color::White,
    text_dim: rgb(0x888888),
    logo: Color::Magenta,
    box_border: Color::Magenta,
    title: Color::Magenta,
    url: rgb(0xaa6688),
    tags: Color::Yellow,
    list_item: rgb(0x888888),
    list_item_selected: Color::Magenta,
    help: rgb(0xaa6688),
    stats: rgb(0xaa6688),
    spinner: Color::Magenta,
    error: Color::Red,
    success: Color::Yellow,
};

const MONO: ThemeColors = ThemeColors {
    primary: Color::White,
    secondary: Color::Gray,
    accent: Color::White,
    unread: Color::White,
    read: Color::Gray,
    border: Color::Gray,
    text: Color::White,
    text_dim: rgb(0x888888),
    logo: Color::White,
    box_border: Color::Gray,
    title: Color::White,
    url: Color::Gray,
    tags: Color::White,
    list_item: Color::Gray,
    list_item_selected: Color::White,
    help: Color::Gray,
    stats: Color::Gray,
    spinner: Color::White,
    error: Color::White,
    success: Color::White,
};

const SAKURA: ThemeColors = ThemeColors {
    primary: rgb(0xf7768e),
    secondary: rgb(0xff9e64),
    accent: rgb(0xffc0cb),
    unread: rgb(0xf7768e),
    read: rgb(0xff9e64),
    border: rgb(0xf7768e),
    text: Color::White,
    text_dim: rgb(0xa9a9a9),
    logo: rgb(0xf7768e),
    box_border: rgb(0xffc0cb),
    title: rgb(0xf7768e),
    url: rgb(0xd4a5a5),
    tags: rgb(0xffc0cb),
    list_item: rgb(0xd4a5a5),
    list_item_selected: rgb(0xf7768e),
    help: rgb(0xd4a5a5),
    stats: rgb(0xd4a5a5),
    spinner: rgb(0xf7768e),
    error: rgb(0xff6b6b),
    success: rgb(0xff9e64),
};

const NORD: ThemeColors = ThemeColors {
    primary: rgb(0x5e81ac),
    secondary: rgb(0x88c0d0),
    accent: rgb(0xebcb8b),
    unread: rgb(0xebcb8b),
    read: rgb(0xa3be8c),
    border: rgb(0x5e81ac),
    text: rgb(0xeceff4),
    text_dim: rgb(0x4c566a),
    logo: rgb(0x88c0d0),
    box_border: rgb(0x5e81ac),
    title: rgb(0x88c0d0),
    url: rgb(0x81a1c1),
    tags: rgb(0xebcb8b),
    list_item: rgb(0xd8dee9),
    list_item_selected: rgb(0x88c0d0),
    help: rgb(0x4c566a),
    stats: rgb(0x81a1c1),
    spinner: rgb(0x88c0d0),
    error: rgb(0xbf616a),
    success: rgb(0xa3be8c),
};

const DRACULA: ThemeColors = ThemeColors {
    primary: rgb(0xbd93f9),
    secondary: rgb(0xff79c6),
    accent: rgb(0x50fa7b),
    unread: rgb(0xf1fa8c),
    read: rgb(0x50fa7b),
    border: rgb(0xbd93f9),
    text: rgb(0xf8f8f2),
    text_dim: rgb(0x6272a4),
    logo: rgb(0xbd93f9),
    box_border: rgb(0xff79c6),
    title: rgb(0xff79c6),
    url: rgb(0x8be9fd),
    tags: rgb(0xf1fa8c),
    list_item: rgb(0x6272a4),
    list_item_selected: rgb(0xbd93f9),
    help: rgb(0x6272a4),
    stats: rgb(0x8be9fd),
    spinner: rgb(0xbd93f9),
    error: rgb(0xff5555),
    success: rgb(0x50fa7b),
};

const SOLARIZED: ThemeColors = ThemeColors {
    primary: rgb(0x268bd2),
    secondary: rgb(0x2aa198),
    accent: rgb(0xb58900),
    unread: rgb(0xb58900),
    read: rgb(0x859900),
    border: rgb(0x268bd2),
    text: rgb(0x839496),
    text_dim: rgb(0x586e75),
    logo: rgb(0x268bd2),
    box_border: rgb(0x2aa198),
    title: rgb(0x268bd2),
    url: rgb(0x2aa198),
    tags: rgb(0xb58900),
    list_item: rgb(0x839496),
    list_item_selected: rgb(0x268bd2),
    help: rgb(0x586e75),
    stats: rgb(0x657b83),
    spinner: rgb(0x268bd2),
    error: rgb(0xdc322f),
    success: rgb(0x859900),
};

const CYBERPUNK: ThemeColors = ThemeColors {
    primary: rgb(0xff00ff),
    secondary: rgb(0x00ffff),
    accent: rgb(0xff0080),
    unread: rgb(0x00ffff),
    read: rgb(0xff00ff),
    border: rgb(0xff0080),
    text: Color::White,
    text_dim: rgb(0x808080),
    logo: rgb(0xff00ff),
    box_border: rgb(0x00ffff),
    title: rgb(0x00ffff),
    url: rgb(0xff0080),
    tags: rgb(0xffff00),
    list_item: rgb(0x808080),
    list_item_selected: rgb(0x00ffff),
    help: rgb(0xff0080),
    stats: rgb(0x00ffff),
    spinner: rgb(0xff00ff),
    error: rgb(0xff0000),
    success: rgb(0x00ff00),
};

const COFFEE: ThemeColors = ThemeColors {
    primary: rgb(0xc4a77d),
    secondary: rgb(0x8b7355),
    accent: rgb(0xdeb887),
    unread: rgb(0xdeb887),
    read: rgb(0x8b7355),
    border: rgb(0xc4a77d),
    text: rgb(0xf5f5dc),
    text_dim: rgb(0xa0826d),
    logo: rgb(0xc4a77d),
    box_border: rgb(0x8b7355),
    title: rgb(0xdeb887),
    url: rgb(0xa0826d),
    tags: rgb(0xd2b48c),
    list_item: rgb(0xa0826d),
    list_item_selected: rgb(0xdeb887),
    help: rgb(0x8b7355),
    stats: rgb(0xa0826d),
    spinner: rgb(0xc4a77d),
    error: rgb(0xcd5c5c),
    success: rgb(0x8fbc8f),
};

const TOKYO_MIDNIGHT: ThemeColors = ThemeColors {
    primary: rgb(0x7aa2f7),
    secondary: rgb(0xbb9af7),
    accent: rgb(0x7dcfff),
    unread: rgb(0xe0af68),
    read: rgb(0x9ece6a),
    border: rgb(0x7aa2f7),
    text: rgb(0xc0caf5),
    text_dim: rgb(0x565f89),
    logo: rgb(0x7aa2f7),
    box_border: rgb(0xbb9af7),
    title: rgb(0x7dcfff),
    url: rgb(0x565f89),
    tags: rgb(0xe0af68),
    list_item: rgb(0xa9b1d6),
    list_item_selected: rgb(0x7aa2f7),
    help: rgb(0x565f89),
    stats: rgb(0x565f89),
    spinner: rgb(0x7aa2f7),
    error: rgb(0xf7768e),
    success: rgb(0x9ece6a),
};

const KANAGAWA: ThemeColors = ThemeColors {
    primary: rgb(0x7e9cd8),
    secondary: rgb(0x957fb8),
    accent: rgb(0x7fb4ca),
    unread: rgb(0xe6c384),
    read: rgb(0x98bb6c),
    border: rgb(0x7e9cd8),
    text: rgb(0xdcd7ba),
    text_dim: rgb(0x727169),
    logo: rgb(0x7e9cd8),
    box_border: rgb(0x957fb8),
    title: rgb(0x7fb4ca),
    url: rgb(0x727169),
    tags: rgb(0xe6c384),
    list_item: rgb(0xc8c093),
    list_item_selected: rgb(0x7e9cd8),
    help: rgb(0x727169),
    stats: rgb(0x727169),
    spinner: rgb(0x7e9cd8),
    error: rgb(0xe82424),
    success: rgb(0x98bb6c),
};

const PC98: ThemeColors = ThemeColors {
    primary: rgb(0x00ffff),
    secondary: rgb(0xff00ff),
    accent: rgb(0xffff00),
    unread: rgb(0xffff00),
    read: rgb(0x00ffff),
    border: rgb(0xff00ff),
    text: rgb(0xffffff),
    text_dim: rgb(0x00aaaa),
    logo: rgb(0x00ffff),
    box_border: rgb(0xff00ff),
    title: rgb(0x00ffff),
    url: rgb(0x00aaaa),
    tags: rgb(0xffff00),
    list_item: rgb(0xffffff),
    list_item_selected: rgb(0xffff00),
    help: rgb(0x00aaaa),
    stats: rgb(0x00ffff),
    spinner: rgb(0x00ffff),
    error: rgb(0xff0000),
    success: rgb(0x00ff00),
};
