//! Non-interactive CLI subcommands.
//!
//! Each command writes its report to `out` so it can be tested against a
//! buffer. Prompts live in [`prompt_token`] and [`prompt_theme`] and are the
//! only functions here that touch the real terminal.

use crate::api::CurationApi;
use crate::config::{
    mask_token, ConfigStore, ResolvedToken, StartScreen, ThemeName, TokenSource, TOKEN_ENV,
};
use crate::model::{AppError, Article, DiscoveryItem};
use crate::view_state::panel::Panel;
use crate::view_state::text::truncate_with_ellipsis;
use dialoguer::{theme::ColorfulTheme, Password, Select};
use std::io::Write;
use tracing::info;

/// Narrowest result panel printed by `search` and `discovery`.
const MIN_RESULT_WIDTH: usize = 40;

/// `setup`: store `token` (trimmed). An empty token changes nothing.
///
/// # Errors
///
/// Returns error if the config cannot be saved or `out` cannot be written.
pub fn setup(
    store: &impl ConfigStore,
    token: &str,
    location: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let token = token.trim();
    if token.is_empty() {
        writeln!(out, "✗ No token provided")?;
        return Ok(());
    }
    store.update(|config| config.token = Some(token.to_string()))?;
    info!("Token saved");
    writeln!(out, "✓ Token saved to {location}")?;
    Ok(())
}

/// `config`: describe the active token, theme and start screen.
///
/// # Errors
///
/// Returns error if the config cannot be read or `out` cannot be written.
pub fn show_config(
    store: &impl ConfigStore,
    token: Option<ResolvedToken>,
    location: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let config = store.load()?;
    writeln!(out, "curaq-tui Configuration")?;
    writeln!(out)?;
    match token {
        Some(resolved) => {
            let source = match resolved.source {
                TokenSource::Environment => format!("Environment variable ({TOKEN_ENV})"),
                TokenSource::ConfigFile => format!("Config file ({location})"),
            };
            writeln!(out, "Token source: {source}")?;
            writeln!(out, "Token: {}", mask_token(&resolved.token))?;
        }
        None => {
            writeln!(out, "No token configured")?;
            writeln!(out)?;
            writeln!(out, "Run \"curaq-tui setup\" to configure your token")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Theme: {}", config.theme_name())?;
    writeln!(out, "Start screen: {}", config.start_screen())?;
    Ok(())
}

/// `theme <name>`: validate and store a theme.
///
/// Unknown names are reported with the list of valid ones and leave the
/// config untouched.
///
/// # Errors
///
/// Returns error if the config cannot be saved or `out` cannot be written.
pub fn set_theme(store: &impl ConfigStore, name: &str, out: &mut impl Write) -> Result<(), AppError> {
    let theme: ThemeName = match name.parse() {
        Ok(theme) => theme,
        Err(_) => {
            writeln!(out, "✗ Unknown theme: {name}")?;
            writeln!(out, "Available: {}", ThemeName::available())?;
            return Ok(());
        }
    };
    save_theme(store, theme, out)
}

/// Store `theme` and confirm.
///
/// # Errors
///
/// Returns error if the config cannot be saved or `out` cannot be written.
pub fn save_theme(store: &impl ConfigStore, theme: ThemeName, out: &mut impl Write) -> Result<(), AppError> {
    store.update(|config| config.theme = Some(theme))?;
    writeln!(out, "✓ Theme set to: {theme}")?;
    Ok(())
}

/// `start-screen [unread|read]`: show or store the start screen.
///
/// # Errors
///
/// Returns error if the config cannot be read or saved, or `out` cannot be
/// written.
pub fn start_screen(
    store: &impl ConfigStore,
    value: Option<&str>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let Some(value) = value else {
        let config = store.load()?;
        writeln!(out, "Current start screen: {}", config.start_screen())?;
        writeln!(out)?;
        writeln!(out, "Usage: curaq-tui start-screen <unread|read>")?;
        return Ok(());
    };

    let screen: StartScreen = match value.parse() {
        Ok(screen) => screen,
        Err(_) => {
            writeln!(out, "✗ Invalid start screen: {value}")?;
            writeln!(out, "Available: unread, read")?;
            return Ok(());
        }
    };
    store.update(|config| config.start_screen = Some(screen))?;
    writeln!(out, "✓ Start screen set to: {screen}")?;
    Ok(())
}

/// `clear`: forget the stored token.
///
/// # Errors
///
/// Returns error if the config cannot be saved or `out` cannot be written.
pub fn clear(store: &impl ConfigStore, out: &mut impl Write) -> Result<(), AppError> {
    store.update(|config| config.token = None)?;
    writeln!(out, "✓ Token cleared")?;
    Ok(())
}

/// `search <query> [--semantic]`: print matching articles in a panel.
///
/// # Errors
///
/// Returns error if the API call fails or `out` cannot be written.
pub fn search(
    api: &dyn CurationApi,
    query: &str,
    semantic: bool,
    width: usize,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let articles = if semantic {
        api.semantic_search(query)?
    } else {
        api.search_articles(query)?
    };
    info!(query, semantic, count = articles.len(), "Search finished");

    let width = width.max(MIN_RESULT_WIDTH);
    let rows = if articles.is_empty() {
        vec![" No articles found".to_string()]
    } else {
        article_rows(&articles, width - 2)
    };
    let label = format!("Search: {query} ({})", articles.len());
    print_panel(&label, &rows, width, out)
}

/// `discovery [--dismiss ID]`: print the discovery feed, or dismiss one item.
///
/// # Errors
///
/// Returns error if the API call fails or `out` cannot be written.
pub fn discovery(
    api: &dyn CurationApi,
    dismiss: Option<&str>,
    width: usize,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if let Some(id) = dismiss {
        api.dismiss_discovery(id)?;
        writeln!(out, "✓ Dismissed {id}")?;
        return Ok(());
    }

    let items = api.list_discovery()?;
    let width = width.max(MIN_RESULT_WIDTH);
    let rows = if items.is_empty() {
        vec![" Nothing to discover right now".to_string()]
    } else {
        discovery_rows(&items, width - 2)
    };
    let label = format!("Discovery ({})", items.len());
    print_panel(&label, &rows, width, out)
}

/// Title, URL and metadata lines for each article, blank-separated.
pub fn article_rows(articles: &[Article], inner: usize) -> Vec<String> {
    let budget = inner.saturating_sub(3);
    let mut rows = Vec::with_capacity(articles.len() * 4);
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            rows.push(String::new());
        }
        rows.push(format!(" {}", truncate_with_ellipsis(article.display_title(), budget)));
        rows.push(format!("   {}", truncate_with_ellipsis(&article.url, budget)));

        let mut meta = Vec::new();
        if article.reading_minutes() > 0 {
            meta.push(format!("{} min", article.reading_minutes()));
        }
        if let Some(tags) = article.hashtags(5) {
            meta.push(tags);
        }
        if !meta.is_empty() {
            rows.push(format!("   {}", truncate_with_ellipsis(&meta.join("  "), budget)));
        }
    }
    rows
}

fn discovery_rows(items: &[DiscoveryItem], inner: usize) -> Vec<String> {
    let budget = inner.saturating_sub(3);
    let mut rows = Vec::with_capacity(items.len() * 4);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            rows.push(String::new());
        }
        rows.push(format!(" {}", truncate_with_ellipsis(&item.title, budget)));
        rows.push(format!("   {}", truncate_with_ellipsis(&item.url, budget)));
        let source = item.source.as_deref().unwrap_or("unknown source");
        rows.push(format!("   [{}] {}", item.id, truncate_with_ellipsis(source, budget)));
    }
    rows
}

fn print_panel(label: &str, rows: &[String], width: usize, out: &mut impl Write) -> Result<(), AppError> {
    for line in Panel::new(label, rows, width, 0).lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Ask for an API token without echoing it.
///
/// # Errors
///
/// Returns error if the terminal prompt fails.
pub fn prompt_token() -> Result<String, AppError> {
    let token = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your CuraQ API token")
        .allow_empty_password(true)
        .interact()?;
    Ok(token.trim().to_string())
}

/// Interactive theme picker starting on `current`. `None` if cancelled.
///
/// # Errors
///
/// Returns error if the terminal prompt fails.
pub fn prompt_theme(current: ThemeName) -> Result<Option<ThemeName>, AppError> {
    let items: Vec<String> = ThemeName::ALL
        .iter()
        .map(|theme| {
            if *theme == current {
                format!("{theme} (current)")
            } else {
                theme.to_string()
            }
        })
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a theme")
        .items(&items)
        .default(current.index())
        .interact_opt()?;
    Ok(choice.and_then(|idx| ThemeName::ALL.get(idx).copied()))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
