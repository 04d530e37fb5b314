//! Article and discovery payloads returned by the CuraQ API.

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ValidationError;

/// A saved article.
///
/// Only `id`, `title` and `url` are guaranteed; everything else is optional
/// and missing fields deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier.
    pub id: String,
    /// Article title; may be empty.
    #[serde(default)]
    pub title: String,
    /// Original article URL.
    #[serde(default)]
    pub url: String,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Stored body, if the service kept one.
    #[serde(default)]
    pub content: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Estimated reading time.
    #[serde(default)]
    pub reading_time_minutes: Option<u32>,
    /// Content classification, e.g. `"article"`.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Priority score.
    #[serde(default)]
    pub priority: Option<f64>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Whether the article has been marked read.
    #[serde(default)]
    pub is_read: Option<bool>,
}

impl Article {
    /// Title for display, falling back to `"Untitled"`.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Reading time, treating a missing value as zero.
    pub fn reading_minutes(&self) -> u32 {
        self.reading_time_minutes.unwrap_or(0)
    }

    /// Up to `limit` tags rendered as `#tag #tag`.
    pub fn hashtags(&self, limit: usize) -> Option<String> {
        let tags = self.tags.as_deref().filter(|t| !t.is_empty())?;
        Some(
            tags.iter()
                .take(limit)
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Creation date as `YYYY-MM-DD`, if the timestamp parses.
    pub fn added_on(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
    }
}

/// One page of `GET /api/v1/articles`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    /// Articles on this page.
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Total across all pages.
    #[serde(default)]
    pub total: Option<u64>,
    /// Page number echoed back.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size echoed back.
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Result of a keyword or semantic search.
///
/// The service has used both `articles` and `data` for the list; either is
/// accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    /// Matches, newer field name.
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
    /// Matches, older field name.
    #[serde(default)]
    pub data: Option<Vec<Article>>,
    /// Total matches.
    #[serde(default)]
    pub total: Option<u64>,
}

impl SearchResponse {
    /// The matches, whichever field carried them.
    pub fn into_articles(self) -> Vec<Article> {
        self.articles.or(self.data).unwrap_or_default()
    }
}

/// A recommended article not yet saved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscoveryItem {
    /// Identifier used to dismiss the item.
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Article URL.
    #[serde(default)]
    pub url: String,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Estimated reading time.
    #[serde(default)]
    pub reading_time_minutes: Option<u32>,
    /// Where the recommendation came from.
    #[serde(default)]
    pub source: Option<String>,
}

/// `GET /api/v1/discovery`, which names its list `items` or `discoveries`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiscoveryListResponse {
    /// Items, newer field name.
    #[serde(default)]
    pub items: Option<Vec<DiscoveryItem>>,
    /// Items, older field name.
    #[serde(default)]
    pub discoveries: Option<Vec<DiscoveryItem>>,
    /// Total items.
    #[serde(default)]
    pub total: Option<u64>,
}

impl DiscoveryListResponse {
    /// The items, whichever field carried them.
    pub fn into_items(self) -> Vec<DiscoveryItem> {
        self.items.or(self.discoveries).unwrap_or_default()
    }
}

/// Body of `POST /api/v1/articles`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateArticleRequest<'a> {
    /// URL to save.
    pub url: &'a str,
}

/// Response of `POST /api/v1/articles`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleResponse {
    /// The stored article.
    pub article: Article,
}

/// True if `text` parses as an absolute `http`/`https` URL.
pub fn is_http_url(text: &str) -> bool {
    Url::parse(text).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Validate user input for the add-article form.
///
/// Returns the trimmed URL on success.
///
/// # Errors
///
/// [`ValidationError::EmptyUrl`] for blank input, [`ValidationError::InvalidUrl`]
/// for anything that is not an absolute http(s) URL.
pub fn validate_article_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    if !is_http_url(trimmed) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(trimmed.to_string())
}
