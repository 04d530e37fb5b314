//! Blocking HTTP client for the CuraQ REST API.

use crate::model::{
    Article, ArticleListResponse, ApiError, CreateArticleRequest, CreateArticleResponse,
    DiscoveryItem, DiscoveryListResponse, SearchResponse,
};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Page size used for the article list.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the app needs from the curation service.
///
/// Implemented over HTTP by [`HttpApiClient`]; tests substitute their own.
pub trait CurationApi: Send + Sync {
    /// One page of saved, unread articles.
    fn list_articles(&self, page: u32, page_size: u32) -> Result<ArticleListResponse, ApiError>;
    /// A single article by id.
    fn get_article(&self, id: &str) -> Result<Article, ApiError>;
    /// Keyword search.
    fn search_articles(&self, query: &str) -> Result<Vec<Article>, ApiError>;
    /// Embedding-based search.
    fn semantic_search(&self, query: &str) -> Result<Vec<Article>, ApiError>;
    /// Mark an article read.
    fn mark_read(&self, id: &str) -> Result<(), ApiError>;
    /// Delete an article.
    fn delete_article(&self, id: &str) -> Result<(), ApiError>;
    /// Save a new article by URL.
    fn create_article(&self, url: &str) -> Result<Article, ApiError>;
    /// Recommended articles.
    fn list_discovery(&self) -> Result<Vec<DiscoveryItem>, ApiError>;
    /// Hide a recommendation.
    fn dismiss_discovery(&self, id: &str) -> Result<(), ApiError>;
}

/// [`CurationApi`] over `reqwest::blocking`, authenticating with a bearer
/// token on every request.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    /// Build a client for `base_url` (e.g. `https://curaq.app`).
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse, the token is not a valid header
    /// value, or the TLS backend cannot be initialised.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL for an API path plus query pairs.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        endpoint_url(&self.base_url, path, query)
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, &str)]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path, query)?;
        debug!(%method, %url, "API request");
        Ok(self.client.request(method, url))
    }

    /// Send and decode a JSON body.
    fn fetch<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send()?;
        check_status(response.status())?;
        let body = response.text()?;
        decode(path, &body)
    }

    /// Send and ignore the body.
    fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send()?;
        check_status(response.status())
    }
}

impl CurationApi for HttpApiClient {
    #[instrument(skip(self))]
    fn list_articles(&self, page: u32, page_size: u32) -> Result<ArticleListResponse, ApiError> {
        let path = "/api/v1/articles";
        let page = page.to_string();
        let page_size = page_size.to_string();
        let request = self.request(Method::GET, path, &[("page", &page), ("pageSize", &page_size)])?;
        self.fetch(path, request)
    }

    #[instrument(skip(self))]
    fn get_article(&self, id: &str) -> Result<Article, ApiError> {
        let path = format!("/api/v1/articles/{id}");
        let request = self.request(Method::GET, &path, &[])?;
        self.fetch(&path, request)
    }

    #[instrument(skip(self))]
    fn search_articles(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        let path = "/api/v1/articles/search";
        let request = self.request(Method::GET, path, &[("q", query)])?;
        self.fetch::<SearchResponse>(path, request)
            .map(SearchResponse::into_articles)
    }

    #[instrument(skip(self))]
    fn semantic_search(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        let path = "/api/v1/articles/semantic-search";
        let request = self.request(Method::GET, path, &[("q", query)])?;
        self.fetch::<SearchResponse>(path, request)
            .map(SearchResponse::into_articles)
    }

    #[instrument(skip(self))]
    fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::POST, &format!("/api/v1/articles/{id}/read"), &[])?;
        self.execute(request)
    }

    #[instrument(skip(self))]
    fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/v1/articles/{id}"), &[])?;
        self.execute(request)
    }

    #[instrument(skip(self))]
    fn create_article(&self, url: &str) -> Result<Article, ApiError> {
        let path = "/api/v1/articles";
        let request = self
            .request(Method::POST, path, &[])?
            .json(&CreateArticleRequest { url });
        self.fetch::<CreateArticleResponse>(path, request)
            .map(|created| created.article)
    }

    #[instrument(skip(self))]
    fn list_discovery(&self) -> Result<Vec<DiscoveryItem>, ApiError> {
        let path = "/api/v1/discovery";
        let request = self.request(Method::GET, path, &[])?;
        self.fetch::<DiscoveryListResponse>(path, request)
            .map(DiscoveryListResponse::into_items)
    }

    #[instrument(skip(self))]
    fn dismiss_discovery(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::POST, &format!("/api/v1/discovery/{id}/dismiss"), &[])?;
        self.execute(request)
    }
}

/// Join `path` onto `base` and append percent-encoded query pairs.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] if the join fails.
pub fn endpoint_url(base: &Url, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
    let mut url = base.join(path)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Map a non-success status to [`ApiError::Status`].
///
/// # Errors
///
/// Returns the status error for anything outside 2xx.
pub fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

/// Parse a JSON body, naming the endpoint on failure.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
