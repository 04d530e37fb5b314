//! Domain model types (pure).

pub mod article;
pub mod error;
pub mod key_action;
pub mod reader_content;

pub use article::{
    is_http_url, validate_article_url, Article, ArticleListResponse, CreateArticleRequest,
    CreateArticleResponse, DiscoveryItem, DiscoveryListResponse, SearchResponse,
};
pub use error::{ApiError, AppError, ValidationError};
pub use key_action::KeyAction;
pub use reader_content::ReaderContent;
