//! Network collaborators: the CuraQ REST client and the page extractor.

pub mod client;
pub mod reader;

pub use client::{check_status, decode, endpoint_url, CurationApi, HttpApiClient, DEFAULT_PAGE_SIZE};
pub use reader::{extract_from_html, ContentExtractor, HttpContentExtractor, READER_USER_AGENT};
