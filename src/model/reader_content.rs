//! Readable text extracted from an article page.

/// Output of the content extractor.
///
/// `text_content` is what the reader paginates; `content` keeps the cleaned
/// HTML fragment it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderContent {
    /// Page title.
    pub title: String,
    /// Cleaned HTML of the main content.
    pub content: String,
    /// Plain text, paragraphs separated by blank lines.
    pub text_content: String,
    /// Short description or first paragraph.
    pub excerpt: String,
    /// Author, when the page declares one.
    pub byline: Option<String>,
    /// Publisher name, when the page declares one.
    pub site_name: Option<String>,
}

impl ReaderContent {
    /// Text for the reader: the extracted body, or the excerpt when the body
    /// is blank.
    pub fn reader_text(&self) -> &str {
        if self.text_content.trim().is_empty() {
            &self.excerpt
        } else {
            &self.text_content
        }
    }
}
