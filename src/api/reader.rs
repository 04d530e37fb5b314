//! Readable-content extraction for the in-app reader.
//!
//! Pages are fetched with a browser-like user agent and reduced to their
//! main text: boilerplate elements are dropped, the `<article>` (or `<main>`,
//! or `<body>`) region is kept, and block elements become paragraph breaks.
//! `<pre>` blocks keep their line breaks and indentation.

use crate::model::{ApiError, ReaderContent};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent when fetching article pages.
pub const READER_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; curaq-tui/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Private-use markers around a preformatted block's index while the
/// surrounding text is reflowed.
const SLOT_OPEN: char = '\u{E000}';
const SLOT_CLOSE: char = '\u{E001}';

/// Tab stops inside `<pre>`; tabs have no width in the reader's table.
const PRE_TAB: &str = "    ";

/// Elements removed along with everything inside them.
const STRIPPED_ELEMENTS: [&str; 10] = [
    "script", "style", "noscript", "svg", "nav", "header", "footer", "aside", "form", "iframe",
];

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref STRIPPED: Vec<Regex> = STRIPPED_ELEMENTS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).unwrap())
        .collect();
    static ref META_TAG: Regex = Regex::new(r"(?is)<meta\b[^>]*>").unwrap();
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"(?s)([a-zA-Z_:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref TITLE: Regex = Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap();
    static ref H1: Regex = Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap();
    static ref ARTICLE: Regex = Regex::new(r"(?is)<article\b[^>]*>(.*)</article\s*>").unwrap();
    static ref MAIN: Regex = Regex::new(r"(?is)<main\b[^>]*>(.*)</main\s*>").unwrap();
    static ref BODY: Regex = Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").unwrap();
    static ref PRE: Regex = Regex::new(r"(?is)<pre\b[^>]*>(.*?)</pre\s*>").unwrap();
    static ref PRE_SLOT: Regex = Regex::new("\u{E000}([0-9]+)\u{E001}").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref LINE_BREAK: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?i)<li\b[^>]*>").unwrap();
    static ref BLOCK_TAG: Regex = Regex::new(
        r"(?i)</?(?:p|div|section|article|main|h[1-6]|ul|ol|li|blockquote|pre|table|tr|figure|figcaption|hr|dl|dt|dd)\b[^>]*>"
    )
    .unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"(?s)<[^>]+>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap();
    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Turns an article URL into readable text.
///
/// Failures never cross this boundary: they are logged and reported as
/// `None`, which the reader shows as "Failed to load article".
pub trait ContentExtractor: Send + Sync {
    /// Fetch and extract `url`.
    fn extract(&self, url: &str) -> Option<ReaderContent>;
}

/// [`ContentExtractor`] that downloads the page over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContentExtractor {
    client: Client,
}

impl HttpContentExtractor {
    /// Build the extractor's HTTP client.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, READER_USER_AGENT)
            .send()?;
        super::client::check_status(response.status())?;
        Ok(response.text()?)
    }
}

impl ContentExtractor for HttpContentExtractor {
    fn extract(&self, url: &str) -> Option<ReaderContent> {
        match self.fetch(url) {
            Ok(html) => {
                let content = extract_from_html(&html);
                if content.is_none() {
                    debug!(url, "No readable content found");
                }
                content
            }
            Err(e) => {
                warn!(url, error = %e, "Failed to fetch readable content");
                None
            }
        }
    }
}

/// Extract readable content from an HTML document.
///
/// Returns `None` when no text survives the cleanup.
///
/// ```
/// use curaq_tui::api::extract_from_html;
///
/// let html = "<html><head><title>Hi</title></head><body><p>Hello</p></body></html>";
/// let content = extract_from_html(html).unwrap();
/// assert_eq!(content.title, "Hi");
/// assert_eq!(content.text_content, "Hello");
/// ```
pub fn extract_from_html(html: &str) -> Option<ReaderContent> {
    let meta = meta_properties(html);

    let mut cleaned = COMMENT.replace_all(html, "").into_owned();
    for element in STRIPPED.iter() {
        cleaned = element.replace_all(&cleaned, "").into_owned();
    }

    let region = [&*ARTICLE, &*MAIN, &*BODY]
        .iter()
        .find_map(|re| re.captures(&cleaned).and_then(|c| c.get(1)))
        .map_or(cleaned.as_str(), |m| m.as_str());

    let text_content = html_to_text(region);
    if text_content.is_empty() {
        return None;
    }

    let title = first_of(&meta, &["og:title", "twitter:title"])
        .or_else(|| capture_text(&TITLE, html))
        .or_else(|| capture_text(&H1, region))
        .unwrap_or_default();

    let excerpt = first_of(&meta, &["description", "og:description"])
        .or_else(|| text_content.lines().find(|l| !l.is_empty()).map(str::to_string))
        .unwrap_or_default();

    Some(ReaderContent {
        title,
        content: region.trim().to_string(),
        text_content,
        excerpt,
        byline: first_of(&meta, &["author", "article:author"]),
        site_name: first_of(&meta, &["og:site_name"]),
    })
}

/// `name`/`property` → `content` for every `<meta>` tag, keys lowercased.
fn meta_properties(html: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for tag in META_TAG.find_iter(html) {
        let attrs: HashMap<String, String> = ATTRIBUTE
            .captures_iter(tag.as_str())
            .filter_map(|c| {
                let key = c.get(1)?.as_str().to_ascii_lowercase();
                let value = c.get(2).or_else(|| c.get(3))?.as_str().to_string();
                Some((key, value))
            })
            .collect();
        let key = attrs.get("property").or_else(|| attrs.get("name"));
        if let (Some(key), Some(content)) = (key, attrs.get("content")) {
            props
                .entry(key.to_ascii_lowercase())
                .or_insert_with(|| decode_entities(content).trim().to_string());
        }
    }
    props
}

fn first_of(meta: &HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| meta.get(*k))
        .find(|v| !v.is_empty())
        .cloned()
}

fn capture_text(re: &Regex, html: &str) -> Option<String> {
    let inner = re.captures(html)?.get(1)?.as_str();
    let text = collapse_whitespace(&decode_entities(&ANY_TAG.replace_all(inner, "")));
    (!text.is_empty()).then_some(text)
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Flatten HTML to plain text with blank lines between blocks.
fn html_to_text(html: &str) -> String {
    // Set preformatted blocks aside so whitespace collapsing skips them.
    let mut preformatted = Vec::new();
    let slotted = PRE.replace_all(html, |caps: &Captures<'_>| {
        preformatted.push(preformatted_text(&caps[1]));
        format!("<pre>{SLOT_OPEN}{}{SLOT_CLOSE}</pre>", preformatted.len() - 1)
    });

    let flowed = WHITESPACE.replace_all(&slotted, " ");
    let broken = LINE_BREAK.replace_all(&flowed, "\n");
    let bulleted = LIST_ITEM.replace_all(&broken, "\n\n• ");
    let blocked = BLOCK_TAG.replace_all(&bulleted, "\n\n");
    let stripped = ANY_TAG.replace_all(&blocked, "");
    let decoded = decode_entities(&stripped);

    let trimmed: Vec<&str> = decoded.lines().map(str::trim).collect();
    let joined = trimmed.join("\n");
    let compact = BLANK_RUN.replace_all(&joined, "\n\n");
    PRE_SLOT
        .replace_all(&compact, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| preformatted.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .trim_matches('\n')
        .to_string()
}

/// Text of a `<pre>` body with its line structure intact.
fn preformatted_text(inner: &str) -> String {
    let stripped = ANY_TAG.replace_all(inner, "");
    let decoded = decode_entities(&stripped).replace("\r\n", "\n").replace('\t', PRE_TAB);
    // A newline right after the opening tag is not content.
    let body = decoded.strip_prefix('\n').unwrap_or(&decoded);
    body.trim_end().to_string()
}

/// Decode named and numeric character references.
fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures<'_>| {
            let raw = &caps[1];
            let decoded = if let Some(hex) = raw.strip_prefix("#x").or_else(|| raw.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = raw.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(raw)
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" | "AMP" => '&',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "quot" | "QUOT" => '"',
        "apos" => '\'',
        "nbsp" | "ensp" | "emsp" | "thinsp" => ' ',
        "shy" | "zwnj" | "zwj" | "lrm" | "rlm" => '\u{200B}',
        "mdash" => '—',
        "ndash" => '–',
        "minus" => '−',
        "hellip" => '…',
        "lsquo" => '‘',
        "rsquo" => '’',
        "sbquo" => '‚',
        "ldquo" => '“',
        "rdquo" => '”',
        "bdquo" => '„',
        "laquo" => '«',
        "raquo" => '»',
        "lsaquo" => '‹',
        "rsaquo" => '›',
        "bull" => '•',
        "middot" => '·',
        "prime" => '′',
        "Prime" => '″',
        "dagger" => '†',
        "Dagger" => '‡',
        "sect" => '§',
        "para" => '¶',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "deg" => '°',
        "plusmn" => '±',
        "times" => '×',
        "divide" => '÷',
        "frac12" => '½',
        "frac14" => '¼',
        "frac34" => '¾',
        "sup1" => '¹',
        "sup2" => '²',
        "sup3" => '³',
        "micro" => 'µ',
        "cent" => '¢',
        "pound" => '£',
        "yen" => '¥',
        "euro" => '€',
        "curren" => '¤',
        "iexcl" => '¡',
        "iquest" => '¿',
        "larr" => '←',
        "rarr" => '→',
        "uarr" => '↑',
        "darr" => '↓',
        "harr" => '↔',
        "le" => '≤',
        "ge" => '≥',
        "ne" => '≠',
        "asymp" => '≈',
        "infin" => '∞',
        "szlig" => 'ß',
        "AElig" => 'Æ',
        "aelig" => 'æ',
        "OElig" => 'Œ',
        "oelig" => 'œ',
        "Oslash" => 'Ø',
        "oslash" => 'ø',
        "Aring" => 'Å',
        "aring" => 'å',
        "Ccedil" => 'Ç',
        "ccedil" => 'ç',
        "ETH" => 'Ð',
        "eth" => 'ð',
        "THORN" => 'Þ',
        "thorn" => 'þ',
        _ => return accented_letter(name),
    })
}

/// Latin letters with a grave, acute, circumflex, tilde or umlaut accent,
/// e.g. `eacute`, `Ouml`, `ntilde`.
fn accented_letter(name: &str) -> Option<char> {
    let mut chars = name.chars();
    let base = chars.next()?;
    let accent = chars.as_str();
    let lower = match (base.to_ascii_lowercase(), accent) {
        ('a', "grave") => 'à',
        ('a', "acute") => 'á',
        ('a', "circ") => 'â',
        ('a', "tilde") => 'ã',
        ('a', "uml") => 'ä',
        ('e', "grave") => 'è',
        ('e', "acute") => 'é',
        ('e', "circ") => 'ê',
        ('e', "uml") => 'ë',
        ('i', "grave") => 'ì',
        ('i', "acute") => 'í',
        ('i', "circ") => 'î',
        ('i', "uml") => 'ï',
        ('o', "grave") => 'ò',
        ('o', "acute") => 'ó',
        ('o', "circ") => 'ô',
        ('o', "tilde") => 'õ',
        ('o', "uml") => 'ö',
        ('u', "grave") => 'ù',
        ('u', "acute") => 'ú',
        ('u', "circ") => 'û',
        ('u', "uml") => 'ü',
        ('y', "acute") => 'ý',
        ('y', "uml") => 'ÿ',
        ('n', "tilde") => 'ñ',
        _ => return None,
    };
    if base.is_ascii_uppercase() {
        lower.to_uppercase().next()
    } else {
        Some(lower)
    }
}
