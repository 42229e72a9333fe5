// SPDX-License-Identifier: MPL-2.0

//! Rich text to plain text plus links.
//!
//! Post bodies, content warnings, profile notes and profile field values all
//! arrive as markup. Items never look at the markup themselves: they hand
//! it to a [`MarkupParser`] and keep the links it reports, in document order.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A hyperlink found in rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    /// Anchor text with markup removed
    pub display_text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            display_text: display_text.into(),
        }
    }

    /// Domain of the link target, for showing next to the anchor text.
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Output of a [`MarkupParser`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMarkup {
    pub text: String,
    pub links: Vec<Link>,
}

/// Converts markup into plain text and the ordered list of links it embeds.
///
/// Implementations must be pure. Any `Fn(&str) -> ParsedMarkup` closure is a
/// parser, which keeps fixtures in tests free of real markup.
pub trait MarkupParser: Send + Sync {
    fn parse(&self, markup: &str) -> ParsedMarkup;
}

impl<F> MarkupParser for F
where
    F: Fn(&str) -> ParsedMarkup + Send + Sync,
{
    fn parse(&self, markup: &str) -> ParsedMarkup {
        self(markup)
    }
}

/// Which parser to use for entry bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    /// Server-rendered HTML (Mastodon and friends)
    #[default]
    Html,
    /// Plain text with bare URLs
    Plain,
}

impl MarkupFormat {
    pub fn parser(self) -> Box<dyn MarkupParser> {
        match self {
            MarkupFormat::Html => Box::new(HtmlMarkup),
            MarkupFormat::Plain => Box::new(PlainMarkup),
        }
    }
}

// Compile regexes once.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>(.*?)</a\s*>"#).unwrap()
});

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>\s*<p(?:\s[^>]*)?>").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").unwrap());

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]\{}|\\^`\x00-\x1f\x7f]+").unwrap());

/// Regex-based HTML reader for server-rendered post bodies.
///
/// Handles what servers actually emit: `<p>`, `<br>`, `<span>` and `<a>`.
/// It is not a general HTML parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl MarkupParser for HtmlMarkup {
    fn parse(&self, markup: &str) -> ParsedMarkup {
        let links = ANCHOR_RE
            .captures_iter(markup)
            .map(|caps| {
                let href = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                let inner = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
                Link::new(
                    html_decode(href.trim()),
                    html_decode(&TAG_RE.replace_all(inner, "")).trim(),
                )
            })
            .collect();

        let text = PARAGRAPH_RE.replace_all(markup, "\n\n");
        let text = BREAK_RE.replace_all(&text, "\n");
        let text = TAG_RE.replace_all(&text, "");
        let text = html_decode(&text).trim().to_string();

        ParsedMarkup { text, links }
    }
}

/// Plain text with bare URLs, as sent by protocols without HTML bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl MarkupParser for PlainMarkup {
    fn parse(&self, markup: &str) -> ParsedMarkup {
        let links = URL_RE
            .find_iter(markup)
            .map(|m| {
                let url = trim_url_trailing(m.as_str());
                Link::new(url, url)
            })
            .collect();

        ParsedMarkup {
            text: markup.to_string(),
            links,
        }
    }
}

/// Trim trailing punctuation that is likely sentence-ending, not part of the URL.
fn trim_url_trailing(url: &str) -> &str {
    url.trim_end_matches(|c| matches!(c, '.' | ',' | ';' | '!' | '?'))
}

/// Entity decoding for the handful of entities servers emit.
/// `&amp;` goes last so `&amp;lt;` stays a literal `&lt;`.
fn html_decode(s: &str) -> String {
    let decoded = NUMERIC_ENTITY_RE.replace_all(s, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (_, Some(dec)) => dec.as_str().parse().ok(),
            _ => None,
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    decoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
