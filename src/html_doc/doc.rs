use crate::check::{parse_selector, SelectorError};
use scraper::{Html, Selector};

/// A fully parsed HTML document.
///
/// HTML parsing is lenient: malformed markup is recovered the way a browser would recover it, so parsing never fails.
/// A bare fragment like `<h1>Hi</h1>` still gets the implied `<html>`, `<head>` and `<body>` elements.
///
/// ```
/// use htmlcheck::html_doc::HtmlDoc;
///
/// let doc = HtmlDoc::parse("<html><h1>Hi</h1></html>");
/// assert_eq!(doc.count_matches("h1"), Ok(1));
/// assert_eq!(doc.count_matches("h2"), Ok(0));
/// ```
#[derive(Clone, Debug)]
pub struct HtmlDoc {
    html: Html,
}

impl HtmlDoc {
    /// Parse a full HTML document.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Parse raw bytes, as read from a file or an HTTP response body.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Counts the elements that match a CSS selector string.
    ///
    /// Fails the same way [`evaluate`](crate::check::evaluate) does if the selector doesn't parse.
    pub fn count_matches(&self, selector: &str) -> Result<usize, SelectorError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).count())
    }

    pub(crate) fn has_match(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }
}
