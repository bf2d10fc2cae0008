use crate::check::CheckList;
use crate::html_doc::HtmlDoc;
use scraper::Selector;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Whether each selector of a [`CheckList`] matched a document.
///
/// Keys are the distinct selector strings, and iterate (and serialize) in sorted order.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckResult {
    results: BTreeMap<String, bool>,
}

impl CheckResult {
    /// Whether the given selector matched, or `None` if it wasn't checked.
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl IntoIterator for CheckResult {
    type Item = (String, bool);
    type IntoIter = btree_map::IntoIter<String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Returned when a selector in the check list isn't a valid CSS selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorError {
    selector: String,
    message: String,
}

impl SelectorError {
    /// The selector string that failed to parse.
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl std::error::Error for SelectorError {}

impl Display for SelectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid selector {:?}: {}", self.selector, self.message)
    }
}

/// Evaluates each check against the document.
///
/// Checks are sorted and then evaluated one at a time, independently of each other. A selector appearing more than
/// once gets evaluated each time, and the last evaluation wins.
///
/// All selectors are parsed before any is evaluated. If any of them is invalid, the whole evaluation fails with the
/// first invalid selector in sorted order; there is no partial result.
pub fn evaluate(doc: &HtmlDoc, checks: &CheckList) -> Result<CheckResult, SelectorError> {
    let compiled = checks
        .sorted()
        .into_iter()
        .map(compile)
        .collect::<Result<Vec<_>, _>>()?;

    let mut results = BTreeMap::new();
    for (source, selector) in compiled {
        let present = doc.has_match(&selector);
        debug!(selector = source, present, "evaluated check");
        results.insert(source.to_string(), present);
    }
    Ok(CheckResult { results })
}

/// Parses the HTML text and evaluates the checks against it.
///
/// This is a shorthand for [`HtmlDoc::parse`] followed by [`evaluate`].
pub fn check_html<S: AsRef<str>>(html: &str, checks: &[S]) -> Result<CheckResult, SelectorError> {
    let checks = CheckList::new(checks.iter().map(|s| s.as_ref().to_string()).collect());
    evaluate(&HtmlDoc::parse(html), &checks)
}

fn compile(source: &str) -> Result<(&str, Selector), SelectorError> {
    Ok((source, parse_selector(source)?))
}

pub(crate) fn parse_selector(source: &str) -> Result<Selector, SelectorError> {
    Selector::parse(source).map_err(|err| SelectorError {
        selector: source.to_string(),
        message: err.to_string(),
    })
}
