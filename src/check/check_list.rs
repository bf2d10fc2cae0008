use serde::Deserialize;

/// An ordered list of CSS selector strings, as read from a checks file.
///
/// The checks file is a JSON array of strings:
///
/// ```json
/// ["h1", "div#footer", "input[type=text]"]
/// ```
///
/// Duplicates are allowed. The list keeps its input order; [`CheckList::sorted`] gives the order checks get evaluated
/// in.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    /// Parse the contents of a checks file.
    ///
    /// Anything other than a JSON array of strings is an error.
    pub fn from_json(contents: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(contents)
    }

    /// The selectors, in input order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The selectors, sorted lexicographically by bytes.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.selectors.iter().map(String::as_str).collect();
        sorted.sort();
        sorted
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl From<Vec<String>> for CheckList {
    fn from(selectors: Vec<String>) -> Self {
        Self::new(selectors)
    }
}

impl<'a> From<&[&'a str]> for CheckList {
    fn from(selectors: &[&'a str]) -> Self {
        Self::new(selectors.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::utils_for_test::*;

    #[test]
    fn parse_array() {
        let result = CheckList::from_json(br#"["h1", "div#footer", "input[type=text]"]"#);
        unwrap!(result, Ok(checks));
        assert_eq!(checks.selectors(), ["h1", "div#footer", "input[type=text]"]);
    }

    #[test]
    fn parse_empty_array() {
        let result = CheckList::from_json(b"[]");
        unwrap!(result, Ok(checks));
        assert!(checks.is_empty());
    }

    #[test]
    fn parse_object_is_error() {
        let result = CheckList::from_json(br#"{"h1": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_non_string_element_is_error() {
        let result = CheckList::from_json(br#"["h1", 2]"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_malformed_is_error() {
        let result = CheckList::from_json(br#"["h1""#);
        assert!(result.is_err());
    }

    #[test]
    fn sorted_keeps_duplicates() {
        let checks = CheckList::from(&["p", "h1", "div", "h1"][..]);
        assert_eq!(checks.sorted(), ["div", "h1", "h1", "p"]);
        assert_eq!(checks.len(), 4);
    }

    #[test]
    fn sorted_is_by_bytes() {
        let checks = CheckList::from(&["a", "B", "#id", "a b", "a[href]"][..]);
        assert_eq!(checks.sorted(), ["#id", "B", "a", "a b", "a[href]"]);
    }

    #[test]
    fn sorted_leaves_input_order_alone() {
        let checks = CheckList::from(&["p", "h1"][..]);
        let _ = checks.sorted();
        assert_eq!(checks.selectors(), ["p", "h1"]);
    }
}
