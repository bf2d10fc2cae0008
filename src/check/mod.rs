//! Evaluate a list of CSS selectors against an [`HtmlDoc`](crate::html_doc::HtmlDoc).
//!
//! The entry point is [`evaluate`], which takes a parsed document and a [`CheckList`] and reports, per selector,
//! whether the document contains at least one matching element.
//!
//! ```
//! use htmlcheck::check::{evaluate, CheckList};
//! use htmlcheck::html_doc::HtmlDoc;
//!
//! let doc = HtmlDoc::parse("<html><h1>Hi</h1></html>");
//! let checks = CheckList::new(vec!["h2".to_string(), "h1".to_string()]);
//!
//! let result = evaluate(&doc, &checks).unwrap();
//! assert_eq!(result.get("h1"), Some(true));
//! assert_eq!(result.get("h2"), Some(false));
//! ```
mod check_list;
mod checker;

pub use check_list::*;
pub use checker::*;
