//! Check an HTML document for elements matching a list of CSS selectors.
//!
//! The typical use is grading: a checks file lists the tags and attributes a submission must have (`"h1"`,
//! `"div#footer"`, `"input[type=text]"`), and htmlcheck reports which of them are present.
//!
//! - [`html_doc`] parses HTML into a queryable [`HtmlDoc`](html_doc::HtmlDoc)
//! - [`check`] evaluates a [`CheckList`](check::CheckList) against a document
//! - [`output`] writes the results as JSON
//! - [`run`] ties all of the above together, the way the CLI does
pub mod check;
pub mod html_doc;
pub mod output;
pub mod run;
mod util;
