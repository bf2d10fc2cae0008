//! The parsed HTML document that checks run against.
//!
//! See [`HtmlDoc`] for how to create one.
mod doc;

pub use doc::*;
