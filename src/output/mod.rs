//! Write [`CheckResult`](crate::check::CheckResult)s.
mod json;

pub use json::*;
