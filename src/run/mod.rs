//! End-to-end runs.
//!
//! This module combines the [`crate::html_doc`], [`crate::check`], and [`crate::output`] mods into a single workflow.
//! It's useful for building functionality like the CLI's, but running it within-process.
//!
//! ## Example
//!
//! ```
//! # use htmlcheck::run;
//!
//! // First, let's define a mocked I/O. Replace this with whatever you need.
//! #[derive(Default)]
//! struct MockIo {
//!     stdout: Vec<u8>,
//! }
//!
//! impl run::OsFacade for MockIo {
//!     fn read_file(&self, path: &str) -> std::io::Result<Vec<u8>> {
//!         match path {
//!             "checks.json" => Ok(br#"["h1", "div#footer"]"#.to_vec()),
//!             "index.html" => Ok(b"<html><h1>Hi</h1></html>".to_vec()),
//!             _ => Err(std::io::Error::new(std::io::ErrorKind::NotFound, path)),
//!         }
//!     }
//!
//!     fn fetch_url(&self, url: &str) -> std::io::Result<Vec<u8>> {
//!         Err(std::io::Error::other(format!("no network for {url}")))
//!     }
//!
//!     fn stdout(&mut self) -> impl std::io::Write {
//!         &mut self.stdout
//!     }
//!
//!     fn write_error(&mut self, err: run::Error) {
//!         eprintln!("{err}")
//!     }
//! }
//!
//! // Now, use it:
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! // Use the defaults: checks.json against index.html.
//! let run_options = run::RunOptions::default();
//!
//! let mut os_facade = MockIo::default();
//! let succeeded = run::run(&run_options, &mut os_facade);
//! let stdout_text = String::from_utf8(os_facade.stdout)?;
//!
//! assert_eq!(succeeded, true);
//! assert_eq!(stdout_text, "{\n    \"div#footer\": false,\n    \"h1\": true\n}\n");
//! #
//! #     Ok(())
//! # }
//! ```
mod cli;
mod fetch;
mod run_main;

pub use cli::*;
pub use fetch::*;
pub use run_main::*;
