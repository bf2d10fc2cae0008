use crate::run::{Input, OsFacade, UsageError};
use derive_builder::Builder;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
pub const DEFAULT_HTML_FILE: &str = "index.html";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

macro_rules! create_options_structs {
    (
        $(
            $(#[$meta:meta])*
            clap $clap:tt
            pub $name:ident : $ty:ty
        ),* $(,)?
    ) => {
        #[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
        #[command(version, about, long_about = None)]
        #[doc(hidden)]
        pub struct CliOptions {
            $(
            $(#[$meta])*
            #[arg$clap]
            pub(crate) $name: $ty,
            )*

            // clap-only stuff:

            /// Log more details to stderr. Repeat for even more (-vv, -vvv).
            ///
            /// The RUST_LOG environment variable, if set, overrides this.
            #[arg(long, short, action = clap::ArgAction::Count)]
            pub(crate) verbose: u8,
        }

        /// Options analogous to the htmlcheck CLI's switches.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Builder)]
        #[builder(default)]
        pub struct RunOptions {
            $(
            $(#[$meta])*
            pub $name: $ty,
            )*
        }

        impl From<CliOptions> for RunOptions {
            fn from(value: CliOptions) -> Self {
                Self {
                    $($name: value.$name,)*
                }
            }
        }
    };
}

create_options_structs! {
    /// Path to the checks file: a JSON array of CSS selectors.
    clap(long, short, default_value = DEFAULT_CHECKS_FILE)
    pub checks: String,

    /// Path to the HTML file to check. Defaults to index.html if neither this nor --url is given.
    clap(long, short)
    pub file: Option<String>,

    /// URL of the HTML document to check, instead of a file.
    clap(long, short)
    pub url: Option<String>,

    /// Timeout in seconds for fetching --url.
    clap(long = "timeout", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)
    pub timeout_secs: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            checks: DEFAULT_CHECKS_FILE.to_string(),
            file: None,
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RunOptions {
    /// Where to read the HTML document from.
    ///
    /// At most one of [`Self::file`] and [`Self::url`] may be set. If neither is, this is [`DEFAULT_HTML_FILE`].
    pub fn html_input(&self) -> Result<Input, UsageError> {
        match (&self.file, &self.url) {
            (Some(_), Some(_)) => Err(UsageError::FileAndUrl),
            (Some(file), None) => Ok(Input::FilePath(file.to_string())),
            (None, Some(url)) => Ok(Input::Url(url.to_string())),
            (None, None) => Ok(Input::FilePath(DEFAULT_HTML_FILE.to_string())),
        }
    }

    /// The HTTP timeout from [`Self::timeout_secs`].
    ///
    /// [`run`](crate::run::run) never fetches anything itself; downloads go through [`OsFacade::fetch_url`]. This
    /// timeout only takes effect in a fetcher built from these options, like
    /// [`HttpFetcher::for_options`](crate::run::HttpFetcher::for_options).
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CliOptions {
    /// The log level requested by `-v` switches.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            3 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
