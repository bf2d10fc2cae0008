use crate::check::{CheckList, SelectorError};
use crate::html_doc::HtmlDoc;
use crate::run::RunOptions;
use crate::{check, output};
use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;
use tracing::{debug, info};

/// The run's overall possible error.
#[derive(Debug)]
pub enum Error {
    /// The CLI options conflict with each other.
    Usage(UsageError),

    /// The checks file or HTML file doesn't exist.
    MissingFile(Input),

    /// Couldn't read an input file.
    FileReadError(Input, io::Error),

    /// Couldn't download the HTML document. This holds the URL and a description of the failure.
    Fetch(String, String),

    /// The checks file isn't a JSON array of strings. This holds the checks file's path.
    ChecksParse(String, serde_json::Error),

    /// One of the checks isn't a valid CSS selector.
    ///
    /// This comes from [`check::evaluate`].
    Selector(SelectorError),

    /// Couldn't write the results.
    Output(io::Error),
}

impl std::error::Error for Error {}

/// Invalid combinations of options.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UsageError {
    /// Both [`RunOptions::file`] and [`RunOptions::url`] were given.
    FileAndUrl,
}

impl Display for UsageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::FileAndUrl => f.write_str("specify either file or url, but not both"),
        }
    }
}

/// A file by path, or a URL.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    FilePath(String),
    Url(String),
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::FilePath(path) => f.write_str(path),
            Input::Url(url) => f.write_str(url),
        }
    }
}

impl Error {
    pub(crate) fn from_io_error(error: io::Error, input: Input) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Error::MissingFile(input),
            _ => Error::FileReadError(input, error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Usage(err) => writeln!(f, "{err}"),
            Error::MissingFile(input) => writeln!(f, "{input} does not exist. Exiting."),
            Error::FileReadError(input, err) => writeln!(f, "{err} while reading {input}"),
            Error::Fetch(url, message) => writeln!(f, "error downloading {url}. Exiting. error: {message}"),
            Error::ChecksParse(path, err) => writeln!(f, "invalid checks file {path}: {err}"),
            Error::Selector(err) => writeln!(f, "{err}"),
            Error::Output(err) => writeln!(f, "{err} while writing results"),
        }
    }
}

/// A simple facade for handling I/O.
///
/// This trait lets you do "I/O-y stuff" like mocking out files or HTTP. The [`run`] method uses it.
pub trait OsFacade {
    /// Read a file path (or your mock of one) to bytes.
    ///
    /// A missing file should be an [`io::ErrorKind::NotFound`] error.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Download a URL (or your mock of one) to bytes.
    ///
    /// Only transport failures should be errors. A response with a non-success HTTP status should still return its
    /// body, which then gets checked like any other document. [`HttpFetcher`](crate::run::HttpFetcher) does this.
    fn fetch_url(&self, url: &str) -> io::Result<Vec<u8>>;

    /// Get a writer for stdout (or your mock of it).
    fn stdout(&mut self) -> impl Write;

    /// Handle an error.
    fn write_error(&mut self, err: Error);

    /// Read an [`Input`], dispatching to [`Self::read_file`] or [`Self::fetch_url`].
    fn read_input(&self, input: &Input) -> Result<Vec<u8>, Error> {
        match input {
            Input::FilePath(path) => {
                info!(path, "reading file");
                self.read_file(path)
                    .map_err(|err| Error::from_io_error(err, input.clone()))
            }
            Input::Url(url) => {
                info!(url, "fetching document");
                self.fetch_url(url).map_err(|err| {
                    debug!(url, %err, "fetch failed");
                    Error::Fetch(url.to_string(), err.to_string())
                })
            }
        }
    }
}

/// Runs htmlcheck end to end.
///
/// This uses the provided [RunOptions] and [OsFacade] to read the checks file and the HTML document, evaluates the
/// checks against the document, and writes the results as JSON to the given [`OsFacade`]'s stdout.
///
/// The file/URL options are validated before anything is read, and the checks file is read before the HTML
/// document. Returns whether the run succeeded; on failure, the error has been passed to [`OsFacade::write_error`]
/// and nothing has been written to stdout.
pub fn run(options: &RunOptions, os: &mut impl OsFacade) -> bool {
    match run_or_error(options, os) {
        Ok(()) => true,
        Err(err) => {
            os.write_error(err);
            false
        }
    }
}

fn run_or_error(options: &RunOptions, os: &mut impl OsFacade) -> Result<(), Error> {
    let html_input = options.html_input().map_err(Error::Usage)?;

    let checks_input = Input::FilePath(options.checks.to_string());
    let checks_contents = os.read_input(&checks_input)?;
    let checks =
        CheckList::from_json(&checks_contents).map_err(|err| Error::ChecksParse(options.checks.to_string(), err))?;
    info!(count = checks.len(), "loaded checks");

    let html_contents = os.read_input(&html_input)?;
    let doc = HtmlDoc::from_bytes(&html_contents);

    let result = check::evaluate(&doc, &checks).map_err(Error::Selector)?;

    let mut stdout = os.stdout();
    output::write_json(&result, &mut stdout).map_err(Error::Output)
}
