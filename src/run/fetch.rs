use crate::run::RunOptions;
use reqwest::blocking::Client;
use std::io;
use std::time::Duration;
use tracing::warn;

/// Downloads HTML documents over HTTP. This is what the CLI's [`OsFacade::fetch_url`](crate::run::OsFacade::fetch_url) uses.
///
/// Only transport failures (connection refused, timeout, a body that can't be read) are errors. A response with a
/// non-success status still has a body, and that body is what gets returned.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after the given duration.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Creates a fetcher using [`RunOptions::fetch_timeout`].
    pub fn for_options(options: &RunOptions) -> reqwest::Result<Self> {
        Self::new(options.fetch_timeout())
    }

    pub fn fetch(&self, url: &str) -> io::Result<Vec<u8>> {
        let response = self.client.get(url).send().map_err(io::Error::other)?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "non-success HTTP status; checking the response body anyway");
        }
        let body = response.bytes().map_err(io::Error::other)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::utils_for_test::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one request with the given status line and body, then returns the URL to request.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}/page.html", listener.local_addr().expect("local addr"));
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            loop {
                line.clear();
                let read = reader.read_line(&mut line).expect("read request");
                if read == 0 || line == "\r\n" {
                    break;
                }
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");
        });
        (url, handle)
    }

    #[test]
    fn success_body() {
        let (url, server) = serve_once("200 OK", "<h1>Hi</h1>");
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).expect("client");
        let result = fetcher.fetch(&url);
        server.join().expect("server thread");
        unwrap!(result, Ok(body));
        assert_eq!(body, b"<h1>Hi</h1>");
    }

    #[test]
    fn error_status_still_returns_body() {
        let (url, server) = serve_once("404 Not Found", "<h1>Page not found</h1>");
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).expect("client");
        let result = fetcher.fetch(&url);
        server.join().expect("server thread");
        unwrap!(result, Ok(body));
        assert_eq!(body, b"<h1>Page not found</h1>");
    }

    #[test]
    fn connection_refused_is_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}/", listener.local_addr().expect("local addr"));
        drop(listener);
        let fetcher = HttpFetcher::new(Duration::from_secs(5)).expect("client");
        assert!(fetcher.fetch(&url).is_err());
    }

    #[test]
    fn timeout_comes_from_options() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}/", listener.local_addr().expect("local addr"));
        // accepts connections (via the backlog) but never answers
        let options = RunOptions {
            timeout_secs: 1,
            ..RunOptions::default()
        };
        let fetcher = HttpFetcher::for_options(&options).expect("client");
        assert!(fetcher.fetch(&url).is_err());
        drop(listener);
    }
}
