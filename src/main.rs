use clap::Parser;
use htmlcheck::run::{CliOptions, Error, HttpFetcher, OsFacade, RunOptions};
use std::io;
use std::io::stdout;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

struct RealOs {
    fetcher: HttpFetcher,
}

#[doc(hidden)]
impl OsFacade for RealOs {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn fetch_url(&self, url: &str) -> io::Result<Vec<u8>> {
        self.fetcher.fetch(url)
    }

    fn stdout(&mut self) -> impl io::Write {
        stdout().lock()
    }

    fn write_error(&mut self, err: Error) {
        eprint!("{err}")
    }
}

fn main() -> ExitCode {
    let cli = CliOptions::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let options: RunOptions = cli.into();
    let fetcher = match HttpFetcher::for_options(&options) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("couldn't create HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    if htmlcheck::run::run(&options, &mut RealOs { fetcher }) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
