//! Fetch a URL, extract the readable article and print it as one JSON line.
//!
//! Usage: `extract_url <URL>`

use std::process::ExitCode;

use readable_extract::cli::{self, UrlArgs};
use readable_extract::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args::<UrlArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logging::init(args.common.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::finish(cli::run_url(args, &mut out).await)
}
