//! Read HTML from stdin, extract the readable article and print it as one
//! JSON line.
//!
//! Usage: `extract_stdin [--base-url URL] < page.html`

use std::process::ExitCode;

use readable_extract::cli::{self, StdinArgs};
use readable_extract::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args::<StdinArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logging::init(args.common.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::finish(cli::run_stdin(args, tokio::io::stdin(), &mut out).await)
}
