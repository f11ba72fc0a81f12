//! Command-line interface for the two binaries.
//!
//! `extract_url` fetches a page; `extract_stdin` reads one from standard
//! input. Both share [`CommonArgs`] and end through [`finish`], which maps
//! every error to a stderr line and exit status 1.

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser};
use tokio::io::AsyncRead;
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::{Options, DEFAULT_USER_AGENT};
use crate::pipeline::{Pipeline, Stage};
use crate::source::{fetch_document, http_client, read_document};
use crate::url_utils::parse_http_url;

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Also render the article as Markdown under a top-level `markdown` key
    #[arg(long)]
    pub markdown: bool,

    /// Stop parsing after this many elements (0 = no limit)
    #[arg(long, env = "READABLE_MAX_ELEMENTS", default_value_t = 0)]
    pub max_elements: usize,

    /// Number of top candidates compared when picking the article root
    #[arg(long, env = "READABLE_N_TOP_CANDIDATES", default_value_t = 5)]
    pub n_top_candidates: usize,

    /// Minimum article length in characters before cleaning is relaxed
    #[arg(long, env = "READABLE_CHAR_THRESHOLD", default_value_t = 500)]
    pub char_threshold: usize,

    /// Keep class attributes in the article HTML
    #[arg(long)]
    pub keep_classes: bool,

    /// Class to keep even without --keep-classes (repeatable, comma-separated)
    #[arg(long = "preserve-class", value_delimiter = ',')]
    pub preserve_classes: Vec<String>,

    /// Ignore JSON-LD when collecting metadata
    #[arg(long)]
    pub disable_json_ld: bool,

    /// Log pipeline progress to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Build extraction [`Options`] from the flags.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            max_elements_to_parse: self.max_elements,
            n_top_candidates: self.n_top_candidates,
            char_threshold: self.char_threshold,
            keep_classes: self.keep_classes,
            classes_to_preserve: self.preserve_classes.clone(),
            disable_json_ld: self.disable_json_ld,
            output_markdown: self.markdown,
            ..Options::default()
        }
    }
}

/// Extract the readable article of a web page and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "extract_url", author, version, about)]
pub struct UrlArgs {
    /// URL of the page to extract
    pub url: Option<String>,

    /// User-Agent header for the request
    #[arg(long, env = "READABLE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl UrlArgs {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            user_agent: self.user_agent.clone(),
            ..self.common.to_options()
        }
    }
}

/// Extract the readable article of an HTML document on stdin and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "extract_stdin", author, version, about)]
pub struct StdinArgs {
    /// Original URL of the document, used to resolve relative links
    #[arg(long, env = "READABLE_BASE_URL")]
    pub base_url: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Parse process arguments.
///
/// On a clap error the message is printed and the exit code returned:
/// `--help`/`--version` exit 0, anything else exits 1.
pub fn parse_args<P: Parser>() -> std::result::Result<P, ExitCode> {
    P::try_parse().map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// URL variant: validate, fetch, extract, emit to `out`.
pub async fn run_url<W: Write>(args: UrlArgs, out: &mut W) -> Result<()> {
    debug!(stage = %Stage::AwaitingInput, "entering stage");
    let target = args
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or(Error::MissingUrl)?;
    let url = parse_http_url(target)?;
    let options = args.to_options();

    debug!(stage = %Stage::Fetching, %url, "entering stage");
    let client = http_client(&options)?;
    let raw = fetch_document(&client, url).await?;

    Pipeline::new(options).run(raw, out)
}

/// Stdin variant: drain `input`, extract, emit to `out`.
pub async fn run_stdin<R, W>(args: StdinArgs, input: R, out: &mut W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    debug!(stage = %Stage::AwaitingInput, "entering stage");
    let base_url = args.base_url.as_deref().map(parse_http_url).transpose()?;
    let options = args.common.to_options();

    debug!(stage = %Stage::Reading, "entering stage");
    let raw = read_document(input).await?.with_base_url(base_url);

    Pipeline::new(options).run(raw, out)
}

/// Turn the run outcome into the process exit status.
#[must_use]
pub fn finish(result: Result<()>) -> ExitCode {
    let stage = Stage::Terminated {
        success: result.is_ok(),
    };
    debug!(%stage, "entering stage");
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
