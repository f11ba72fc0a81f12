//! Extraction pipeline.
//!
//! One invocation walks the stages below exactly once. Any error, including
//! a panic inside the DOM builder or the readability library, ends the run
//! as a failure with a single diagnostic.
//!
//! ```text
//! AwaitingInput -> Fetching|Reading -> Parsing -> Extracting -> Emitting -> Terminated(success)
//!        \_________________\______________\___________\___________\-> Terminated(failure, exit 1)
//! ```

use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, instrument};

use crate::document::build_document;
use crate::emit::write_envelope;
use crate::error::{Error, Result};
use crate::extract::extract_article;
use crate::markdown;
use crate::options::Options;
use crate::result::OutputEnvelope;
use crate::source::RawDocument;

/// Pipeline stage, used for tracing and for reporting where a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingInput,
    /// URL variant acquisition.
    Fetching,
    /// Stdin variant acquisition.
    Reading,
    Parsing,
    Extracting,
    Emitting,
    Terminated { success: bool },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingInput => "awaiting-input",
            Self::Fetching => "fetching",
            Self::Reading => "reading",
            Self::Parsing => "parsing",
            Self::Extracting => "extracting",
            Self::Emitting => "emitting",
            Self::Terminated { success: true } => "terminated(success)",
            Self::Terminated { success: false } => "terminated(failure)",
        };
        f.write_str(name)
    }
}

/// Runs Parsing, Extracting and Emitting for one acquired document.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: Options,
}

impl Pipeline {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse `raw`, extract the article and build the output envelope.
    ///
    /// Panics raised while parsing or extracting are caught and returned as
    /// [`Error::Internal`].
    #[instrument(skip_all, fields(bytes = raw.html.len()))]
    pub fn process(&self, raw: RawDocument) -> Result<OutputEnvelope> {
        contain(|| self.process_inner(raw))
    }

    /// Process `raw` and write the envelope to `out` as one JSON line.
    ///
    /// Nothing is written unless extraction succeeded.
    pub fn run<W: Write>(&self, raw: RawDocument, out: &mut W) -> Result<()> {
        let envelope = self.process(raw)?;

        debug!(stage = %Stage::Emitting, "entering stage");
        write_envelope(out, &envelope)
    }

    fn process_inner(&self, raw: RawDocument) -> Result<OutputEnvelope> {
        debug!(stage = %Stage::Parsing, "entering stage");
        let parsed = build_document(raw);

        debug!(stage = %Stage::Extracting, "entering stage");
        let article = extract_article(parsed, &self.options)?;
        info!(length = article.length, "article extracted");

        let markdown = self
            .options
            .output_markdown
            .then(|| markdown::to_markdown(&article.content));

        let mut envelope = OutputEnvelope::from_article(article);
        envelope.markdown = markdown;
        Ok(envelope)
    }
}

/// Run `f`, converting a panic into [`Error::Internal`].
pub fn contain<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(Error::Internal(panic_message(payload.as_ref()))),
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
