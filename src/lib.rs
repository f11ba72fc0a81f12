//! # readable-extract
//!
//! Extracts the readable article from an HTML page and reports it as a
//! single JSON object: the article HTML plus title, byline, length, excerpt
//! and site name.
//!
//! ## Quick Start
//!
//! ```rust
//! use readable_extract::extract;
//!
//! let html = r#"<html><head><title>My Article</title></head><body><article>
//! <p>The first paragraph has plenty of words, commas, and clauses, so it reads like prose.</p>
//! <p>The second paragraph keeps going, with more words, more commas, and more clauses.</p>
//! </article></body></html>"#;
//!
//! let envelope = extract(html)?;
//! println!("Title: {:?}", envelope.metadata.title);
//! println!("Content: {}", envelope.html);
//! # Ok::<(), readable_extract::Error>(())
//! ```
//!
//! ## Binaries
//!
//! - `extract_url <URL>` fetches the page, then extracts.
//! - `extract_stdin` reads the page from standard input.
//!
//! Both write one JSON line to stdout on success. On failure they write one
//! diagnostic line to stderr and exit with status 1.

mod error;
mod options;
mod result;

/// Input sources (URL fetch, byte stream).
pub mod source;

/// URL validation for targets and base URLs.
pub mod url_utils;

/// HTML to DOM construction.
pub mod document;

/// Readability extraction over a parsed document.
pub mod extract;

/// Markdown rendering of article HTML.
pub mod markdown;

/// Stage machine and failure boundary.
pub mod pipeline;

/// JSON line emission.
pub mod emit;

/// Tracing subscriber setup.
pub mod logging;

/// Argument parsing and binary drivers.
pub mod cli;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use pipeline::{Pipeline, Stage};
pub use result::{Article, OutputEnvelope, OutputMetadata};
pub use source::RawDocument;

/// Extracts the article from an HTML document using default options.
///
/// # Returns
///
/// Returns the output envelope on success, or [`Error::NoArticle`] when no
/// article could be identified.
pub fn extract(html: &str) -> Result<OutputEnvelope> {
    extract_with_options(html, &Options::default())
}

/// Extracts the article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use readable_extract::{extract_with_options, Error, Options};
///
/// let options = Options {
///     output_markdown: true,
///     ..Options::default()
/// };
/// let err = extract_with_options("<html><body></body></html>", &options).unwrap_err();
/// assert!(matches!(err, Error::NoArticle));
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<OutputEnvelope> {
    extract_document(RawDocument::new(html), options)
}

/// Extracts the article from a [`RawDocument`], resolving links against its
/// base URL when one is set.
pub fn extract_document(raw: RawDocument, options: &Options) -> Result<OutputEnvelope> {
    Pipeline::new(options.clone()).process(raw)
}
