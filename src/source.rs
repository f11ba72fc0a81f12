//! Input sources.
//!
//! Produces the [`RawDocument`] handed to the rest of the pipeline, either by
//! fetching a URL or by draining a byte stream (stdin in the binary).

use encoding_rs::UTF_8;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// The input HTML plus the URL it came from, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Full HTML text.
    pub html: String,

    /// Base URL used to resolve relative links and images.
    pub base_url: Option<Url>,
}

impl RawDocument {
    /// Wrap HTML that has no known origin.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            base_url: None,
        }
    }

    /// Attach a base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Build the HTTP client used for the single outbound request.
///
/// Redirects, TLS and timeouts stay at reqwest's defaults.
pub fn http_client(options: &Options) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .build()?)
}

/// Fetch `url` once and read the whole body as text.
///
/// The body is decoded with the charset declared in `Content-Type`,
/// falling back to UTF-8. Non-success statuses are not errors: the body is
/// still returned so the extractor can decide.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_document(client: &reqwest::Client, url: Url) -> Result<RawDocument> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "non-success HTTP status; parsing body anyway");
    }

    // Relative links resolve against the final URL after redirects.
    let final_url = response.url().clone();
    let html = response.text().await?;
    debug!(bytes = html.len(), %final_url, "fetched document");

    Ok(RawDocument {
        html,
        base_url: Some(final_url),
    })
}

/// Drain `reader` to end-of-stream and decode it as HTML text.
///
/// Chunks are appended in arrival order. Fails with [`Error::EmptyInput`]
/// when the stream carried no content.
#[instrument(skip_all)]
pub async fn read_document<R>(mut reader: R) -> Result<RawDocument>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await.map_err(Error::Read)?;
    debug!(bytes = bytes.len(), "read input stream");

    let html = decode_html(&bytes);
    if html.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(RawDocument::new(html))
}

/// Decode bytes as UTF-8, dropping a leading BOM.
///
/// Invalid sequences become U+FFFD rather than failing.
///
/// ```rust
/// use readable_extract::source::decode_html;
///
/// assert_eq!(decode_html(b"\xEF\xBB\xBF<p>hi</p>"), "<p>hi</p>");
/// assert_eq!(decode_html(b"caf\xE9"), "caf\u{FFFD}");
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        warn!("input contained invalid UTF-8; replaced with U+FFFD");
    }
    text.into_owned()
}
