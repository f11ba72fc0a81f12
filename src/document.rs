//! Document builder.
//!
//! Wraps raw HTML into a `dom_query` document. html5ever recovers from
//! malformed markup, so building never fails; broken input just produces a
//! best-effort tree.

use dom_query::Document;
use tracing::{debug, instrument};
use url::Url;

use crate::source::RawDocument;

/// A parsed DOM plus the base URL the extractor resolves links against.
pub struct ParsedDocument {
    /// The navigable document tree.
    pub document: Document,

    /// Origin of the document, if known.
    pub base_url: Option<Url>,
}

impl ParsedDocument {
    /// Number of element nodes in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.document.select("*").length()
    }
}

/// Parse `raw` into a [`ParsedDocument`], consuming it.
#[instrument(skip_all, fields(bytes = raw.html.len(), base_url = raw.base_url.as_ref().map(Url::as_str)))]
#[must_use]
pub fn build_document(raw: RawDocument) -> ParsedDocument {
    let RawDocument { html, base_url } = raw;
    let document = Document::from(html);
    let parsed = ParsedDocument { document, base_url };
    debug!(elements = parsed.element_count(), "built document");
    parsed
}
