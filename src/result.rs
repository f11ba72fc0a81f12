//! Result types for extraction output.
//!
//! [`Article`] is what the readability pass produced; [`OutputEnvelope`] is
//! the JSON object written to stdout.

use serde::{Deserialize, Serialize};

/// A successfully extracted article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// Cleaned HTML of the article body.
    pub content: String,

    /// Plain text of the article body.
    pub text_content: String,

    /// Article title.
    pub title: Option<String>,

    /// Author line.
    pub byline: Option<String>,

    /// Character count of the article text, as reported by the heuristic.
    pub length: usize,

    /// Short summary (meta description or first paragraph).
    pub excerpt: Option<String>,

    /// Name of the publishing site.
    pub site_name: Option<String>,
}

/// Metadata subset carried in the output envelope.
///
/// Field names serialize in camelCase (`siteName`). Absent values serialize
/// as `null`, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputMetadata {
    pub title: Option<String>,
    pub byline: Option<String>,
    pub length: usize,
    pub excerpt: Option<String>,
    pub site_name: Option<String>,
}

/// The single JSON object emitted per successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEnvelope {
    /// Article HTML.
    pub html: String,

    /// Article metadata.
    pub metadata: OutputMetadata,

    /// Markdown rendering, only present with `--markdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl OutputEnvelope {
    /// Build the envelope from an article.
    #[must_use]
    pub fn from_article(article: Article) -> Self {
        let Article {
            content,
            title,
            byline,
            length,
            excerpt,
            site_name,
            text_content: _,
        } = article;

        Self {
            html: content,
            metadata: OutputMetadata {
                title,
                byline,
                length,
                excerpt,
                site_name,
            },
            markdown: None,
        }
    }
}

impl From<Article> for OutputEnvelope {
    fn from(article: Article) -> Self {
        Self::from_article(article)
    }
}
