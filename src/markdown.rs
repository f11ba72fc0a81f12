//! Markdown rendering of the extracted article.
//!
//! The article HTML is converted with `quick_html2md` (GFM, tables kept) and
//! then tidied so the result has no runs of blank lines or trailing spaces.

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};
use regex::Regex;
use std::sync::LazyLock;

/// Three or more consecutive newlines, optionally with blank-space lines between.
#[allow(clippy::expect_used)]
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*){2,}").expect("valid regex"));

/// Trailing spaces and tabs at the end of a line.
#[allow(clippy::expect_used)]
static TRAILING_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));

/// Convert article HTML to GitHub Flavored Markdown.
#[must_use]
pub fn to_markdown(html: &str) -> String {
    let options = MarkdownOptions::new()
        .include_links(true)
        .include_images(true)
        .preserve_tables(true);

    tidy_markdown(&html_to_markdown_with_options(html, &options))
}

/// Collapse blank-line runs to a single blank line and strip trailing whitespace.
///
/// ```rust
/// use readable_extract::markdown::tidy_markdown;
///
/// assert_eq!(tidy_markdown("# Title  \n\n\n\nBody\n\n"), "# Title\n\nBody");
/// ```
#[must_use]
pub fn tidy_markdown(markdown: &str) -> String {
    let trimmed = TRAILING_WS_RE.replace_all(markdown, "");
    let collapsed = BLANK_RUN_RE.replace_all(&trimmed, "\n\n");
    collapsed.trim().to_string()
}
