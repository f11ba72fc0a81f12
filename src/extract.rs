//! Readability extraction.
//!
//! A single `dom_smoothie` pass over the parsed document. The heuristic is
//! treated as opaque; this module only translates options in and the
//! article-or-nothing outcome out.

use dom_query::Document;
use dom_smoothie::{Config, Readability};
use tracing::{debug, instrument};
use url::Url;

use crate::document::ParsedDocument;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::Article;

/// Map [`Options`] onto the readability configuration.
#[must_use]
pub fn readability_config(options: &Options) -> Config {
    Config {
        max_elements_to_parse: options.max_elements_to_parse,
        n_top_candidates: options.n_top_candidates,
        char_threshold: options.char_threshold,
        keep_classes: options.keep_classes,
        classes_to_preserve: options.classes_to_preserve.clone(),
        disable_json_ld: options.disable_json_ld,
        ..Config::default()
    }
}

/// Run the readability heuristic once over `parsed`.
///
/// Returns [`Error::NoArticle`] when the heuristic gives up or when the
/// article it returns has no text.
#[instrument(skip_all)]
pub fn extract_article(parsed: ParsedDocument, options: &Options) -> Result<Article> {
    let ParsedDocument { document, base_url } = parsed;
    let cfg = readability_config(options);
    // Readability takes the document by value; read the heading first.
    let heading = sole_h1_text(&document);

    let mut reader = Readability::with_document(document, base_url.as_ref().map(Url::as_str), Some(cfg))
        .map_err(|e| {
            debug!(error = %e, "readability rejected document");
            Error::NoArticle
        })?;

    let article = reader.parse().map_err(|e| {
        debug!(error = %e, "readability found no article");
        Error::NoArticle
    })?;

    let text_content = article.text_content.to_string();
    if text_content.trim().is_empty() {
        debug!("readability returned an empty article");
        return Err(Error::NoArticle);
    }

    debug!(length = article.length, title = %article.title, "article extracted");

    Ok(Article {
        content: article.content.to_string(),
        text_content,
        title: non_empty(article.title).or(heading),
        byline: article.byline.and_then(non_empty),
        length: article.length,
        excerpt: article.excerpt.and_then(non_empty),
        site_name: article.site_name.and_then(non_empty),
    })
}

/// Text of the page's only `<h1>`, used as the title when the page has none.
fn sole_h1_text(document: &Document) -> Option<String> {
    let h1 = document.select("h1");
    if h1.length() != 1 {
        return None;
    }
    let text = h1.text().split_whitespace().collect::<Vec<_>>().join(" ");
    non_empty(text)
}

/// Readability reports missing strings as `""`; surface them as `None`.
fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
