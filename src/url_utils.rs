//! URL Utility Functions
//!
//! Validation for the URL variant's target and for the stdin variant's
//! optional base URL. Only absolute `http`/`https` URLs with a host qualify.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            (true, Some(url))
        }
        _ => (false, None),
    }
}

/// Parse a target or base URL, rejecting anything that is not absolute http(s).
///
/// ```rust
/// use readable_extract::url_utils::parse_http_url;
///
/// let url = parse_http_url("https://example.com/post")?;
/// assert_eq!(url.host_str(), Some("example.com"));
/// assert!(parse_http_url("/relative/path").is_err());
/// # Ok::<(), readable_extract::Error>(())
/// ```
pub fn parse_http_url(s: &str) -> Result<Url> {
    match is_absolute_url(s) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUrl(s.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com").0);
        assert!(is_absolute_url("http://example.com/path?q=1").0);
        assert!(is_absolute_url("  https://example.com/  ").0);
        assert!(!is_absolute_url("").0);
        assert!(!is_absolute_url("example.com").0);
        assert!(!is_absolute_url("/path/only").0);
        assert!(!is_absolute_url("ftp://example.com/file").0);
        assert!(!is_absolute_url("mailto:someone@example.com").0);
    }

    #[test]
    fn test_parse_http_url_reports_input() {
        let err = parse_http_url(" not a url ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL: not a url");
    }

    #[test]
    fn test_parse_http_url_keeps_path() {
        let url = parse_http_url("https://example.com/blog/post.html").unwrap();
        assert_eq!(url.path(), "/blog/post.html");
    }
}
