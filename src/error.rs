//! Error types for readable-extract.
//!
//! Every failure path of both binaries ends in one of these variants. The
//! `Display` text is the exact diagnostic line written to stderr.

/// Error type for acquisition, extraction and emission.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL variant was invoked without its positional argument.
    #[error("Please provide a URL as a command line argument.")]
    MissingUrl,

    /// Standard input reached end-of-stream without any bytes.
    #[error("No HTML content provided.")]
    EmptyInput,

    /// A target or base URL is not an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure while fetching the document.
    #[error("Error fetching the URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Reading standard input failed.
    #[error("Error reading standard input: {0}")]
    Read(#[source] std::io::Error),

    /// The readability heuristic found no article.
    #[error("Failed to parse the article.")]
    NoArticle,

    /// A panic escaped the DOM builder or the extractor.
    #[error("Internal extraction fault: {0}")]
    Internal(String),

    /// The output envelope could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the JSON line to stdout failed.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
