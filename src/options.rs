//! Configuration options for article extraction.
//!
//! The `Options` struct carries the readability tuning knobs and the output
//! toggles shared by both binaries.

/// Configuration options for extraction and output.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the same behaviour as Mozilla's Readability defaults.
///
/// # Example
///
/// ```rust
/// use readable_extract::Options;
///
/// let options = Options {
///     output_markdown: true,
///     char_threshold: 250,
///     ..Options::default()
/// };
/// assert!(options.output_markdown);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of elements the readability pass will parse.
    ///
    /// `0` disables the limit.
    ///
    /// Default: `0`
    pub max_elements_to_parse: usize,

    /// Number of top-scoring candidates compared when picking the article root.
    ///
    /// Default: `5`
    pub n_top_candidates: usize,

    /// Minimum number of characters an article must have before the
    /// heuristic stops relaxing its cleaning flags.
    ///
    /// Default: `500`
    pub char_threshold: usize,

    /// Keep `class` attributes in the article HTML.
    ///
    /// Default: `false`
    pub keep_classes: bool,

    /// Classes kept even when `keep_classes` is false.
    ///
    /// Default: empty
    pub classes_to_preserve: Vec<String>,

    /// Skip JSON-LD when collecting title, byline, excerpt and site name.
    ///
    /// Default: `false`
    pub disable_json_ld: bool,

    /// Add a GitHub Flavored Markdown rendering of the article to the output.
    ///
    /// Default: `false`
    pub output_markdown: bool,

    /// User-Agent header sent by the URL variant.
    ///
    /// Default: `readable-extract/<crate version>`
    pub user_agent: String,
}

/// Default User-Agent for outbound fetches.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl Default for Options {
    fn default() -> Self {
        Self {
            max_elements_to_parse: 0,
            n_top_candidates: 5,
            char_threshold: 500,
            keep_classes: false,
            classes_to_preserve: Vec::new(),
            disable_json_ld: false,
            output_markdown: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
