use thiserror::Error;

/// Errors raised while building or rewriting a [`Url`](super::Url)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The splitter could not decompose the input string
    #[error("invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// A path segment index past the end of the segment list (appending at
    /// exactly the end is allowed)
    #[error("invalid path index: {index} (url has {segments} segments)")]
    InvalidPathIndex { index: usize, segments: usize },

    /// Merge was handed something that is not a Url
    #[error("Url::merge_with must be passed a Url object, got {found}")]
    InvalidMergeArgument { found: String },
}

pub type Result<T> = std::result::Result<T, UrlError>;
