use thiserror::Error;

/// Construction failures for the built-in splitter strategies.
///
/// Both variants are fatal to the construction attempt: the caller gets no
/// usable splitter and must not proceed with one.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The delimiter variant requires a non-empty literal.
    #[error("{0:?} is not a valid delimiter")]
    EmptyDelimiter(String),

    /// The pattern variant requires a compilable regular expression.
    #[error("unable to parse regex {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A strategy failed while splitting one line.
///
/// Neither built-in variant produces this; custom [`Splitter`] implementations
/// surface their underlying cause through it. A failed line does not poison
/// the stream — callers may keep reading subsequent lines.
///
/// [`Splitter`]: super::Splitter
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SplitError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SplitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
