use crate::split::traits::{SplitError, Splitter, SplitterError};

/// Splits a line on every non-overlapping occurrence of a literal delimiter.
///
/// Always yields at least one element (the whole input when the delimiter
/// never occurs), so splitting and re-joining with the same delimiter is the
/// identity.
#[derive(Debug, Clone)]
pub struct DelimiterSplitter {
    delim: String,
}

impl DelimiterSplitter {
    /// Build a delimiter splitter. The delimiter must be non-empty.
    pub fn new(delim: impl Into<String>) -> Result<Self, SplitterError> {
        let delim = delim.into();
        if delim.is_empty() {
            return Err(SplitterError::EmptyDelimiter(delim));
        }
        Ok(Self { delim })
    }

    pub fn delimiter(&self) -> &str {
        &self.delim
    }
}

impl Splitter for DelimiterSplitter {
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        Ok(input
            .split(self.delim.as_str())
            .map(str::to_string)
            .collect())
    }
}
