use regex::Regex;

use crate::split::traits::{SplitError, Splitter, SplitterError};

/// Splits a line by extracting the capture groups of a regular expression.
///
/// Group 0 (the whole match) is excluded from the result. A line the pattern
/// does not match yields zero fields with no error; groups that did not
/// participate in the match come back as empty values so positions stay
/// stable.
#[derive(Debug, Clone)]
pub struct RegexSplitter {
    regex: Regex,
    pattern: String,
}

impl RegexSplitter {
    /// Compile `pattern` into a splitter.
    ///
    /// The empty pattern compiles and matches vacuously, producing zero
    /// fields on every line.
    pub fn new(pattern: impl Into<String>) -> Result<Self, SplitterError> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern).map_err(|source| SplitterError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        Ok(Self { regex, pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Splitter for RegexSplitter {
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        let Some(caps) = self.regex.captures(input) else {
            return Ok(Vec::new());
        };
        Ok(caps
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect())
    }
}
