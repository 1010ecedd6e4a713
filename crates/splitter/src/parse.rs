//! Parse — binds a splitting strategy to field-record construction.

use thiserror::Error;

use crate::record::{Field, Fields};
use crate::split::{SplitError, Splitter};

#[derive(Debug, Error)]
pub enum ParseError {
    /// The held strategy failed on the line being parsed.
    #[error("unable to split line while parsing")]
    Split(#[source] SplitError),
}

/// Parses one log line into [`Fields`] by delegating to a splitter strategy.
///
/// Holds no per-call state: a single parser can serve many lines and be
/// shared read-only across independent readers.
pub struct Parser {
    splitter: Box<dyn Splitter>,
}

impl Parser {
    pub fn new(splitter: Box<dyn Splitter>) -> Self {
        Self { splitter }
    }

    /// Split `input` and wrap every substring into a positional [`Field`],
    /// preserving split order.
    ///
    /// An empty substring sequence from the strategy yields empty `Fields`,
    /// not an error.
    pub fn parse(&self, input: &str) -> Result<Fields, ParseError> {
        let values = self.splitter.split(input).map_err(ParseError::Split)?;
        tracing::trace!(fields = values.len(), "line split");
        Ok(values.into_iter().map(Field::positional).collect())
    }
}
