pub use super::model::{SplitError, SplitterError};

/// Capability interface: turn one input line into ordered substrings.
pub trait Splitter: Send + Sync {
    /// Split `input` into its parts, preserving order.
    ///
    /// An empty `Vec` is a valid "no fields" result, not a failure; callers
    /// must distinguish it from `Err` explicitly.
    fn split(&self, input: &str) -> Result<Vec<String>, SplitError>;
}
