//! Split — pluggable strategies that turn one log line into substrings.
//!
//! [`Splitter`] is the capability interface. [`DelimiterSplitter`] partitions
//! on a literal separator; [`RegexSplitter`] extracts the capture groups of a
//! full-line pattern. Both hold no per-call state after construction and are
//! safe to share read-only across any number of readers.

pub mod traits;
pub mod delimiter;
pub mod pattern;
pub mod model;

// Re-export the strategy surface
pub use traits::Splitter;
pub use delimiter::DelimiterSplitter;
pub use pattern::RegexSplitter;
pub use model::{SplitError, SplitterError};
