//! logsplit — splits log lines into positional fields.
//!
//! The core is a pluggable [`Splitter`] strategy (literal delimiter or
//! capture-group regex) driven one line at a time by a [`LineReader`].
//! Everything is synchronous; see the module docs for the sharing rules.

// Data model
pub mod record;

// Domain modules
pub mod split;
pub mod parse;
pub mod reader;

// Re-export the public surface
pub use record::{Field, Fields};
pub use split::{DelimiterSplitter, RegexSplitter, SplitError, Splitter, SplitterError};
pub use parse::{ParseError, Parser};
pub use reader::{LineReader, ReadError, ReadOutcome, Records};
