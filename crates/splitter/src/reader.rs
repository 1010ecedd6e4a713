//! Reader — line-oriented driver that feeds a parser one line at a time.
//!
//! A [`LineReader`] exclusively owns its scan cursor: `read` takes `&mut
//! self` and the source moves into the reader, so the cursor can never be
//! aliased. Clean exhaustion is reported as [`ReadOutcome::EndOfStream`], a
//! sentinel distinct from every error kind, so callers loop until they see it
//! and cannot mistake termination for failure.
//!
//! For concurrent processing of multiple sources, build one reader (with its
//! own parser) per stream and run them on independent threads; nothing is
//! shared between readers. Opening and closing the underlying resource is the
//! caller's job — pass `&mut source` to keep ownership outside the reader.

use std::io::BufRead;

use thiserror::Error;

use crate::parse::{ParseError, Parser};
use crate::record::Fields;

#[derive(Debug, Error)]
pub enum ReadError {
    /// The parser rejected the current line. Propagated unchanged; the line
    /// is consumed and the reader serves the next one on the next call.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The underlying source failed mid-read.
    #[error("unable to read line from source")]
    Io(#[from] std::io::Error),
}

/// Outcome of one [`LineReader::read`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// One line was consumed and parsed.
    Line(Fields),
    /// The source is exhausted. Terminal: every further call repeats it.
    EndOfStream,
}

/// Streaming driver: pulls one line per call and hands it to the parser.
///
/// Strictly forward-only and stateful; not safe for concurrent calls without
/// external synchronization.
pub struct LineReader<R> {
    source: R,
    parser: Parser,
    exhausted: bool,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R, parser: Parser) -> Self {
        Self {
            source,
            parser,
            exhausted: false,
            buf: String::new(),
        }
    }

    /// Consume exactly one line and parse it into [`Fields`].
    ///
    /// The trailing `\n` (and a preceding `\r`) is trimmed before parsing;
    /// an unterminated final line loses a trailing `\r` the same way.
    /// Once the source reports no more data the reader latches into its
    /// exhausted state and keeps answering `EndOfStream`, even if the source
    /// grows afterwards.
    pub fn read(&mut self) -> Result<ReadOutcome, ReadError> {
        if self.exhausted {
            return Ok(ReadOutcome::EndOfStream);
        }

        self.buf.clear();
        let bytes = self.source.read_line(&mut self.buf)?;
        if bytes == 0 {
            tracing::debug!("source exhausted");
            self.exhausted = true;
            return Ok(ReadOutcome::EndOfStream);
        }

        if self.buf.ends_with('\n') {
            self.buf.pop();
        }
        // A final unterminated line can still carry a stray `\r`; drop it
        // the same way a terminated `\r\n` line loses its carriage return.
        if self.buf.ends_with('\r') {
            self.buf.pop();
        }

        let fields = self.parser.parse(&self.buf)?;
        Ok(ReadOutcome::Line(fields))
    }

    /// Iterator adapter: one `Fields` per line, `None` at exhaustion.
    pub fn records(self) -> Records<R> {
        Records { reader: self }
    }

    /// Hand the source back so the caller can release it.
    pub fn into_inner(self) -> R {
        self.source
    }
}

/// Iterator over the remaining lines of a [`LineReader`].
pub struct Records<R> {
    reader: LineReader<R>,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Fields, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read() {
            Ok(ReadOutcome::Line(fields)) => Some(Ok(fields)),
            Ok(ReadOutcome::EndOfStream) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
