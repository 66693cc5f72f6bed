use crate::stream::Stream;

/// The outcome of attempting a parser: the stream to resume from plus a
/// validity flag.
///
/// When `valid` is false the stream's position depends on the combinator
/// that produced the outcome: leaf matchers and alternation report the
/// original position, while sequencing, committed successors and
/// repetition may report a partially advanced one. Callers must not
/// assume a failure left the stream untouched; each combinator documents
/// its own contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Outcome<'buf> {
    stream: Stream<'buf>,
    valid: bool,
}

impl<'buf> Outcome<'buf> {
    /// An outcome with an explicit validity flag.
    pub fn new(stream: Stream<'buf>, valid: bool) -> Self {
        Outcome { stream, valid }
    }

    /// A successful outcome resuming at `stream`.
    pub fn ok(stream: Stream<'buf>) -> Self {
        Outcome {
            stream,
            valid: true,
        }
    }

    /// A failed outcome reporting `stream` as the position reached.
    pub fn fail(stream: Stream<'buf>) -> Self {
        Outcome {
            stream,
            valid: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The stream to resume from.
    pub fn stream(&self) -> Stream<'buf> {
        self.stream
    }

    /// Cursor position of the resume stream.
    pub fn cursor(&self) -> usize {
        self.stream.cursor()
    }
}
