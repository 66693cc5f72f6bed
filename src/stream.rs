/// An immutable view of the input buffer plus a cursor position.
///
/// Streams are `Copy` and are never mutated in place: every parser
/// consumes a stream by value and produces a new one sharing the same
/// buffer reference. Saved copies stay valid, which is what alternation
/// relies on to retry an alternative from the position before a failed
/// attempt.
///
/// Invariant: `cursor` never exceeds the buffer length. Construction and
/// advancement both clamp to the buffer end.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stream<'buf> {
    buffer: &'buf [u8],
    cursor: usize,
}

impl<'buf> Stream<'buf> {
    /// Create a stream positioned at the start of `buffer`.
    pub fn new(buffer: &'buf [u8]) -> Self {
        Stream { buffer, cursor: 0 }
    }

    /// Create a stream positioned at `offset`.
    ///
    /// Offsets past the end of the buffer are clamped to the buffer
    /// length.
    pub fn with_offset(buffer: &'buf [u8], offset: usize) -> Self {
        Stream {
            buffer,
            cursor: offset.min(buffer.len()),
        }
    }

    /// The full underlying buffer, independent of the cursor.
    pub fn buffer(&self) -> &'buf [u8] {
        self.buffer
    }

    /// Current byte offset into the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The byte at the cursor, or `None` at end of input.
    pub fn first(&self) -> Option<u8> {
        self.buffer.get(self.cursor).copied()
    }

    /// The unconsumed tail of the buffer.
    pub fn remaining(&self) -> &'buf [u8] {
        &self.buffer[self.cursor..]
    }

    /// Whether the cursor sits at the end of the buffer.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.buffer.len()
    }

    /// A new stream advanced by `count` bytes, clamped to the buffer end.
    pub fn advance(self, count: usize) -> Self {
        Stream {
            buffer: self.buffer,
            cursor: self.cursor.saturating_add(count).min(self.buffer.len()),
        }
    }
}
