use thiserror::Error;

/// Error returned by [`crate::parser::Parser::recognize`] when the input
/// does not belong to the language.
///
/// Inside the engine there is exactly one failure signal, the validity
/// flag on [`crate::outcome::Outcome`]. This type exists at the library
/// boundary to give callers a reportable position for a rejected input.
///
/// Note: the byte offset within the line is reported instead of a column
/// number because column calculation depends on text encoding, tab
/// rendering and terminal width. The element offset is unambiguous.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("input rejected at line {line}, byte offset {offset} (absolute position {position})")]
pub struct ParseError {
    position: usize,
    line: usize,
    offset: usize,
}

impl ParseError {
    /// Build an error for a parse of `input` that failed at `position`.
    pub fn new(input: &[u8], position: usize) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (index, &byte) in input.iter().enumerate() {
            if index >= position {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = index + 1;
            }
        }

        ParseError {
            position,
            line,
            offset: position - line_start,
        }
    }

    /// Absolute byte position of the failure in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-based line number of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte offset of the failure within its line.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
