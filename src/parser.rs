use crate::error::ParseError;
use crate::outcome::Outcome;
use crate::stream::Stream;

/// Core capability trait for parser combinators.
///
/// Anything callable with a [`Stream`] that produces an [`Outcome`] is a
/// parser: every combinator struct implements this, and so does any
/// `Fn(Stream) -> Outcome` through the blanket impl below. Plain named
/// functions therefore compose anywhere a combinator can, which is also
/// the indirection point recursive grammars need — a named function may
/// route back into itself through combinators without producing an
/// infinite type. See also [`crate::lazy::Lazy`] for deferring parser
/// construction to call time.
///
/// Parsers are pure: the outcome depends only on the input stream and the
/// parser's fixed configuration, so a constructed parser is reentrant and
/// shareable across threads.
pub trait Parser<'buf> {
    /// Attempt to match at the stream's cursor.
    ///
    /// On failure the returned outcome still carries a resume stream;
    /// its position is combinator-specific, see each combinator's
    /// documentation.
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf>;

    /// Run this parser over `input` from offset 0, converting failure
    /// into a positioned [`ParseError`].
    ///
    /// On success, returns the number of bytes consumed.
    fn recognize(&self, input: &'buf [u8]) -> Result<usize, ParseError> {
        let outcome = self.parse(Stream::new(input));
        if outcome.is_valid() {
            Ok(outcome.cursor())
        } else {
            Err(ParseError::new(input, outcome.cursor()))
        }
    }
}

/// Any `Fn(Stream) -> Outcome` is a parser.
impl<'buf, F> Parser<'buf> for F
where
    F: Fn(Stream<'buf>) -> Outcome<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        self(stream)
    }
}
