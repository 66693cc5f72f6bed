use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Wraps a parser so that failure is absorbed.
///
/// If the inner parser fails, the optional succeeds at the original
/// stream — it never signals failure and never consumes on a failed
/// attempt, regardless of what stream the inner failure reported. An
/// inner success is returned verbatim, including its consumption.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'buf, P> Parser<'buf> for Optional<P>
where
    P: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        let outcome = self.parser.parse(stream);
        if outcome.is_valid() {
            outcome
        } else {
            Outcome::ok(stream)
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'buf, P>(parser: P) -> Optional<P>
where
    P: Parser<'buf>,
{
    Optional::new(parser)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptionalExt<'buf>: Parser<'buf> + Sized {
    fn opt(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'buf, P> OptionalExt<'buf> for P where P: Parser<'buf> {}
