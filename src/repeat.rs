use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Marker for an unbounded maximum occurrence count.
pub const UNBOUNDED: usize = usize::MAX;

/// Applies `parser` repeatedly from `stream`, bounded by `min` and `max`.
///
/// Each iteration re-applies the parser to the stream produced by the
/// previous successful application. Success requires
/// `min <= count <= max`; a bound violation fails at the stream after the
/// last successful application, not the original stream — callers who
/// need atomic all-or-nothing repetition wrap it in an alternation.
///
/// A successful application that consumes nothing would keep matching at
/// the same position forever; the loop stops after counting it once.
fn run_bounded<'buf, P>(parser: &P, stream: Stream<'buf>, min: usize, max: usize) -> Outcome<'buf>
where
    P: Parser<'buf>,
{
    if min > max {
        return Outcome::fail(stream);
    }
    if max == 0 {
        return Outcome::ok(stream);
    }

    let mut count: usize = 0;
    let mut last = stream;
    let mut attempt = parser.parse(stream);
    while attempt.is_valid() {
        count += 1;
        let consumed = attempt.cursor() > last.cursor();
        last = attempt.stream();

        if count > max {
            break;
        }
        if !consumed {
            break;
        }

        attempt = parser.parse(last);
    }

    if count < min || count > max {
        return Outcome::fail(last);
    }
    Outcome::ok(last)
}

/// Repetition with occurrence bounds fixed at compile time.
///
/// `Repeated<P>` defaults to the implicit `[0, unbounded]` range. The
/// accepted result's stream is the stream after the last successful
/// application, never the failing attempt's stream.
pub struct Repeated<P, const MIN: usize = 0, const MAX: usize = { UNBOUNDED }> {
    parser: P,
}

impl<P, const MIN: usize, const MAX: usize> Repeated<P, MIN, MAX> {
    pub fn new(parser: P) -> Self {
        Repeated { parser }
    }
}

impl<'buf, P, const MIN: usize, const MAX: usize> Parser<'buf> for Repeated<P, MIN, MAX>
where
    P: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        run_bounded(&self.parser, stream, MIN, MAX)
    }
}

/// Repetition with occurrence bounds supplied at runtime.
///
/// Same semantics as [`Repeated`]; only the bound encoding differs.
pub struct RepeatedRange<P> {
    parser: P,
    min: usize,
    max: usize,
}

impl<P> RepeatedRange<P> {
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        RepeatedRange { parser, min, max }
    }
}

impl<'buf, P> Parser<'buf> for RepeatedRange<P>
where
    P: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        run_bounded(&self.parser, stream, self.min, self.max)
    }
}

/// Convenience function to create a const-bounded Repeated parser,
/// e.g. `repeated::<2, 4, _>(parser)`
pub fn repeated<const MIN: usize, const MAX: usize, P>(parser: P) -> Repeated<P, MIN, MAX> {
    Repeated::new(parser)
}

/// Repeat with the implicit default range `[0, unbounded]`
pub fn repeat<'buf, P>(parser: P) -> RepeatedRange<P>
where
    P: Parser<'buf>,
{
    RepeatedRange::new(parser, 0, UNBOUNDED)
}

/// Repeat exactly `count` times
pub fn repeat_exact<'buf, P>(parser: P, count: usize) -> RepeatedRange<P>
where
    P: Parser<'buf>,
{
    RepeatedRange::new(parser, count, count)
}

/// Repeat between `min` and `max` times inclusive
pub fn repeat_range<'buf, P>(parser: P, min: usize, max: usize) -> RepeatedRange<P>
where
    P: Parser<'buf>,
{
    RepeatedRange::new(parser, min, max)
}
