use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Return-type contract for capture visitors.
///
/// A visitor returning `bool` may veto an otherwise successful match; a
/// visitor returning `()` is a pure observer with no effect on validity.
pub trait Verdict {
    fn accepted(self) -> bool;
}

impl Verdict for () {
    fn accepted(self) -> bool {
        true
    }
}

impl Verdict for bool {
    fn accepted(self) -> bool {
        self
    }
}

/// Capture combinator: exposes the matched substring to a visitor.
///
/// An inner failure propagates untouched. On success, the buffer bytes
/// between the start and end cursors are passed to the visitor; a
/// `false` verdict converts the match into a failure at the *advanced*
/// stream — consumption is not rolled back. This is a validation hook,
/// not a backtracking point: downstream combinators may depend on the
/// position even when validity was vetoed.
///
/// Capture is the sole channel through which matched text leaves the
/// combinator graph; everything else communicates only validity and
/// position.
pub struct Visit<P, V> {
    parser: P,
    visitor: V,
}

impl<P, V> Visit<P, V> {
    pub fn new(parser: P, visitor: V) -> Self {
        Visit { parser, visitor }
    }
}

impl<'buf, P, V, R> Parser<'buf> for Visit<P, V>
where
    P: Parser<'buf>,
    V: Fn(&'buf [u8]) -> R,
    R: Verdict,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        let outcome = self.parser.parse(stream);
        if !outcome.is_valid() {
            return outcome;
        }

        let matched = &stream.buffer()[stream.cursor()..outcome.cursor()];
        if !(self.visitor)(matched).accepted() {
            return Outcome::fail(outcome.stream());
        }
        outcome
    }
}

/// Convenience function to create a Visit parser
pub fn capture<'buf, P, V, R>(parser: P, visitor: V) -> Visit<P, V>
where
    P: Parser<'buf>,
    V: Fn(&'buf [u8]) -> R,
    R: Verdict,
{
    Visit::new(parser, visitor)
}

/// Extension trait to add .capture() method support for parsers
pub trait CaptureExt<'buf>: Parser<'buf> + Sized {
    fn capture<V, R>(self, visitor: V) -> Visit<Self, V>
    where
        V: Fn(&'buf [u8]) -> R,
        R: Verdict,
    {
        Visit::new(self, visitor)
    }
}

impl<'buf, P> CaptureExt<'buf> for P where P: Parser<'buf> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::expect::{expect_set, expect_str};
    use crate::repeat::{repeat_range, UNBOUNDED};
    use std::cell::Cell;
    use std::cell::RefCell;

    #[test]
    fn test_visitor_receives_matched_text() {
        let data = b"abXY";
        let seen = RefCell::new(Vec::new());
        let parser = capture(expect_str("ab"), |text: &[u8]| {
            seen.borrow_mut().extend_from_slice(text);
        });

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 2);
        assert_eq!(seen.borrow().as_slice(), b"ab");
    }

    #[test]
    fn test_inner_failure_skips_visitor() {
        let data = b"xy";
        let called = Cell::new(false);
        let parser = capture(expect_str("ab"), |_text: &[u8]| {
            called.set(true);
        });

        let outcome = parser.parse(Stream::new(data));
        assert!(!outcome.is_valid());
        assert!(!called.get());
    }

    #[test]
    fn test_veto_fails_without_rolling_back() {
        let data = b"ab";
        let parser = capture(expect_str("ab"), |_text: &[u8]| false);

        let outcome = parser.parse(Stream::new(data));
        assert!(!outcome.is_valid());
        // Consumption already performed stands
        assert_eq!(outcome.cursor(), 2);
    }

    #[test]
    fn test_true_verdict_keeps_success() {
        let data = b"ab";
        let parser = capture(expect_str("ab"), |text: &[u8]| text == b"ab");

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 2);
    }

    #[test]
    fn test_capture_of_repetition() {
        let data = b"1234x";
        let digits = expect_set(Charset::range(b'0', b'9'));
        let number = RefCell::new(None);
        let parser = capture(repeat_range(digits, 1, UNBOUNDED), |text: &[u8]| {
            *number.borrow_mut() = std::str::from_utf8(text).ok().and_then(|s| s.parse::<u32>().ok());
        });

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 4);
        assert_eq!(number.borrow().unwrap(), 1234);
    }

    #[test]
    fn test_semantic_validation_as_veto() {
        // Accept a two-digit value only if it is below 50
        let digits = || expect_set(Charset::range(b'0', b'9'));
        let parser = capture(repeat_range(digits(), 2, 2), |text: &[u8]| {
            std::str::from_utf8(text)
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .is_some_and(|value| value < 50)
        });

        assert!(parser.parse(Stream::new(b"42")).is_valid());
        assert!(!parser.parse(Stream::new(b"99")).is_valid());
    }

    #[test]
    fn test_capture_method_syntax() {
        let data = b"ab";
        let length = Cell::new(0usize);
        let parser = expect_str("ab").capture(|text: &[u8]| length.set(text.len()));

        assert!(parser.parse(Stream::new(data)).is_valid());
        assert_eq!(length.get(), 2);
    }

    #[test]
    fn test_capture_mid_buffer_offsets() {
        let data = b"xxab";
        let seen = RefCell::new(Vec::new());
        let parser = capture(expect_str("ab"), |text: &[u8]| {
            seen.borrow_mut().extend_from_slice(text);
        });

        let outcome = parser.parse(Stream::with_offset(data, 2));
        assert!(outcome.is_valid());
        assert_eq!(seen.borrow().as_slice(), b"ab");
    }
}
