use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Negative lookahead: succeeds iff the wrapped parser fails.
///
/// Never consumes any input regardless of outcome; the mirror image of
/// [`crate::peek::Peek`].
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'buf, P> Parser<'buf> for Not<P>
where
    P: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        Outcome::new(stream, !self.parser.parse(stream).is_valid())
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'buf, P>(parser: P) -> Not<P>
where
    P: Parser<'buf>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'buf>: Parser<'buf> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<'buf, P> NotExt<'buf> for P where P: Parser<'buf> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::expect::{expect_byte, expect_set, expect_str};
    use crate::sequence::sequence;

    #[test]
    fn test_not_fails_on_match() {
        let data = b"hello";
        let parser = not(expect_str("hello"));

        let outcome = parser.parse(Stream::new(data));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.cursor(), 0);
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let data = b"world";
        let parser = not(expect_str("hello"));

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 0);
    }

    #[test]
    fn test_not_method_syntax() {
        let data = b"abc";
        let parser = expect_byte(b'x').not();

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 0);
    }

    #[test]
    fn test_not_guard_in_sequence() {
        // Match one byte, any byte except the terminator
        let data = b"a;";
        let any_byte = expect_set(Charset::range(0x00, 0xFF));
        let parser = sequence((not(expect_byte(b';')), any_byte));

        let outcome = parser.parse(Stream::new(data));
        assert!(outcome.is_valid());
        assert_eq!(outcome.cursor(), 1);

        // At the terminator the guard rejects without consuming
        let outcome = parser.parse(Stream::with_offset(data, 1));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.cursor(), 1);
    }
}
