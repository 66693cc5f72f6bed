use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// A parser that defers construction of the actual parser until parse
/// time.
///
/// A grammar rule that refers to itself, directly or mutually, cannot be
/// represented as a finite static composition; routing the recursive
/// reference through a factory resolved at call time breaks the cycle.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'buf, F, P> Parser<'buf> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        (self.factory)().parse(stream)
    }
}

/// Convenience function to create a Lazy parser from a factory function
pub fn lazy<'buf, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'buf>,
{
    Lazy::new(factory)
}
