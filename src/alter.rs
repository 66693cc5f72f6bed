use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Committed alternation entry pairing a `condition` parser with a
/// `successor` parser.
///
/// If the condition fails, the whole entry fails at the original stream.
/// If it succeeds, the successor runs on the condition's result stream
/// and its outcome is returned verbatim — success or failure — with no
/// further alternative trials. Meant to be dispatched through
/// [`AlterSet`], where the condition acts as a short discriminating
/// prefix.
pub struct Alter<C, S> {
    condition: C,
    successor: S,
}

impl<C, S> Alter<C, S> {
    pub fn new(condition: C, successor: S) -> Self {
        Alter {
            condition,
            successor,
        }
    }
}

impl<'buf, C, S> Parser<'buf> for Alter<C, S>
where
    C: Parser<'buf>,
    S: Parser<'buf>,
{
    fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
        let condition = self.condition.parse(stream);
        if !condition.is_valid() {
            return Outcome::fail(stream);
        }
        self.successor.parse(condition.stream())
    }
}

/// Dispatch over [`Alter`] entries.
///
/// Each entry's condition is tried against the original stream; a failed
/// condition moves on to the next entry. Once a condition matches, the
/// stream is committed to that entry's successor and no further entries
/// are tried regardless of the successor's outcome. Useful when a
/// grammar is deterministic after a bounded lookahead and full
/// backtracking is undesirable.
///
/// A single-entry set degenerates to running that one entry; the empty
/// set is unrepresentable (no impl for the empty tuple).
pub struct AlterSet<T> {
    alters: T,
}

impl<T> AlterSet<T> {
    pub fn new(alters: T) -> Self {
        AlterSet { alters }
    }
}

macro_rules! impl_alter_set {
    ($($condition:ident $successor:ident $index:tt),+) => {
        impl<'buf, $($condition, $successor),+> Parser<'buf>
            for AlterSet<($(Alter<$condition, $successor>,)+)>
        where
            $($condition: Parser<'buf>, $successor: Parser<'buf>),+
        {
            fn parse(&self, stream: Stream<'buf>) -> Outcome<'buf> {
                $(
                    let condition = self.alters.$index.condition.parse(stream);
                    if condition.is_valid() {
                        return self.alters.$index.successor.parse(condition.stream());
                    }
                )+
                Outcome::fail(stream)
            }
        }
    };
}

impl_alter_set!(C0 S0 0);
impl_alter_set!(C0 S0 0, C1 S1 1);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6);
impl_alter_set!(C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7);
impl_alter_set!(
    C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8
);
impl_alter_set!(
    C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9
);
impl_alter_set!(
    C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9,
    C10 S10 10
);
impl_alter_set!(
    C0 S0 0, C1 S1 1, C2 S2 2, C3 S3 3, C4 S4 4, C5 S5 5, C6 S6 6, C7 S7 7, C8 S8 8, C9 S9 9,
    C10 S10 10, C11 S11 11
);

/// Convenience function to create an Alter entry
pub fn alter<'buf, C, S>(condition: C, successor: S) -> Alter<C, S>
where
    C: Parser<'buf>,
    S: Parser<'buf>,
{
    Alter::new(condition, successor)
}

/// Convenience function to create an AlterSet parser from a tuple of
/// Alter entries
pub fn alter_set<'buf, T>(alters: T) -> AlterSet<T>
where
    AlterSet<T>: Parser<'buf>,
{
    AlterSet::new(alters)
}
