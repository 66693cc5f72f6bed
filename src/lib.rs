//! # Pegcomb - Recognizer Combinator Library
//!
//! A compositional, single-pass recognizer engine: a small set of
//! building blocks that combine into parsers for grammars defined
//! directly in code, without a separate grammar file or generated
//! tables. The library emphasizes:
//!
//! - **Zero panics**: a failed match is a value, not an error path; the
//!   only signal is the validity flag on [`Outcome`]
//! - **Composability**: small parsers combine into larger ones using
//!   combinators, with ordered-choice (PEG) backtracking semantics
//! - **Purity**: streams are immutable views plus a cursor, parser
//!   configuration is fixed at construction, and constructed parsers are
//!   reentrant and shareable across threads
//! - **Performance**: byte-level matching over one contiguous buffer
//!   with O(1) charset membership and minimal allocation
//!
//! ## Example
//!
//! ```
//! use pegcomb::{expect_byte, expect_set, repeat_range, sequence};
//! use pegcomb::{Charset, Parser, Stream, UNBOUNDED};
//!
//! let digits = expect_set(Charset::range(b'0', b'9'));
//! let parser = sequence((
//!     expect_byte(b'('),
//!     repeat_range(digits, 1, UNBOUNDED),
//!     expect_byte(b')'),
//! ));
//!
//! let outcome = parser.parse(Stream::new(b"(123)"));
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.cursor(), 5);
//! ```

pub mod alter;
pub mod any_of;
pub mod ascii;
pub mod charset;
pub mod error;
pub mod expect;
pub mod lazy;
pub mod not;
pub mod optional;
pub mod outcome;
pub mod parser;
pub mod peek;
pub mod repeat;
pub mod sequence;
pub mod ser;
pub mod stream;
pub mod visit;

pub use alter::{Alter, AlterSet, alter, alter_set};
pub use any_of::{AnyOf, OrExt, any_of};
pub use charset::Charset;
pub use error::ParseError;
pub use expect::{ExpectByte, ExpectCharset, ExpectString, expect_byte, expect_set, expect_str};
pub use lazy::{Lazy, lazy};
pub use not::{Not, NotExt, not};
pub use optional::{Optional, OptionalExt, optional};
pub use outcome::Outcome;
pub use parser::Parser;
pub use peek::{Peek, peek};
pub use repeat::{
    Repeated, RepeatedRange, UNBOUNDED, repeat, repeat_exact, repeat_range, repeated,
};
pub use sequence::{AndExt, Sequence, sequence};
pub use stream::Stream;
pub use visit::{CaptureExt, Verdict, Visit, capture};
