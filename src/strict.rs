use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;
use std::borrow::Cow;

/// Promote a committed failure to a hard one.
///
/// Wrapping a grammar rule in `strict` turns "the sequence diverged
/// partway through" into a raised diagnostic at the point of divergence,
/// named with the supplied expectation. A *non-consuming* failure of the
/// child stays soft, so a strict rule can still sit inside a choice.
#[derive(Debug, Clone)]
pub struct Strict<P> {
    parser: P,
    expected: Cow<'static, str>,
}

impl<P> Strict<P> {
    pub fn new(expected: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Strict {
            parser,
            expected: expected.into(),
        }
    }
}

impl<P> IsParser for Strict<P> {}

impl<S: Source, P: Parser<S>> Parser<S> for Strict<P> {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<S>,
        slot: Option<&mut Self::Output>,
    ) -> Result<bool, ParseError> {
        let mark = cursor.byte_count();
        if self.parser.parse(cursor, slot)? {
            return Ok(true);
        }
        if cursor.byte_count() == mark {
            return Ok(false);
        }
        Err(cursor.fail("expected", &self.expected))
    }
}

/// Raise a diagnostic named `expected` when `parser` fails after consuming
pub fn strict<P>(expected: impl Into<Cow<'static, str>>, parser: P) -> Strict<P> {
    Strict::new(expected, parser)
}
