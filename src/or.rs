use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::result::LeastGeneral;
use crate::source::Source;

/// Ordered choice over two parsers writing into one shared slot.
///
/// The first parser runs first; the second runs only when the first
/// failed *without consuming*. A first alternative that consumed input
/// before failing commits the whole choice to failure; recovery across
/// consumed symbols requires wrapping the alternative in
/// [`attempt`](crate::attempt::attempt) on a rewindable source.
///
/// The two result types are reconciled by the least-general rule, so
/// a unit-typed alternative (such as [`succ`](crate::succ::succ)) never
/// forces an annotation.
#[derive(Debug, Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> IsParser for Or<P1, P2> {}

impl<S, P1, P2> Parser<S> for Or<P1, P2>
where
    S: Source,
    P1: Parser<S>,
    P2: Parser<S>,
    P1::Output: LeastGeneral<P2::Output>,
{
    type Output = <P1::Output as LeastGeneral<P2::Output>>::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<S>,
        mut slot: Option<&mut Self::Output>,
    ) -> Result<bool, ParseError> {
        let mark = cursor.byte_count();
        let left = <P1::Output as LeastGeneral<P2::Output>>::narrow_left(slot.as_deref_mut());
        if self.parser1.parse(cursor, left)? {
            return Ok(true);
        }
        if cursor.byte_count() != mark {
            // committed: the first alternative consumed before failing
            return Ok(false);
        }
        let right = <P1::Output as LeastGeneral<P2::Output>>::narrow_right(slot);
        self.parser2.parse(cursor, right)
    }
}

/// Ordered choice; try `parser1`, then `parser2` if it did not consume
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2> {
    Or::new(parser1, parser2)
}

/// Extension trait adding `.or()` chaining to every parser value
pub trait OrExt: IsParser + Sized {
    fn or<Q: IsParser>(self, other: Q) -> Or<Self, Q> {
        Or::new(self, other)
    }
}

impl<P: IsParser> OrExt for P {}
