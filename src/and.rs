use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::result::LeastGeneral;
use crate::source::Source;

/// Sequence of two parsers writing into one shared slot.
///
/// The second parser runs against the cursor the first one left behind,
/// and both append to the same slot, so chains of
/// [`accept`](crate::accept::accept) accumulate a single match string
/// without intermediate allocations. A failure of the second parser
/// leaves the cursor wherever it stopped: the sequence is committed, not
/// atomic.
#[derive(Debug, Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> IsParser for And<P1, P2> {}

impl<S, P1, P2> Parser<S> for And<P1, P2>
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
        let left = <P1::Output as LeastGeneral<P2::Output>>::narrow_left(slot.as_deref_mut());
        if !self.parser1.parse(cursor, left)? {
            return Ok(false);
        }
        let right = <P1::Output as LeastGeneral<P2::Output>>::narrow_right(slot);
        self.parser2.parse(cursor, right)
    }
}

/// Sequence; run `parser1` then `parser2` into the same slot
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2> {
    And::new(parser1, parser2)
}

/// Extension trait adding `.and()` chaining to every parser value
pub trait AndExt: IsParser + Sized {
    fn and<Q: IsParser>(self, other: Q) -> And<Self, Q> {
        And::new(self, other)
    }
}

impl<P: IsParser> AndExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::ascii::{digit, is_char};
    use crate::discard::discard;
    use crate::source::SliceSource;
    use crate::symbol::Symbol;

    fn over(data: &[u8]) -> Cursor<SliceSource<'_>> {
        Cursor::new(SliceSource::new(data))
    }

    #[test]
    fn test_both_accumulate_into_one_string() {
        let mut cursor = over(b"a5z");
        let mut out = String::new();
        let parser = and(accept(is_char(b'a')), accept(digit()));
        assert!(parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "a5");
        assert_eq!(cursor.peek(), Symbol::Byte(b'z'));
    }

    #[test]
    fn test_first_soft_failure_is_non_consuming() {
        let mut cursor = over(b"5a");
        let mut out = String::new();
        let parser = and(accept(is_char(b'a')), accept(digit()));
        assert!(!parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(cursor.byte_count(), 0);
    }

    #[test]
    fn test_second_failure_is_committed() {
        let mut cursor = over(b"ax");
        let mut out = String::new();
        let parser = and(accept(is_char(b'a')), accept(is_char(b'b')));
        assert!(!parser.run(&mut cursor, &mut out).unwrap());
        // the cursor has advanced past 'a'
        assert_eq!(cursor.byte_count(), 1);
        assert_eq!(cursor.peek(), Symbol::Byte(b'x'));
    }

    #[test]
    fn test_discarded_prefix_keeps_string_result() {
        // `discard(x) && accept(y)` has string type with no annotation
        let mut cursor = over(b"#7");
        let mut out = String::new();
        let parser = and(discard(accept(is_char(b'#'))), accept(digit()));
        assert!(parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "7");
    }

    #[test]
    fn test_method_chain() {
        use crate::and::AndExt;

        let mut cursor = over(b"a5b");
        let mut out = String::new();
        let parser = accept(is_char(b'a')).and(accept(digit())).and(accept(is_char(b'b')));
        assert!(parser.run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "a5b");
    }
}
