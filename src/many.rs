use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;

/// Kleene star: zero or more repetitions into the same slot.
///
/// Iterates the child until it fails without consuming, which counts as
/// a clean stop. A child failure *after* consuming propagates as a
/// committed failure. An iteration that succeeds without consuming also
/// stops the loop, so repetition terminates on finite input no matter
/// what the child does.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> IsParser for Many<P> {}

impl<S: Source, P: Parser<S>> Parser<S> for Many<P> {
    type Output = P::Output;

    fn parse(
        &self,
        cursor: &mut Cursor<S>,
        mut slot: Option<&mut Self::Output>,
    ) -> Result<bool, ParseError> {
        loop {
            let mark = cursor.byte_count();
            if self.parser.parse(cursor, slot.as_deref_mut())? {
                if cursor.byte_count() == mark {
                    return Ok(true);
                }
            } else if cursor.byte_count() == mark {
                return Ok(true);
            } else {
                return Ok(false);
            }
        }
    }
}

/// Zero or more repetitions of `parser`
pub fn many<P>(parser: P) -> Many<P> {
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::and::and;
    use crate::ascii::{digit, is_char};
    use crate::source::SliceSource;
    use crate::succ::succ;
    use crate::symbol::Symbol;

    fn over(data: &[u8]) -> Cursor<SliceSource<'_>> {
        Cursor::new(SliceSource::new(data))
    }

    #[test]
    fn test_zero_matches_still_succeeds() {
        let mut cursor = over(b"xyz");
        let mut out = String::new();
        assert!(many(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert!(out.is_empty());
        assert_eq!(cursor.byte_count(), 0);
    }

    #[test]
    fn test_accumulates_all_matches() {
        let mut cursor = over(b"123abc");
        let mut out = String::new();
        assert!(many(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "123");
        assert_eq!(cursor.peek(), Symbol::Byte(b'a'));
    }

    #[test]
    fn test_runs_to_end_of_input() {
        let mut cursor = over(b"777");
        let mut out = String::new();
        assert!(many(accept(digit())).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "777");
        assert!(cursor.peek().is_end());
    }

    #[test]
    fn test_committed_child_failure_propagates() {
        // child consumes 'a' then fails on the digit; the repetition
        // must report the committed failure instead of succeeding
        let mut cursor = over(b"a1a2ax");
        let mut out = String::new();
        let pair = and(accept(is_char(b'a')), accept(digit()));
        assert!(!many(pair).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "a1a2");
        assert_eq!(cursor.byte_count(), 5);
    }

    #[test]
    fn test_non_consuming_child_success_terminates() {
        let mut cursor = over(b"abc");
        assert!(many(succ()).run(&mut cursor, &mut ()).unwrap());
        assert_eq!(cursor.byte_count(), 0);
    }
}
