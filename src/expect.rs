use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::predicate::Predicate;
use crate::source::Source;
use crate::symbol::Symbol;

/// Recognizer lifting a predicate to a parser with hard failure.
///
/// Behaves like [`accept`](crate::accept::accept) on a match; on a
/// mismatch it raises a [`ParseError`] whose expectation is the
/// predicate's name, captured at the current cursor position.
#[derive(Debug, Clone)]
pub struct Expect<P> {
    pred: P,
}

impl<P> Expect<P> {
    pub fn new(pred: P) -> Self {
        Expect { pred }
    }
}

impl<P> IsParser for Expect<P> {}

impl<S: Source, P: Predicate> Parser<S> for Expect<P> {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<S>, slot: Option<&mut String>) -> Result<bool, ParseError> {
        let sym = cursor.peek();
        if !self.pred.test(sym) {
            return Err(cursor.fail("expected", self.pred.name()));
        }
        if let (Some(out), Symbol::Byte(b)) = (slot, sym) {
            out.push(char::from(b));
        }
        cursor.advance();
        Ok(true)
    }
}

/// Demand one symbol satisfying `pred`; raise a diagnostic otherwise
pub fn expect<P: Predicate>(pred: P) -> Expect<P> {
    Expect::new(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{digit, is_char};
    use crate::source::SliceSource;

    fn over(data: &[u8]) -> Cursor<SliceSource<'_>> {
        Cursor::new(SliceSource::new(data))
    }

    #[test]
    fn test_match_behaves_like_accept() {
        let mut cursor = over(b"3a");
        let mut out = String::new();
        assert!(expect(digit()).run(&mut cursor, &mut out).unwrap());
        assert_eq!(out, "3");
        assert_eq!(cursor.peek(), Symbol::Byte(b'a'));
    }

    #[test]
    fn test_mismatch_raises_with_expectation() {
        let mut cursor = over(b"x");
        let mut out = String::new();
        let err = expect(digit()).run(&mut cursor, &mut out).unwrap_err();
        assert_eq!(err.expected(), "digit");
        assert_eq!(err.row(), 1);
        assert_eq!(err.col(), 1);
        assert_eq!(err.found(), Symbol::Byte(b'x'));
    }

    #[test]
    fn test_composed_predicate_name_in_diagnostic() {
        use crate::predicate::PredicateExt;

        let mut cursor = over(b"!");
        let mut out = String::new();
        let err = expect(is_char(b'a').or(is_char(b'b')))
            .run(&mut cursor, &mut out)
            .unwrap_err();
        assert_eq!(err.expected(), "('a' or 'b')");
    }

    #[test]
    fn test_end_of_input_raises() {
        let mut cursor = over(b"");
        let mut out = String::new();
        let err = expect(digit()).run(&mut cursor, &mut out).unwrap_err();
        assert_eq!(err.found(), Symbol::End);
    }
}
