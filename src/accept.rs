use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::predicate::Predicate;
use crate::source::Source;
use crate::symbol::Symbol;

/// Recognizer lifting a predicate to a parser with soft failure.
///
/// On a match the symbol is appended to the string slot and the cursor
/// advances; on a mismatch the cursor is left untouched and the result is
/// a plain `false`, which choice and repetition recover from. This is the
/// hot path of the whole library: one predicate test, one push, one
/// advance.
#[derive(Debug, Clone)]
pub struct Accept<P> {
    pred: P,
}

impl<P> Accept<P> {
    pub fn new(pred: P) -> Self {
        Accept { pred }
    }
}

impl<P> IsParser for Accept<P> {}

impl<S: Source, P: Predicate> Parser<S> for Accept<P> {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<S>, slot: Option<&mut String>) -> Result<bool, ParseError> {
        let sym = cursor.peek();
        if !self.pred.test(sym) {
            return Ok(false);
        }
        if let (Some(out), Symbol::Byte(b)) = (slot, sym) {
            out.push(char::from(b));
        }
        cursor.advance();
        Ok(true)
    }
}

/// Accept one symbol satisfying `pred`; fail softly otherwise
pub fn accept<P: Predicate>(pred: P) -> Accept<P> {
    Accept::new(pred)
}
