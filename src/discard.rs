use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{IsParser, Parser};
use crate::source::Source;

/// Run a parser for its consumption only, dropping its result.
///
/// The child runs with no slot at all, so nothing is allocated or
/// written; the wrapper's own result type is unit, which the
/// least-general rule then erases from any surrounding choice or
/// sequence.
#[derive(Debug, Clone)]
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<P> IsParser for Discard<P> {}

impl<S: Source, P: Parser<S>> Parser<S> for Discard<P> {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<S>, _slot: Option<&mut ()>) -> Result<bool, ParseError> {
        self.parser.parse(cursor, None)
    }
}

/// Keep `parser`'s consumption, drop its result
pub fn discard<P>(parser: P) -> Discard<P> {
    Discard::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::accept;
    use crate::ascii::digit;
    use crate::many::many;
    use crate::source::SliceSource;
    use crate::symbol::Symbol;

    #[test]
    fn test_consumes_without_writing() {
        let mut cursor = Cursor::new(SliceSource::new(b"42x"));
        let parser = discard(many(accept(digit())));
        assert!(parser.run(&mut cursor, &mut ()).unwrap());
        assert_eq!(cursor.peek(), Symbol::Byte(b'x'));
    }

    #[test]
    fn test_failure_passes_through() {
        let mut cursor = Cursor::new(SliceSource::new(b"x"));
        let parser = discard(accept(digit()));
        assert!(!parser.run(&mut cursor, &mut ()).unwrap());
        assert_eq!(cursor.byte_count(), 0);
    }
}
